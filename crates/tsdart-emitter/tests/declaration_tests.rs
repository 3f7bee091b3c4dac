//! Declarations: variables, functions, classes, interfaces, enums, imports.

mod support;

use support::*;
use tsdart_common::DiagnosticKind;
use tsdart_syntax::{
    Decl, HeritageToken, KeywordType, Literal, NodeArena, NodeData, NodeIndex, Stmt, TypeNode,
    VariableKind,
};

fn parameter(
    arena: &mut NodeArena,
    name: &str,
    type_node: Option<NodeIndex>,
    initializer: Option<NodeIndex>,
    optional: bool,
) -> NodeIndex {
    let name = arena.identifier(name);
    arena.alloc(NodeData::Decl(Decl::Parameter {
        name,
        type_node,
        initializer,
        optional,
    }))
}

fn heritage(arena: &mut NodeArena, token: HeritageToken, name: &str) -> NodeIndex {
    let expression = arena.identifier(name);
    let ty = arena.alloc(NodeData::Type(TypeNode::ExpressionWithTypeArguments {
        expression,
        type_arguments: vec![],
    }));
    arena.alloc(NodeData::Decl(Decl::HeritageClause {
        token,
        types: vec![ty],
    }))
}

fn messages(out: &tsdart_emitter::TranslateOutput) -> Vec<&str> {
    out.diagnostics
        .iter()
        .map(|d| d.message_text.as_str())
        .collect()
}

#[test]
fn test_variable_kinds() {
    let mut arena = NodeArena::new();
    let one = arena.numeric_literal("1");
    let constant = arena.variable_statement(VariableKind::Const, "x", None, Some(one));
    let two = arena.numeric_literal("2");
    let number = arena.keyword_type(KeywordType::Number);
    let typed_constant =
        arena.variable_statement(VariableKind::Const, "y", Some(number), Some(two));
    let plain = arena.variable_statement(VariableKind::Let, "z", None, None);

    let out = translate(&mut arena, vec![constant, typed_constant, plain]);
    assert_eq!(out.text, " final x = 1 ; final num y = 2 ; var z ;");
}

#[test]
fn test_typed_multi_declaration_is_unsupported() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let number = arena.keyword_type(KeywordType::Number);
    let first = arena.alloc(NodeData::Decl(Decl::VariableDeclaration {
        name: a,
        type_node: Some(number),
        initializer: None,
    }));
    let b = arena.identifier("b");
    let second = arena.alloc(NodeData::Decl(Decl::VariableDeclaration {
        name: b,
        type_node: None,
        initializer: None,
    }));
    let declaration_list = arena.alloc(NodeData::Decl(Decl::VariableDeclarationList {
        kind: VariableKind::Var,
        declarations: vec![first, second],
    }));
    let stmt = arena.alloc(NodeData::Stmt(Stmt::Variable { declaration_list }));

    let out = translate(&mut arena, vec![stmt]);
    assert_eq!(out.text, " ;");
    assert_eq!(messages(&out), vec!["typed variable declaration lists are unsupported"]);
}

#[test]
fn test_untyped_multi_declaration() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let first = arena.alloc(NodeData::Decl(Decl::VariableDeclaration {
        name: a,
        type_node: None,
        initializer: None,
    }));
    let b = arena.identifier("b");
    let one = arena.numeric_literal("1");
    let second = arena.alloc(NodeData::Decl(Decl::VariableDeclaration {
        name: b,
        type_node: None,
        initializer: Some(one),
    }));
    let declaration_list = arena.alloc(NodeData::Decl(Decl::VariableDeclarationList {
        kind: VariableKind::Var,
        declarations: vec![first, second],
    }));
    let stmt = arena.alloc(NodeData::Stmt(Stmt::Variable { declaration_list }));

    let out = translate(&mut arena, vec![stmt]);
    assert_eq!(out.text, " var a , b = 1 ;");
}

#[test]
fn test_function_with_optional_parameters() {
    let mut arena = NodeArena::new();
    let number = arena.keyword_type(KeywordType::Number);
    let a = parameter(&mut arena, "a", Some(number), None, false);
    let string = arena.keyword_type(KeywordType::String);
    let b = parameter(&mut arena, "b", Some(string), None, true);
    let one = arena.numeric_literal("1");
    let c = parameter(&mut arena, "c", None, Some(one), false);
    let name = arena.identifier("f");
    let return_type = arena.keyword_type(KeywordType::Void);
    let body = arena.block(vec![]);
    let function = arena.alloc(NodeData::Decl(Decl::Function {
        name,
        type_parameters: vec![],
        parameters: vec![a, b, c],
        return_type: Some(return_type),
        body: Some(body),
    }));

    let out = translate(&mut arena, vec![function]);
    assert_eq!(out.text, " void f ( num a , [ String b , c = 1 ] ) { }");
}

#[test]
fn test_arrow_and_function_expressions() {
    let mut arena = NodeArena::new();
    let a = parameter(&mut arena, "a", None, None, false);
    let body = arena.identifier("a");
    let arrow = arena.alloc(NodeData::Decl(Decl::ArrowFunction {
        parameters: vec![a],
        return_type: None,
        body,
    }));
    let arrow_stmt = arena.expression_statement(arrow);

    let b = parameter(&mut arena, "b", None, None, false);
    let value = arena.identifier("b");
    let ret = arena.alloc(NodeData::Stmt(Stmt::Return {
        expression: Some(value),
    }));
    let body = arena.block(vec![ret]);
    let function = arena.alloc(NodeData::Decl(Decl::FunctionExpression {
        name: None,
        parameters: vec![b],
        return_type: None,
        body,
    }));
    let function_stmt = arena.expression_statement(function);

    let out = translate(&mut arena, vec![arrow_stmt, function_stmt]);
    assert_eq!(out.text, " ( a ) => a ; ( b ) { return b ; } ;");
}

#[test]
fn test_class_members_and_heritage() {
    let mut arena = NodeArena::new();
    let extends = heritage(&mut arena, HeritageToken::Extends, "B");
    let implements = heritage(&mut arena, HeritageToken::Implements, "C");

    let x = arena.identifier("x");
    let number = arena.keyword_type(KeywordType::Number);
    let one = arena.numeric_literal("1");
    let static_prop = arena.alloc(NodeData::Decl(Decl::Property {
        decorators: vec![],
        is_static: true,
        name: x,
        type_node: Some(number),
        initializer: Some(one),
    }));
    let y = arena.identifier("y");
    let untyped_prop = arena.alloc(NodeData::Decl(Decl::Property {
        decorators: vec![],
        is_static: false,
        name: y,
        type_node: None,
        initializer: None,
    }));
    let param = parameter(&mut arena, "a", None, None, false);
    let ctor_body = arena.block(vec![]);
    let ctor = arena.alloc(NodeData::Decl(Decl::Constructor {
        parameters: vec![param],
        body: Some(ctor_body),
    }));
    let m = arena.identifier("m");
    let void = arena.keyword_type(KeywordType::Void);
    let method_body = arena.block(vec![]);
    let method = arena.alloc(NodeData::Decl(Decl::Method {
        decorators: vec![],
        is_static: false,
        name: m,
        parameters: vec![],
        return_type: Some(void),
        body: Some(method_body),
    }));

    let name = arena.identifier("A");
    let class = arena.alloc(NodeData::Decl(Decl::Class {
        decorators: vec![],
        is_abstract: false,
        name,
        type_parameters: vec![],
        heritage_clauses: vec![extends, implements],
        members: vec![static_prop, untyped_prop, ctor, method],
    }));

    let out = translate(&mut arena, vec![class]);
    assert_eq!(
        out.text,
        " class A extends B implements C { static num x = 1 ; var y ; A ( a ) { } void m ( ) { } }"
    );
}

#[test]
fn test_abstract_method_without_body() {
    let mut arena = NodeArena::new();
    let m = arena.identifier("m");
    let method = arena.alloc(NodeData::Decl(Decl::Method {
        decorators: vec![],
        is_static: false,
        name: m,
        parameters: vec![],
        return_type: None,
        body: None,
    }));
    let name = arena.identifier("Shape");
    let class = arena.alloc(NodeData::Decl(Decl::Class {
        decorators: vec![],
        is_abstract: true,
        name,
        type_parameters: vec![],
        heritage_clauses: vec![],
        members: vec![method],
    }));
    let out = translate(&mut arena, vec![class]);
    assert_eq!(out.text, " abstract class Shape { m ( ) ; }");
}

#[test]
fn test_interface_extends_become_implements() {
    let mut arena = NodeArena::new();
    let extends = heritage(&mut arena, HeritageToken::Extends, "J");
    let x = arena.identifier("x");
    let string = arena.keyword_type(KeywordType::String);
    let prop = arena.alloc(NodeData::Decl(Decl::PropertySignature {
        name: x,
        type_node: Some(string),
    }));
    let m = arena.identifier("m");
    let void = arena.keyword_type(KeywordType::Void);
    let method = arena.alloc(NodeData::Decl(Decl::MethodSignature {
        name: m,
        parameters: vec![],
        return_type: Some(void),
    }));
    let name = arena.identifier("I");
    let interface = arena.alloc(NodeData::Decl(Decl::Interface {
        name,
        type_parameters: vec![],
        heritage_clauses: vec![extends],
        members: vec![prop, method],
    }));

    let out = translate(&mut arena, vec![interface]);
    assert_eq!(
        out.text,
        " abstract class I implements J { String x ; void m ( ) ; }"
    );
}

#[test]
fn test_decorator_arguments_are_const() {
    let mut arena = NodeArena::new();
    let key = arena.identifier("selector");
    let value = arena.string_literal("app");
    let property = arena.literal(Literal::PropertyAssignment {
        name: key,
        initializer: value,
    });
    let config = arena.literal(Literal::Object {
        properties: vec![property],
    });
    let component = arena.identifier("Component");
    let call = arena.call(component, vec![config]);
    let decorator = arena.alloc(NodeData::Decl(Decl::Decorator { expression: call }));
    let name = arena.identifier("App");
    let class = arena.alloc(NodeData::Decl(Decl::Class {
        decorators: vec![decorator],
        is_abstract: false,
        name,
        type_parameters: vec![],
        heritage_clauses: vec![],
        members: vec![],
    }));

    let out = translate(&mut arena, vec![class]);
    assert_eq!(
        out.text,
        " @ Component ( const { \"selector\" : \"app\" } ) class App { }"
    );
}

#[test]
fn test_enum() {
    let mut arena = NodeArena::new();
    let mut members = Vec::new();
    for member in ["Red", "Green"] {
        let name = arena.identifier(member);
        members.push(arena.alloc(NodeData::Decl(Decl::EnumMember {
            name,
            initializer: None,
        })));
    }
    let name = arena.identifier("Color");
    let decl = arena.alloc(NodeData::Decl(Decl::Enum { name, members }));
    let out = translate(&mut arena, vec![decl]);
    assert_eq!(out.text, " enum Color { Red , Green }");
}

#[test]
fn test_enum_initializer_is_unsupported() {
    let mut arena = NodeArena::new();
    let red = arena.identifier("Red");
    let one = arena.numeric_literal("1");
    let member = arena.alloc(NodeData::Decl(Decl::EnumMember {
        name: red,
        initializer: Some(one),
    }));
    let name = arena.identifier("Color");
    let decl = arena.alloc(NodeData::Decl(Decl::Enum {
        name,
        members: vec![member],
    }));
    let out = translate(&mut arena, vec![decl]);
    assert_eq!(out.text, "");
    assert_eq!(messages(&out), vec!["enum initializers are unsupported"]);
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnsupportedConstruct);
}

#[test]
fn test_named_imports() {
    let mut arena = NodeArena::new();
    let mut named_imports = Vec::new();
    for imported in ["Future", "Stream"] {
        let name = arena.identifier(imported);
        named_imports.push(arena.alloc(NodeData::Decl(Decl::ImportSpecifier {
            property_name: None,
            name,
        })));
    }
    let module_specifier = arena.string_literal("./async");
    let import = arena.alloc(NodeData::Decl(Decl::Import {
        named_imports,
        module_specifier,
    }));
    let out = translate(&mut arena, vec![import]);
    assert_eq!(out.text, " import \"async.dart\" show Future , Stream ;");
}

#[test]
fn test_import_rename_is_unsupported() {
    let mut arena = NodeArena::new();
    let original = arena.identifier("Future");
    let local = arena.identifier("Later");
    let specifier = arena.alloc(NodeData::Decl(Decl::ImportSpecifier {
        property_name: Some(original),
        name: local,
    }));
    let module_specifier = arena.string_literal("angular2/async");
    let import = arena.alloc(NodeData::Decl(Decl::Import {
        named_imports: vec![specifier],
        module_specifier,
    }));
    let out = translate(&mut arena, vec![import]);
    assert_eq!(
        out.text,
        " import \"package:angular2/async.dart\" show ;"
    );
    assert_eq!(messages(&out), vec!["import renames are unsupported"]);
}

#[test]
fn test_import_equals() {
    let mut arena = NodeArena::new();
    let name = arena.identifier("core");
    let module_specifier = arena.string_literal("../core");
    let import = arena.alloc(NodeData::Decl(Decl::ImportEquals {
        name,
        module_specifier,
    }));
    let out = translate(&mut arena, vec![import]);
    assert_eq!(out.text, " import \"../core.dart\" as core ;");
}

#[test]
fn test_namespace_is_unsupported() {
    let mut arena = NodeArena::new();
    let name = arena.identifier("ns");
    let inner = arena.variable_statement(VariableKind::Var, "x", None, None);
    let module = arena.alloc(NodeData::Decl(Decl::Module {
        name,
        body: vec![inner],
    }));
    let out = translate(&mut arena, vec![module]);
    assert_eq!(out.text, "");
    assert_eq!(messages(&out), vec!["namespaces are unsupported"]);
}

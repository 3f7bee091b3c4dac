//! Expression translation without symbol information.

mod support;

use support::*;
use tsdart_common::{DiagnosticKind, diagnostic_codes};
use tsdart_syntax::{
    BinaryOperator, Decl, Expr, NodeArena, NodeData, PostfixOperator, PrefixOperator, Stmt,
};

#[test]
fn test_strict_equality_becomes_identical() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let b = arena.identifier("b");
    let eq = arena.binary(a, BinaryOperator::EqualsEqualsEquals, b);
    let eq_stmt = arena.expression_statement(eq);
    let c = arena.identifier("c");
    let d = arena.identifier("d");
    let ne = arena.binary(c, BinaryOperator::ExclamationEqualsEquals, d);
    let ne_stmt = arena.expression_statement(ne);

    let out = translate(&mut arena, vec![eq_stmt, ne_stmt]);
    assert_eq!(out.text, " identical ( a , b ) ; ! identical ( c , d ) ;");
}

#[test]
fn test_plain_binary_operators_pass_through() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let b = arena.identifier("b");
    let assign = arena.binary(a, BinaryOperator::PlusEquals, b);
    let out = translate_expression(&mut arena, assign);
    assert_eq!(out.text, " a += b ;");
}

#[test]
fn test_in_operator_is_rejected_without_output() {
    let mut arena = NodeArena::new();
    let key = arena.string_literal("k");
    let obj = arena.identifier("obj");
    let check = arena.binary(key, BinaryOperator::In, obj);
    let out = translate_expression(&mut arena, check);

    assert_eq!(out.text, " ;");
    assert_eq!(out.diagnostics.len(), 1);
    let diag = &out.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::UnsupportedConstruct);
    assert_eq!(diag.code, diagnostic_codes::UNSUPPORTED_CONSTRUCT);
    assert_eq!(diag.message_text, "in operator is unsupported");
    assert_eq!(diag.file, "test.ts");
}

#[test]
fn test_nested_in_operator_reports_once() {
    let mut arena = NodeArena::new();
    let f = arena.identifier("f");
    let key = arena.identifier("k");
    let obj = arena.identifier("obj");
    let check = arena.binary(key, BinaryOperator::In, obj);
    let call = arena.call(f, vec![check]);
    let out = translate_expression(&mut arena, call);

    assert_eq!(out.text, " f ( ) ;");
    assert_eq!(out.diagnostics.len(), 1);
}

#[test]
fn test_delete_void_typeof_are_unsupported() {
    let mut arena = NodeArena::new();
    let mut stmts = Vec::new();
    let x = arena.identifier("x");
    let delete = arena.alloc(NodeData::Expr(Expr::Delete { expression: x }));
    stmts.push(arena.expression_statement(delete));
    let y = arena.identifier("y");
    let void = arena.alloc(NodeData::Expr(Expr::Void { expression: y }));
    stmts.push(arena.expression_statement(void));
    let z = arena.identifier("z");
    let type_of = arena.alloc(NodeData::Expr(Expr::TypeOf { expression: z }));
    stmts.push(arena.expression_statement(type_of));

    let out = translate(&mut arena, stmts);
    assert_eq!(out.text, " ; ; ;");
    let messages: Vec<&str> = out
        .diagnostics
        .iter()
        .map(|d| d.message_text.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "delete operator is unsupported",
            "void operator is unsupported",
            "typeof operator is unsupported",
        ]
    );
    assert!(!out.is_success());
}

#[test]
fn test_instanceof_without_oracle_keeps_type_name() {
    let mut arena = NodeArena::new();
    let x = arena.identifier("x");
    let promise = arena.identifier("Promise");
    let check = arena.binary(x, BinaryOperator::InstanceOf, promise);
    let out = translate_expression(&mut arena, check);
    assert_eq!(out.text, " x is Promise ;");
}

#[test]
fn test_unary_conditional_element_access() {
    let mut arena = NodeArena::new();
    let a = arena.identifier("a");
    let not_a = arena.alloc(NodeData::Expr(Expr::PrefixUnary {
        operator: PrefixOperator::Exclamation,
        operand: a,
    }));
    let b = arena.identifier("b");
    let zero = arena.numeric_literal("0");
    let index = arena.alloc(NodeData::Expr(Expr::ElementAccess {
        expression: b,
        argument: zero,
    }));
    let c = arena.identifier("c");
    let incr = arena.alloc(NodeData::Expr(Expr::PostfixUnary {
        operator: PostfixOperator::PlusPlus,
        operand: c,
    }));
    let paren = arena.alloc(NodeData::Expr(Expr::Parenthesized { expression: incr }));
    let cond = arena.alloc(NodeData::Expr(Expr::Conditional {
        condition: not_a,
        when_true: index,
        when_false: paren,
    }));

    let out = translate_expression(&mut arena, cond);
    assert_eq!(out.text, " ! a ? b [ 0 ] : ( c ++ ) ;");
}

#[test]
fn test_new_expression_and_const_context() {
    let mut arena = NodeArena::new();
    let foo = arena.identifier("Foo");
    let one = arena.numeric_literal("1");
    let plain = arena.new_expression(foo, vec![one]);
    let plain_stmt = arena.expression_statement(plain);

    let bar = arena.identifier("Bar");
    let inner = arena.new_expression(bar, vec![]);
    let const_expr = arena.identifier("CONST_EXPR");
    let call = arena.call(const_expr, vec![inner]);
    let const_stmt = arena.expression_statement(call);

    let out = translate(&mut arena, vec![plain_stmt, const_stmt]);
    assert_eq!(
        out.text,
        " new Foo ( 1 ) ; CONST_EXPR ( const Bar ( ) ) ;"
    );
}

#[test]
fn test_call_with_type_arguments() {
    let mut arena = NodeArena::new();
    let f = arena.identifier("f");
    let t = arena.identifier("T");
    let t_ref = arena.type_reference(t, vec![]);
    let x = arena.identifier("x");
    let call = arena.alloc(NodeData::Expr(Expr::Call {
        expression: f,
        type_arguments: vec![t_ref],
        arguments: vec![x],
    }));
    let out = translate_expression(&mut arena, call);
    assert_eq!(out.text, " f < T > ( x ) ;");
}

#[test]
fn test_type_assertion() {
    let mut arena = NodeArena::new();
    let my_type = arena.identifier("MyType");
    let ty = arena.type_reference(my_type, vec![]);
    let value = arena.identifier("ref");
    let cast = arena.alloc(NodeData::Expr(Expr::TypeAssertion {
        type_node: ty,
        expression: value,
    }));
    let out = translate_expression(&mut arena, cast);
    assert_eq!(out.text, " ( ref as MyType ) ;");
}

fn try_catch(arena: &mut NodeArena, catch_type: Option<&str>, body: Vec<tsdart_syntax::NodeIndex>) -> tsdart_syntax::NodeIndex {
    let try_block = arena.block(vec![]);
    let name = arena.identifier("e");
    let type_node = catch_type.map(|ty| {
        let ty = arena.identifier(ty);
        arena.type_reference(ty, vec![])
    });
    let variable_declaration = arena.alloc(NodeData::Decl(Decl::VariableDeclaration {
        name,
        type_node,
        initializer: None,
    }));
    let block = arena.block(body);
    let catch_clause = arena.alloc(NodeData::Stmt(Stmt::CatchClause {
        variable_declaration,
        block,
    }));
    arena.alloc(NodeData::Stmt(Stmt::Try {
        try_block,
        catch_clause: Some(catch_clause),
        finally_block: None,
    }))
}

#[test]
fn test_catch_declares_stack_binding_and_rewrites_stack_access() {
    let mut arena = NodeArena::new();
    let e = arena.identifier("e");
    let stack = arena.property_access(e, "stack");
    let throw = arena.alloc(NodeData::Stmt(Stmt::Throw { expression: stack }));
    let try_stmt = try_catch(&mut arena, None, vec![throw]);

    let out = translate(&mut arena, vec![try_stmt]);
    assert_eq!(
        out.text,
        " try { } catch ( e , e_stack ) { throw e_stack ; }"
    );
}

#[test]
fn test_typed_catch_uses_on_clause() {
    let mut arena = NodeArena::new();
    let try_stmt = try_catch(&mut arena, Some("MyError"), vec![]);
    let out = translate(&mut arena, vec![try_stmt]);
    assert_eq!(out.text, " try { } on MyError catch ( e , e_stack ) { }");
}

#[test]
fn test_stack_access_outside_catch_is_untouched() {
    let mut arena = NodeArena::new();
    let e = arena.identifier("e");
    let stack = arena.property_access(e, "stack");
    let out = translate_expression(&mut arena, stack);
    assert_eq!(out.text, " e . stack ;");
}

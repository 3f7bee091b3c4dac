//! Syntax tree node types.
//!
//! Nodes live in a [`NodeArena`](crate::NodeArena) and refer to each other through
//! [`NodeIndex`] handles. The node payload is a closed sum type split per category
//! (names, literals, expressions, statements, types, declarations), so every consumer
//! that matches on a category is checked for exhaustiveness by the compiler.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::operators::{BinaryOperator, PostfixOperator, PrefixOperator};

/// Handle to a node in a [`NodeArena`](crate::NodeArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Child handles of a node, in source order.
pub type Children = SmallVec<[NodeIndex; 4]>;

/// A node header plus its payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub data: NodeData,
    /// Start position in source (byte offset)
    pub pos: u32,
    /// End position in source (byte offset)
    pub end: u32,
    /// Enclosing node, `None` for the root
    pub parent: Option<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    SourceFile(SourceFile),
    Name(Name),
    Literal(Literal),
    Expr(Expr),
    Stmt(Stmt),
    Type(TypeNode),
    Decl(Decl),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub file_name: String,
    pub statements: Vec<NodeIndex>,
}

/// Entity names: plain identifiers and dotted `a.b` names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Name {
    Identifier { text: String },
    Qualified { left: NodeIndex, right: NodeIndex },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Numeric { text: String },
    String { text: String },
    RegularExpression { text: String },
    NoSubstitutionTemplate { text: String },
    Template { head: NodeIndex, spans: Vec<NodeIndex> },
    TemplateHead { text: String },
    TemplateMiddle { text: String },
    TemplateTail { text: String },
    TemplateSpan { expression: NodeIndex, literal: NodeIndex },
    Array { elements: Vec<NodeIndex> },
    Object { properties: Vec<NodeIndex> },
    PropertyAssignment { name: NodeIndex, initializer: NodeIndex },
    ShorthandPropertyAssignment { name: NodeIndex },
    True,
    False,
    Null,
    This,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Binary {
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    },
    PrefixUnary {
        operator: PrefixOperator,
        operand: NodeIndex,
    },
    PostfixUnary {
        operator: PostfixOperator,
        operand: NodeIndex,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    Delete {
        expression: NodeIndex,
    },
    Void {
        expression: NodeIndex,
    },
    TypeOf {
        expression: NodeIndex,
    },
    Parenthesized {
        expression: NodeIndex,
    },
    PropertyAccess {
        expression: NodeIndex,
        name: NodeIndex,
    },
    ElementAccess {
        expression: NodeIndex,
        argument: NodeIndex,
    },
    Call {
        expression: NodeIndex,
        type_arguments: Vec<NodeIndex>,
        arguments: Vec<NodeIndex>,
    },
    New {
        expression: NodeIndex,
        type_arguments: Vec<NodeIndex>,
        /// `None` for `new Foo` without parentheses
        arguments: Option<Vec<NodeIndex>>,
    },
    /// Both `<T>expr` and `expr as T`.
    TypeAssertion {
        type_node: NodeIndex,
        expression: NodeIndex,
    },
    Super,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Block {
        statements: Vec<NodeIndex>,
    },
    Empty,
    Expression {
        expression: NodeIndex,
    },
    Variable {
        declaration_list: NodeIndex,
    },
    If {
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: Option<NodeIndex>,
    },
    Do {
        statement: NodeIndex,
        expression: NodeIndex,
    },
    While {
        expression: NodeIndex,
        statement: NodeIndex,
    },
    For {
        initializer: Option<NodeIndex>,
        condition: Option<NodeIndex>,
        incrementor: Option<NodeIndex>,
        statement: NodeIndex,
    },
    ForIn {
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    },
    ForOf {
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    },
    Continue {
        label: Option<NodeIndex>,
    },
    Break {
        label: Option<NodeIndex>,
    },
    Return {
        expression: Option<NodeIndex>,
    },
    Switch {
        expression: NodeIndex,
        case_block: NodeIndex,
    },
    CaseBlock {
        clauses: Vec<NodeIndex>,
    },
    CaseClause {
        expression: NodeIndex,
        statements: Vec<NodeIndex>,
    },
    DefaultClause {
        statements: Vec<NodeIndex>,
    },
    Labeled {
        label: NodeIndex,
        statement: NodeIndex,
    },
    Throw {
        expression: NodeIndex,
    },
    Try {
        try_block: NodeIndex,
        catch_clause: Option<NodeIndex>,
        finally_block: Option<NodeIndex>,
    },
    CatchClause {
        /// A `VariableDeclaration` node; its name is the caught binding.
        variable_declaration: NodeIndex,
        block: NodeIndex,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordType {
    Any,
    Number,
    String,
    Boolean,
    Void,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeNode {
    Keyword(KeywordType),
    Reference {
        type_name: NodeIndex,
        type_arguments: Vec<NodeIndex>,
    },
    Literal {
        members: Vec<NodeIndex>,
    },
    Parameter {
        name: NodeIndex,
        constraint: Option<NodeIndex>,
    },
    Array {
        element_type: NodeIndex,
    },
    Union {
        types: Vec<NodeIndex>,
    },
    Function {
        type_parameters: Vec<NodeIndex>,
        parameters: Vec<NodeIndex>,
        return_type: NodeIndex,
    },
    /// A heritage entry such as `Y<A, B>` in `class X extends Y<A, B>`.
    ExpressionWithTypeArguments {
        expression: NodeIndex,
        type_arguments: Vec<NodeIndex>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeritageToken {
    Extends,
    Implements,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    VariableDeclarationList {
        kind: VariableKind,
        declarations: Vec<NodeIndex>,
    },
    VariableDeclaration {
        name: NodeIndex,
        type_node: Option<NodeIndex>,
        initializer: Option<NodeIndex>,
    },
    Parameter {
        name: NodeIndex,
        type_node: Option<NodeIndex>,
        initializer: Option<NodeIndex>,
        optional: bool,
    },
    Function {
        name: NodeIndex,
        type_parameters: Vec<NodeIndex>,
        parameters: Vec<NodeIndex>,
        return_type: Option<NodeIndex>,
        body: Option<NodeIndex>,
    },
    FunctionExpression {
        name: Option<NodeIndex>,
        parameters: Vec<NodeIndex>,
        return_type: Option<NodeIndex>,
        body: NodeIndex,
    },
    ArrowFunction {
        parameters: Vec<NodeIndex>,
        return_type: Option<NodeIndex>,
        /// Either a `Block` statement or an expression
        body: NodeIndex,
    },
    Class {
        decorators: Vec<NodeIndex>,
        is_abstract: bool,
        name: NodeIndex,
        type_parameters: Vec<NodeIndex>,
        heritage_clauses: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    Interface {
        name: NodeIndex,
        type_parameters: Vec<NodeIndex>,
        heritage_clauses: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    },
    HeritageClause {
        token: HeritageToken,
        types: Vec<NodeIndex>,
    },
    Property {
        decorators: Vec<NodeIndex>,
        is_static: bool,
        name: NodeIndex,
        type_node: Option<NodeIndex>,
        initializer: Option<NodeIndex>,
    },
    Method {
        decorators: Vec<NodeIndex>,
        is_static: bool,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        return_type: Option<NodeIndex>,
        body: Option<NodeIndex>,
    },
    Constructor {
        parameters: Vec<NodeIndex>,
        body: Option<NodeIndex>,
    },
    PropertySignature {
        name: NodeIndex,
        type_node: Option<NodeIndex>,
    },
    MethodSignature {
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        return_type: Option<NodeIndex>,
    },
    Decorator {
        expression: NodeIndex,
    },
    Enum {
        name: NodeIndex,
        members: Vec<NodeIndex>,
    },
    EnumMember {
        name: NodeIndex,
        initializer: Option<NodeIndex>,
    },
    Import {
        named_imports: Vec<NodeIndex>,
        /// A string literal node
        module_specifier: NodeIndex,
    },
    ImportSpecifier {
        property_name: Option<NodeIndex>,
        name: NodeIndex,
    },
    /// `import x = require("module")`
    ImportEquals {
        name: NodeIndex,
        module_specifier: NodeIndex,
    },
    /// `module Foo { ... }` / `namespace Foo { ... }`
    Module {
        name: NodeIndex,
        body: Vec<NodeIndex>,
    },
}

fn push_opt(out: &mut Children, idx: &Option<NodeIndex>) {
    if let Some(idx) = idx {
        out.push(*idx);
    }
}

impl NodeData {
    /// Child nodes in source order.
    pub fn children(&self) -> Children {
        let mut out = Children::new();
        match self {
            NodeData::SourceFile(file) => out.extend(file.statements.iter().copied()),
            NodeData::Name(name) => match name {
                Name::Identifier { .. } => {}
                Name::Qualified { left, right } => out.extend([*left, *right]),
            },
            NodeData::Literal(lit) => match lit {
                Literal::Numeric { .. }
                | Literal::String { .. }
                | Literal::RegularExpression { .. }
                | Literal::NoSubstitutionTemplate { .. }
                | Literal::TemplateHead { .. }
                | Literal::TemplateMiddle { .. }
                | Literal::TemplateTail { .. }
                | Literal::True
                | Literal::False
                | Literal::Null
                | Literal::This => {}
                Literal::Template { head, spans } => {
                    out.push(*head);
                    out.extend(spans.iter().copied());
                }
                Literal::TemplateSpan {
                    expression,
                    literal,
                } => out.extend([*expression, *literal]),
                Literal::Array { elements } => out.extend(elements.iter().copied()),
                Literal::Object { properties } => out.extend(properties.iter().copied()),
                Literal::PropertyAssignment { name, initializer } => {
                    out.extend([*name, *initializer])
                }
                Literal::ShorthandPropertyAssignment { name } => out.push(*name),
            },
            NodeData::Expr(expr) => match expr {
                Expr::Binary { left, right, .. } => out.extend([*left, *right]),
                Expr::PrefixUnary { operand, .. } | Expr::PostfixUnary { operand, .. } => {
                    out.push(*operand)
                }
                Expr::Conditional {
                    condition,
                    when_true,
                    when_false,
                } => out.extend([*condition, *when_true, *when_false]),
                Expr::Delete { expression }
                | Expr::Void { expression }
                | Expr::TypeOf { expression }
                | Expr::Parenthesized { expression } => out.push(*expression),
                Expr::PropertyAccess { expression, name } => out.extend([*expression, *name]),
                Expr::ElementAccess {
                    expression,
                    argument,
                } => out.extend([*expression, *argument]),
                Expr::Call {
                    expression,
                    type_arguments,
                    arguments,
                } => {
                    out.push(*expression);
                    out.extend(type_arguments.iter().copied());
                    out.extend(arguments.iter().copied());
                }
                Expr::New {
                    expression,
                    type_arguments,
                    arguments,
                } => {
                    out.push(*expression);
                    out.extend(type_arguments.iter().copied());
                    out.extend(arguments.iter().flatten().copied());
                }
                Expr::TypeAssertion {
                    type_node,
                    expression,
                } => out.extend([*type_node, *expression]),
                Expr::Super => {}
            },
            NodeData::Stmt(stmt) => match stmt {
                Stmt::Block { statements }
                | Stmt::DefaultClause { statements } => out.extend(statements.iter().copied()),
                Stmt::Empty => {}
                Stmt::Expression { expression } | Stmt::Throw { expression } => {
                    out.push(*expression)
                }
                Stmt::Variable { declaration_list } => out.push(*declaration_list),
                Stmt::If {
                    expression,
                    then_statement,
                    else_statement,
                } => {
                    out.extend([*expression, *then_statement]);
                    push_opt(&mut out, else_statement);
                }
                Stmt::Do {
                    statement,
                    expression,
                } => out.extend([*statement, *expression]),
                Stmt::While {
                    expression,
                    statement,
                } => out.extend([*expression, *statement]),
                Stmt::For {
                    initializer,
                    condition,
                    incrementor,
                    statement,
                } => {
                    push_opt(&mut out, initializer);
                    push_opt(&mut out, condition);
                    push_opt(&mut out, incrementor);
                    out.push(*statement);
                }
                Stmt::ForIn {
                    initializer,
                    expression,
                    statement,
                }
                | Stmt::ForOf {
                    initializer,
                    expression,
                    statement,
                } => out.extend([*initializer, *expression, *statement]),
                Stmt::Continue { label } | Stmt::Break { label } => push_opt(&mut out, label),
                Stmt::Return { expression } => push_opt(&mut out, expression),
                Stmt::Switch {
                    expression,
                    case_block,
                } => out.extend([*expression, *case_block]),
                Stmt::CaseBlock { clauses } => out.extend(clauses.iter().copied()),
                Stmt::CaseClause {
                    expression,
                    statements,
                } => {
                    out.push(*expression);
                    out.extend(statements.iter().copied());
                }
                Stmt::Labeled { label, statement } => out.extend([*label, *statement]),
                Stmt::Try {
                    try_block,
                    catch_clause,
                    finally_block,
                } => {
                    out.push(*try_block);
                    push_opt(&mut out, catch_clause);
                    push_opt(&mut out, finally_block);
                }
                Stmt::CatchClause {
                    variable_declaration,
                    block,
                } => out.extend([*variable_declaration, *block]),
            },
            NodeData::Type(ty) => match ty {
                TypeNode::Keyword(_) => {}
                TypeNode::Reference {
                    type_name,
                    type_arguments,
                } => {
                    out.push(*type_name);
                    out.extend(type_arguments.iter().copied());
                }
                TypeNode::Literal { members } => out.extend(members.iter().copied()),
                TypeNode::Parameter { name, constraint } => {
                    out.push(*name);
                    push_opt(&mut out, constraint);
                }
                TypeNode::Array { element_type } => out.push(*element_type),
                TypeNode::Union { types } => out.extend(types.iter().copied()),
                TypeNode::Function {
                    type_parameters,
                    parameters,
                    return_type,
                } => {
                    out.extend(type_parameters.iter().copied());
                    out.extend(parameters.iter().copied());
                    out.push(*return_type);
                }
                TypeNode::ExpressionWithTypeArguments {
                    expression,
                    type_arguments,
                } => {
                    out.push(*expression);
                    out.extend(type_arguments.iter().copied());
                }
            },
            NodeData::Decl(decl) => decl.collect_children(&mut out),
        }
        out
    }

    /// Short kind name used in logs and internal errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeData::SourceFile(_) => "SourceFile",
            NodeData::Name(Name::Identifier { .. }) => "Identifier",
            NodeData::Name(Name::Qualified { .. }) => "QualifiedName",
            NodeData::Literal(lit) => match lit {
                Literal::Numeric { .. } => "NumericLiteral",
                Literal::String { .. } => "StringLiteral",
                Literal::RegularExpression { .. } => "RegularExpressionLiteral",
                Literal::NoSubstitutionTemplate { .. } => "NoSubstitutionTemplateLiteral",
                Literal::Template { .. } => "TemplateExpression",
                Literal::TemplateHead { .. } => "TemplateHead",
                Literal::TemplateMiddle { .. } => "TemplateMiddle",
                Literal::TemplateTail { .. } => "TemplateTail",
                Literal::TemplateSpan { .. } => "TemplateSpan",
                Literal::Array { .. } => "ArrayLiteralExpression",
                Literal::Object { .. } => "ObjectLiteralExpression",
                Literal::PropertyAssignment { .. } => "PropertyAssignment",
                Literal::ShorthandPropertyAssignment { .. } => "ShorthandPropertyAssignment",
                Literal::True => "TrueKeyword",
                Literal::False => "FalseKeyword",
                Literal::Null => "NullKeyword",
                Literal::This => "ThisKeyword",
            },
            NodeData::Expr(expr) => match expr {
                Expr::Binary { .. } => "BinaryExpression",
                Expr::PrefixUnary { .. } => "PrefixUnaryExpression",
                Expr::PostfixUnary { .. } => "PostfixUnaryExpression",
                Expr::Conditional { .. } => "ConditionalExpression",
                Expr::Delete { .. } => "DeleteExpression",
                Expr::Void { .. } => "VoidExpression",
                Expr::TypeOf { .. } => "TypeOfExpression",
                Expr::Parenthesized { .. } => "ParenthesizedExpression",
                Expr::PropertyAccess { .. } => "PropertyAccessExpression",
                Expr::ElementAccess { .. } => "ElementAccessExpression",
                Expr::Call { .. } => "CallExpression",
                Expr::New { .. } => "NewExpression",
                Expr::TypeAssertion { .. } => "TypeAssertionExpression",
                Expr::Super => "SuperKeyword",
            },
            NodeData::Stmt(stmt) => match stmt {
                Stmt::Block { .. } => "Block",
                Stmt::Empty => "EmptyStatement",
                Stmt::Expression { .. } => "ExpressionStatement",
                Stmt::Variable { .. } => "VariableStatement",
                Stmt::If { .. } => "IfStatement",
                Stmt::Do { .. } => "DoStatement",
                Stmt::While { .. } => "WhileStatement",
                Stmt::For { .. } => "ForStatement",
                Stmt::ForIn { .. } => "ForInStatement",
                Stmt::ForOf { .. } => "ForOfStatement",
                Stmt::Continue { .. } => "ContinueStatement",
                Stmt::Break { .. } => "BreakStatement",
                Stmt::Return { .. } => "ReturnStatement",
                Stmt::Switch { .. } => "SwitchStatement",
                Stmt::CaseBlock { .. } => "CaseBlock",
                Stmt::CaseClause { .. } => "CaseClause",
                Stmt::DefaultClause { .. } => "DefaultClause",
                Stmt::Labeled { .. } => "LabeledStatement",
                Stmt::Throw { .. } => "ThrowStatement",
                Stmt::Try { .. } => "TryStatement",
                Stmt::CatchClause { .. } => "CatchClause",
            },
            NodeData::Type(ty) => match ty {
                TypeNode::Keyword(_) => "KeywordType",
                TypeNode::Reference { .. } => "TypeReference",
                TypeNode::Literal { .. } => "TypeLiteral",
                TypeNode::Parameter { .. } => "TypeParameter",
                TypeNode::Array { .. } => "ArrayType",
                TypeNode::Union { .. } => "UnionType",
                TypeNode::Function { .. } => "FunctionType",
                TypeNode::ExpressionWithTypeArguments { .. } => "ExpressionWithTypeArguments",
            },
            NodeData::Decl(decl) => match decl {
                Decl::VariableDeclarationList { .. } => "VariableDeclarationList",
                Decl::VariableDeclaration { .. } => "VariableDeclaration",
                Decl::Parameter { .. } => "Parameter",
                Decl::Function { .. } => "FunctionDeclaration",
                Decl::FunctionExpression { .. } => "FunctionExpression",
                Decl::ArrowFunction { .. } => "ArrowFunction",
                Decl::Class { .. } => "ClassDeclaration",
                Decl::Interface { .. } => "InterfaceDeclaration",
                Decl::HeritageClause { .. } => "HeritageClause",
                Decl::Property { .. } => "PropertyDeclaration",
                Decl::Method { .. } => "MethodDeclaration",
                Decl::Constructor { .. } => "Constructor",
                Decl::PropertySignature { .. } => "PropertySignature",
                Decl::MethodSignature { .. } => "MethodSignature",
                Decl::Decorator { .. } => "Decorator",
                Decl::Enum { .. } => "EnumDeclaration",
                Decl::EnumMember { .. } => "EnumMember",
                Decl::Import { .. } => "ImportDeclaration",
                Decl::ImportSpecifier { .. } => "ImportSpecifier",
                Decl::ImportEquals { .. } => "ImportEqualsDeclaration",
                Decl::Module { .. } => "ModuleDeclaration",
            },
        }
    }
}

impl Decl {
    fn collect_children(&self, out: &mut Children) {
        match self {
            Decl::VariableDeclarationList { declarations, .. } => {
                out.extend(declarations.iter().copied())
            }
            Decl::VariableDeclaration {
                name,
                type_node,
                initializer,
            }
            | Decl::Parameter {
                name,
                type_node,
                initializer,
                ..
            } => {
                out.push(*name);
                push_opt(out, type_node);
                push_opt(out, initializer);
            }
            Decl::Function {
                name,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                out.push(*name);
                out.extend(type_parameters.iter().copied());
                out.extend(parameters.iter().copied());
                push_opt(out, return_type);
                push_opt(out, body);
            }
            Decl::FunctionExpression {
                name,
                parameters,
                return_type,
                body,
            } => {
                push_opt(out, name);
                out.extend(parameters.iter().copied());
                push_opt(out, return_type);
                out.push(*body);
            }
            Decl::ArrowFunction {
                parameters,
                return_type,
                body,
            } => {
                out.extend(parameters.iter().copied());
                push_opt(out, return_type);
                out.push(*body);
            }
            Decl::Class {
                decorators,
                name,
                type_parameters,
                heritage_clauses,
                members,
                ..
            } => {
                out.extend(decorators.iter().copied());
                out.push(*name);
                out.extend(type_parameters.iter().copied());
                out.extend(heritage_clauses.iter().copied());
                out.extend(members.iter().copied());
            }
            Decl::Interface {
                name,
                type_parameters,
                heritage_clauses,
                members,
            } => {
                out.push(*name);
                out.extend(type_parameters.iter().copied());
                out.extend(heritage_clauses.iter().copied());
                out.extend(members.iter().copied());
            }
            Decl::HeritageClause { types, .. } => out.extend(types.iter().copied()),
            Decl::Property {
                decorators,
                name,
                type_node,
                initializer,
                ..
            } => {
                out.extend(decorators.iter().copied());
                out.push(*name);
                push_opt(out, type_node);
                push_opt(out, initializer);
            }
            Decl::Method {
                decorators,
                name,
                parameters,
                return_type,
                body,
                ..
            } => {
                out.extend(decorators.iter().copied());
                out.push(*name);
                out.extend(parameters.iter().copied());
                push_opt(out, return_type);
                push_opt(out, body);
            }
            Decl::Constructor { parameters, body } => {
                out.extend(parameters.iter().copied());
                push_opt(out, body);
            }
            Decl::PropertySignature { name, type_node } => {
                out.push(*name);
                push_opt(out, type_node);
            }
            Decl::MethodSignature {
                name,
                parameters,
                return_type,
            } => {
                out.push(*name);
                out.extend(parameters.iter().copied());
                push_opt(out, return_type);
            }
            Decl::Decorator { expression } => out.push(*expression),
            Decl::Enum { name, members } => {
                out.push(*name);
                out.extend(members.iter().copied());
            }
            Decl::EnumMember { name, initializer } => {
                out.push(*name);
                push_opt(out, initializer);
            }
            Decl::Import {
                named_imports,
                module_specifier,
            } => {
                out.extend(named_imports.iter().copied());
                out.push(*module_specifier);
            }
            Decl::ImportSpecifier {
                property_name,
                name,
            } => {
                push_opt(out, property_name);
                out.push(*name);
            }
            Decl::ImportEquals {
                name,
                module_specifier,
            } => out.extend([*name, *module_specifier]),
            Decl::Module { name, body } => {
                out.push(*name);
                out.extend(body.iter().copied());
            }
        }
    }
}

//! Convenience constructors for the common node shapes.
//!
//! Front-ends and tests build trees bottom-up; anything not covered here goes through
//! [`NodeArena::alloc`] directly.

use crate::arena::NodeArena;
use crate::node::{
    Decl, Expr, KeywordType, Literal, Name, NodeData, NodeIndex, SourceFile, Stmt, TypeNode,
    VariableKind,
};
use crate::operators::BinaryOperator;

impl NodeArena {
    pub fn identifier(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::Name(Name::Identifier {
            text: text.to_string(),
        }))
    }

    pub fn qualified_name(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::Name(Name::Qualified { left, right }))
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::Literal(Literal::Numeric {
            text: text.to_string(),
        }))
    }

    /// A string literal; `text` is the cooked value without quotes.
    pub fn string_literal(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::Literal(Literal::String {
            text: text.to_string(),
        }))
    }

    pub fn literal(&mut self, literal: Literal) -> NodeIndex {
        self.alloc(NodeData::Literal(literal))
    }

    pub fn binary(&mut self, left: NodeIndex, operator: BinaryOperator, right: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::Expr(Expr::Binary {
            left,
            operator,
            right,
        }))
    }

    pub fn call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Expr(Expr::Call {
            expression,
            type_arguments: Vec::new(),
            arguments,
        }))
    }

    pub fn new_expression(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Expr(Expr::New {
            expression,
            type_arguments: Vec::new(),
            arguments: Some(arguments),
        }))
    }

    /// `expression.name`, allocating the name identifier.
    pub fn property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let name = self.identifier(name);
        self.alloc(NodeData::Expr(Expr::PropertyAccess { expression, name }))
    }

    pub fn expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::Stmt(Stmt::Expression { expression }))
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Stmt(Stmt::Block { statements }))
    }

    pub fn keyword_type(&mut self, keyword: KeywordType) -> NodeIndex {
        self.alloc(NodeData::Type(TypeNode::Keyword(keyword)))
    }

    pub fn type_reference(&mut self, type_name: NodeIndex, type_arguments: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Type(TypeNode::Reference {
            type_name,
            type_arguments,
        }))
    }

    /// `var name: type = initializer;` as a single-declaration variable statement.
    pub fn variable_statement(
        &mut self,
        kind: VariableKind,
        name: &str,
        type_node: Option<NodeIndex>,
        initializer: Option<NodeIndex>,
    ) -> NodeIndex {
        let name = self.identifier(name);
        let declaration = self.alloc(NodeData::Decl(Decl::VariableDeclaration {
            name,
            type_node,
            initializer,
        }));
        let declaration_list = self.alloc(NodeData::Decl(Decl::VariableDeclarationList {
            kind,
            declarations: vec![declaration],
        }));
        self.alloc(NodeData::Stmt(Stmt::Variable { declaration_list }))
    }

    pub fn source_file(&mut self, file_name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::SourceFile(SourceFile {
            file_name: file_name.to_string(),
            statements,
        }))
    }
}

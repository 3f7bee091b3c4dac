//! Syntax tree and symbol types for the tsdart translator.
//!
//! The TypeScript front-end (parser, binder, checker) is an external collaborator. This
//! crate fixes the shape of what it hands over:
//! - `NodeArena` / `Node` / `NodeData` - the immutable, arena-allocated syntax tree
//! - `SymbolId` / `Symbol` / `SymbolFlags` - declarations behind identifiers
//! - `TypeOracle` - symbol and type queries, with the in-memory `BoundOracle`

pub mod arena;
mod builder;
pub mod node;
pub mod operators;
pub mod oracle;
pub mod symbols;

pub use arena::NodeArena;
pub use node::{
    Children, Decl, Expr, HeritageToken, KeywordType, Literal, Name, Node, NodeData, NodeIndex,
    SourceFile, Stmt, TypeNode, VariableKind,
};
pub use operators::{BinaryOperator, PostfixOperator, PrefixOperator};
pub use oracle::{BoundOracle, TypeOracle};
pub use symbols::{Declaration, Symbol, SymbolFlags, SymbolId};

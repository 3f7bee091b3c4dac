//! Shared helpers for the emitter integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use tsdart_emitter::{TranslateOptions, TranslateOutput, Transpiler};
use tsdart_syntax::{
    BoundOracle, Expr, NodeArena, NodeData, NodeIndex, Symbol, SymbolFlags, SymbolId,
    TypeOracle,
};

pub const LIB: &str = "/usr/lib/node_modules/typescript/lib/lib.d.ts";
pub const LIB_ES6: &str = "/usr/lib/node_modules/typescript/lib/lib.es6.d.ts";
pub const BASE: &str = "/work";
pub const ES6_SHIM: &str = "/work/angular2/typings/es6-shim/es6-shim.d.ts";
pub const FACADE_LANG: &str = "/work/angular2/src/facade/lang.ts";
pub const FACADE_COLLECTION: &str = "/work/angular2/src/facade/collection.ts";
pub const FORWARD_REF: &str = "/work/angular2/src/core/di/forward_ref.ts";

pub fn options() -> TranslateOptions {
    TranslateOptions::default().with_base_path(BASE)
}

pub fn transpiler() -> Transpiler {
    Transpiler::new(options())
}

/// Wrap `statements` in a source file and translate it without an oracle.
pub fn translate(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> TranslateOutput {
    let root = arena.source_file("test.ts", statements);
    transpiler()
        .translate_unit(arena, root, None)
        .expect("translation should not fail")
}

pub fn translate_with(
    arena: &mut NodeArena,
    statements: Vec<NodeIndex>,
    oracle: &dyn TypeOracle,
) -> TranslateOutput {
    let root = arena.source_file("test.ts", statements);
    transpiler()
        .translate_unit(arena, root, Some(oracle))
        .expect("translation should not fail")
}

/// Translate `expression` as a single expression statement.
pub fn translate_expression(arena: &mut NodeArena, expression: NodeIndex) -> TranslateOutput {
    let stmt = arena.expression_statement(expression);
    translate(arena, vec![stmt])
}

pub fn translate_expression_with(
    arena: &mut NodeArena,
    expression: NodeIndex,
    oracle: &dyn TypeOracle,
) -> TranslateOutput {
    let stmt = arena.expression_statement(expression);
    translate_with(arena, vec![stmt], oracle)
}

/// The name node of a property access.
pub fn member_name(arena: &NodeArena, access: NodeIndex) -> NodeIndex {
    match &arena.get(access).expect("access node").data {
        NodeData::Expr(Expr::PropertyAccess { name, .. }) => *name,
        other => panic!("not a property access: {other:?}"),
    }
}

/// `receiver.method(arguments)`, returning `(call, method name node)`.
pub fn method_call(
    arena: &mut NodeArena,
    receiver: &str,
    method: &str,
    arguments: Vec<NodeIndex>,
) -> (NodeIndex, NodeIndex) {
    let receiver = arena.identifier(receiver);
    let access = arena.property_access(receiver, method);
    let name = member_name(arena, access);
    (arena.call(access, arguments), name)
}

/// Oracle with `Array`, `Map` and friends declared the way the standard typings do.
pub struct LibOracle {
    pub oracle: BoundOracle,
    pub array: SymbolId,
    pub map: SymbolId,
}

impl LibOracle {
    pub fn new() -> Self {
        let mut oracle = BoundOracle::new();
        let array = oracle.declare("Array", SymbolFlags::INTERFACE, LIB);
        let map = oracle.declare("Map", SymbolFlags::INTERFACE, ES6_SHIM);
        LibOracle { oracle, array, map }
    }

    pub fn member(&mut self, parent: SymbolId, name: &str) -> SymbolId {
        self.oracle.declare_member(parent, name, SymbolFlags::METHOD)
    }

    pub fn array_method(&mut self, name: &str) -> SymbolId {
        self.member(self.array, name)
    }

    pub fn map_method(&mut self, name: &str) -> SymbolId {
        self.member(self.map, name)
    }
}

/// Counts every oracle query; delegates to a [`BoundOracle`].
pub struct CountingOracle {
    pub inner: BoundOracle,
    calls: Cell<usize>,
}

impl CountingOracle {
    pub fn new(inner: BoundOracle) -> Self {
        CountingOracle {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl TypeOracle for CountingOracle {
    fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.tick();
        self.inner.symbol_at_location(node)
    }

    fn aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.tick();
        self.inner.aliased_symbol(symbol)
    }

    fn fully_qualified_name(&self, symbol: SymbolId) -> String {
        self.tick();
        self.inner.fully_qualified_name(symbol)
    }

    fn type_symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.tick();
        self.inner.type_symbol_at_location(node)
    }

    fn symbol(&self, symbol: SymbolId) -> Option<&Symbol> {
        self.tick();
        self.inner.symbol(symbol)
    }
}

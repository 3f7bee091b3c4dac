//! Symbol-resolution oracle consumed by the translator.
//!
//! The oracle is implemented by the external binder/checker. [`BoundOracle`] is the
//! in-memory form: the front-end (or a test) declares symbols and binds nodes to them.

use rustc_hash::FxHashMap;

use crate::node::NodeIndex;
use crate::symbols::{Declaration, Symbol, SymbolFlags, SymbolId};

pub trait TypeOracle {
    /// Symbol referenced by the identifier or name at `node`.
    fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId>;

    /// Target of an alias symbol (one step of the alias chain).
    fn aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId>;

    /// Dotted name of `symbol` within its declaring module, e.g. `Array.push`.
    fn fully_qualified_name(&self, symbol: SymbolId) -> String;

    /// Symbol of the static type of the expression at `node`.
    fn type_symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId>;

    fn symbol(&self, symbol: SymbolId) -> Option<&Symbol>;
}

#[derive(Debug, Default)]
pub struct BoundOracle {
    symbols: Vec<Symbol>,
    node_symbols: FxHashMap<NodeIndex, SymbolId>,
    node_types: FxHashMap<NodeIndex, SymbolId>,
    alias_targets: FxHashMap<SymbolId, SymbolId>,
}

impl BoundOracle {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    /// Declare a top-level symbol in `file_name`.
    pub fn declare(&mut self, name: &str, flags: SymbolFlags, file_name: &str) -> SymbolId {
        self.push(Symbol {
            name: name.to_string(),
            flags,
            declarations: vec![Declaration {
                file_name: file_name.to_string(),
                node: None,
            }],
            value_declaration: has_value(flags).then_some(0),
            parent: None,
        })
    }

    /// Declare a member of `parent`, declared in the parent's file.
    pub fn declare_member(&mut self, parent: SymbolId, name: &str, flags: SymbolFlags) -> SymbolId {
        let declarations = self
            .symbols
            .get(parent.0 as usize)
            .and_then(|p| p.primary_declaration())
            .map(|d| Declaration {
                file_name: d.file_name.clone(),
                node: None,
            })
            .into_iter()
            .collect();
        self.push(Symbol {
            name: name.to_string(),
            flags,
            declarations,
            value_declaration: has_value(flags).then_some(0),
            parent: Some(parent),
        })
    }

    /// Declare a symbol with no declarations at all (an unresolvable stub).
    pub fn declare_without_declarations(&mut self, name: &str, flags: SymbolFlags) -> SymbolId {
        self.push(Symbol {
            name: name.to_string(),
            flags,
            declarations: Vec::new(),
            value_declaration: None,
            parent: None,
        })
    }

    /// Declare an import/re-export alias of `target` living in `file_name`.
    pub fn declare_alias(&mut self, name: &str, target: SymbolId, file_name: &str) -> SymbolId {
        let id = self.push(Symbol {
            name: name.to_string(),
            flags: SymbolFlags::ALIAS,
            declarations: vec![Declaration {
                file_name: file_name.to_string(),
                node: None,
            }],
            value_declaration: None,
            parent: None,
        });
        self.alias_targets.insert(id, target);
        id
    }

    /// Record that `node` refers to `symbol`.
    pub fn bind(&mut self, node: NodeIndex, symbol: SymbolId) {
        self.node_symbols.insert(node, symbol);
    }

    /// Record the symbol of the static type of the expression at `node`.
    pub fn bind_type(&mut self, node: NodeIndex, symbol: SymbolId) {
        self.node_types.insert(node, symbol);
    }
}

fn has_value(flags: SymbolFlags) -> bool {
    flags.intersects(
        SymbolFlags::VARIABLE
            | SymbolFlags::FUNCTION
            | SymbolFlags::CLASS
            | SymbolFlags::METHOD
            | SymbolFlags::PROPERTY
            | SymbolFlags::ENUM_MEMBER
            | SymbolFlags::VALUE_MODULE,
    )
}

impl TypeOracle for BoundOracle {
    fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_symbols.get(&node).copied()
    }

    fn aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.alias_targets.get(&symbol).copied()
    }

    fn fully_qualified_name(&self, symbol: SymbolId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(symbol);
        while let Some(id) = current {
            let Some(sym) = self.symbol(id) else {
                break;
            };
            parts.push(sym.name.as_str());
            current = sym.parent;
        }
        parts.reverse();
        parts.join(".")
    }

    fn type_symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_types.get(&node).copied()
    }

    fn symbol(&self, symbol: SymbolId) -> Option<&Symbol> {
        self.symbols.get(symbol.0 as usize)
    }
}

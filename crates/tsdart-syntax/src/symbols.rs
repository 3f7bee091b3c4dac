//! Symbol data supplied by the binder/checker front-end.

use bitflags::bitflags;

use crate::node::NodeIndex;

/// Handle to a symbol owned by a [`TypeOracle`](crate::TypeOracle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

bitflags! {
    /// Symbol flags, numbered like the TypeScript checker's `SymbolFlags`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const FUNCTION_SCOPED_VARIABLE = 1 << 0;
        const BLOCK_SCOPED_VARIABLE = 1 << 1;
        const PROPERTY = 1 << 2;
        const ENUM_MEMBER = 1 << 3;
        const FUNCTION = 1 << 4;
        const CLASS = 1 << 5;
        const INTERFACE = 1 << 6;
        const REGULAR_ENUM = 1 << 8;
        const VALUE_MODULE = 1 << 9;
        const NAMESPACE_MODULE = 1 << 10;
        const METHOD = 1 << 13;
        const CONSTRUCTOR = 1 << 14;
        const TYPE_PARAMETER = 1 << 18;
        const TYPE_ALIAS = 1 << 19;
        const ALIAS = 1 << 21;

        const VARIABLE = Self::FUNCTION_SCOPED_VARIABLE.bits() | Self::BLOCK_SCOPED_VARIABLE.bits();
    }
}

/// One declaration site of a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// File the declaration lives in, as the front-end saw it (absolute or project-relative)
    pub file_name: String,
    /// Declaration node, when it belongs to the unit being translated
    pub node: Option<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub flags: SymbolFlags,
    pub declarations: Vec<Declaration>,
    /// Index into `declarations` of the value declaration, if the symbol has a value
    pub value_declaration: Option<usize>,
    /// Containing symbol (class, interface, namespace) for members
    pub parent: Option<SymbolId>,
}

impl Symbol {
    pub fn is_alias(&self) -> bool {
        self.flags.contains(SymbolFlags::ALIAS)
    }

    /// The value declaration, or the first declaration for pure type declarations.
    pub fn primary_declaration(&self) -> Option<&Declaration> {
        self.value_declaration
            .and_then(|i| self.declarations.get(i))
            .or_else(|| self.declarations.first())
    }
}

//! Arena storage for syntax nodes.
//!
//! The front-end allocates children before parents; [`NodeArena::alloc`] links every
//! child back to its new parent so the translator can answer ancestor queries.

use serde::{Deserialize, Serialize};

use crate::node::{Name, Node, NodeData, NodeIndex};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
    /// Source text of the unit, when the front-end kept it (used for diagnostics)
    #[serde(default)]
    source_text: Option<String>,
    /// Next synthetic offset for nodes allocated without an explicit span
    #[serde(default)]
    cursor: u32,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_text(source_text: impl Into<String>) -> Self {
        NodeArena {
            source_text: Some(source_text.into()),
            ..Self::default()
        }
    }

    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }

    /// Allocate a node whose span covers its children.
    ///
    /// Leaf nodes get a synthetic span after the previously allocated leaf, which keeps
    /// offsets increasing in source order for trees built bottom-up, left to right.
    pub fn alloc(&mut self, data: NodeData) -> NodeIndex {
        let children = data.children();
        let (pos, end) = if children.is_empty() {
            let pos = self.cursor;
            let end = pos + leaf_width(&data);
            self.cursor = end + 1;
            (pos, end)
        } else {
            let pos = children
                .iter()
                .filter_map(|&c| self.get(c))
                .map(|n| n.pos)
                .min()
                .unwrap_or(self.cursor);
            let end = children
                .iter()
                .filter_map(|&c| self.get(c))
                .map(|n| n.end)
                .max()
                .unwrap_or(pos);
            (pos, end)
        };
        self.alloc_at(data, pos, end)
    }

    /// Allocate a node with an explicit source span.
    pub fn alloc_at(&mut self, data: NodeData, pos: u32, end: u32) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        for child in data.children() {
            if let Some(node) = self.nodes.get_mut(child.index()) {
                node.parent = Some(idx);
            }
        }
        self.cursor = self.cursor.max(end + 1);
        self.nodes.push(Node {
            data,
            pos,
            end,
            parent: None,
        });
        idx
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.get(idx)?.parent
    }

    /// Strict ancestors of `idx`, innermost first.
    pub fn ancestors(&self, idx: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.parent(idx),
        }
    }

    /// Text of an identifier node.
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        match &self.get(idx)?.data {
            NodeData::Name(Name::Identifier { text }) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Dotted text of an identifier or qualified name (`a.b.C`).
    pub fn entity_name_text(&self, idx: NodeIndex) -> Option<String> {
        match &self.get(idx)?.data {
            NodeData::Name(Name::Identifier { text }) => Some(text.clone()),
            NodeData::Name(Name::Qualified { left, right }) => {
                let left = self.entity_name_text(*left)?;
                Some(format!("{left}.{}", self.identifier_text(*right)?))
            }
            _ => None,
        }
    }
}

pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeIndex>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.arena.get(idx)?;
        self.next = node.parent;
        Some((idx, node))
    }
}

fn leaf_width(data: &NodeData) -> u32 {
    use crate::node::Literal;
    let text = match data {
        NodeData::Name(Name::Identifier { text }) => text.as_str(),
        NodeData::Literal(
            Literal::Numeric { text }
            | Literal::String { text }
            | Literal::RegularExpression { text }
            | Literal::NoSubstitutionTemplate { text }
            | Literal::TemplateHead { text }
            | Literal::TemplateMiddle { text }
            | Literal::TemplateTail { text },
        ) => text.as_str(),
        _ => "",
    };
    (text.len() as u32).max(1)
}

//! Extra `import` directives required by rewritten type names.

use indexmap::IndexSet;
use tracing::debug;
use tsdart_syntax::{NodeData, NodeIndex, TypeNode};

use crate::translator::{TranslateResult, UnitTranslator};

impl<'a> UnitTranslator<'a> {
    /// Import targets needed by type references under `root`, in first-use order.
    pub fn required_imports(&self, root: NodeIndex) -> TranslateResult<IndexSet<&'a str>> {
        let facade = self.facade;
        let imports = &facade.rules().extra_imports;
        let mut required = IndexSet::new();
        if imports.is_empty() {
            return Ok(required);
        }

        // Pre-order walk; children are pushed reversed so they pop in source order.
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = self.node(idx)?;
            if let NodeData::Type(TypeNode::Reference { type_name, .. }) = &node.data
                && let Some(name) = self.arena.entity_name_text(*type_name)
                && let Some(target) = imports.get(&name)
            {
                required.insert(target.as_str());
            }
            stack.extend(node.data.children().into_iter().rev());
        }
        Ok(required)
    }

    /// Emit `import "<target>";` once per required target, ahead of the unit body.
    pub fn emit_extra_imports(&mut self, root: NodeIndex) -> TranslateResult<()> {
        for target in self.required_imports(root)? {
            if self.emitted_imports.insert(target.to_string()) {
                debug!(target, "extra import");
                self.emit(&format!("import \"{target}\";"));
            }
        }
        Ok(())
    }
}

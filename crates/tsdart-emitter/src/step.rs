//! The translation step contract.

use tsdart_syntax::{Node, NodeIndex};

use crate::translator::{TranslateResult, UnitTranslator};

/// One stage of the dispatch chain.
///
/// `attempt` returns `Ok(true)` when the step claimed the node; it is then the only
/// source of output for that node and must visit children itself. Returning `Ok(false)`
/// passes the node on to the next step without emitting anything.
pub trait TranslationStep: Send + Sync {
    fn name(&self) -> &'static str;

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool>;
}

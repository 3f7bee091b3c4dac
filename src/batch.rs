//! Parallel translation of independent units.
//!
//! A [`Transpiler`] is immutable after construction, so one instance is shared by every
//! worker; each unit gets its own run state inside `translate_unit`.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;
use tsdart_emitter::{TranslateOutput, TranslateResult, Transpiler};
use tsdart_syntax::{NodeArena, NodeIndex, TypeOracle};

/// One translation unit: a tree, its root, and the oracle that resolved it.
#[derive(Clone, Copy)]
pub struct Unit<'a> {
    pub arena: &'a NodeArena,
    pub root: NodeIndex,
    pub oracle: Option<&'a (dyn TypeOracle + Sync)>,
}

impl<'a> Unit<'a> {
    pub fn new(arena: &'a NodeArena, root: NodeIndex) -> Self {
        Unit {
            arena,
            root,
            oracle: None,
        }
    }

    pub fn with_oracle(mut self, oracle: &'a (dyn TypeOracle + Sync)) -> Self {
        self.oracle = Some(oracle);
        self
    }
}

/// Translate `units` in parallel. Results are in input order; a fatal defect in one unit
/// does not affect the others.
pub fn translate_units(
    transpiler: &Transpiler,
    units: &[Unit<'_>],
) -> Vec<TranslateResult<TranslateOutput>> {
    debug!(units = units.len(), "batch translation");
    units
        .par_iter()
        .map(|unit| {
            let oracle = unit.oracle.map(|oracle| oracle as &dyn TypeOracle);
            transpiler.translate_unit(unit.arena, unit.root, oracle)
        })
        .collect()
}

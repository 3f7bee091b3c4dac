//! tsdart: syntax-directed TypeScript to Dart translation.
//!
//! The workspace is split the way the pipeline is:
//! - `tsdart-common` - diagnostics and source positions
//! - `tsdart-syntax` - the syntax tree and the symbol oracle the front-end fills
//! - `tsdart-emitter` - the step chain, the facade rewrites and Dart emission
//!
//! This crate re-exports the public surface, adds parallel batch translation and the
//! tracing setup.

pub mod batch;
pub mod tracing_config;

pub use batch::{Unit, translate_units};
pub use tsdart_common::{Diagnostic, DiagnosticCategory, DiagnosticKind, LineMap, Position};
pub use tsdart_emitter::{
    CallRewrite, FacadeOutcome, PropertyRewrite, RewriteRules, SymbolKey, TranslateError,
    TranslateOptions, TranslateOutput, TranslateResult, TranslationStep, Transpiler,
    UnitTranslator,
};
pub use tsdart_syntax::{BoundOracle, NodeArena, NodeIndex, SymbolFlags, SymbolId, TypeOracle};

pub use tsdart_common as common;
pub use tsdart_emitter as emitter;
pub use tsdart_syntax as syntax;

//! TypeScript-to-Dart translation engine.
//!
//! The translator walks a syntax tree in source order and emits Dart tokens:
//! - `translator` - [`Transpiler`] (shared, immutable) and [`UnitTranslator`] (per run)
//! - `step` / `steps` - the ordered dispatch chain: literals, expressions, statements,
//!   types, declarations
//! - `facade` - symbol-aware rewrites of standard-library idioms and type names
//! - `options` - JSON configuration, including rewrite table extensions

pub mod error_reporter;
pub mod facade;
pub mod options;
pub mod output;
pub mod step;
pub mod steps;
pub mod translator;

pub use error_reporter::ErrorReporter;
pub use facade::rules::{CallRewrite, PropertyRewrite, RewriteRules};
pub use facade::symbol_key::{SymbolKey, module_path};
pub use facade::{FacadeConverter, FacadeOutcome};
pub use options::TranslateOptions;
pub use output::Output;
pub use step::TranslationStep;
pub use translator::{TranslateError, TranslateOutput, TranslateResult, Transpiler, UnitTranslator};

//! Common types shared by the tsdart crates.
//!
//! - Diagnostics (`Diagnostic`, `DiagnosticKind`, message templates)
//! - Position types for turning byte offsets into line/column locations

pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticKind, diagnostic_codes, diagnostic_messages,
    format_message,
};

pub mod position;
pub use position::{LineMap, Position};

//! Diagnostic types and message templates for the translator.
//!
//! Every recoverable translation problem is recorded as a [`Diagnostic`] and the run keeps
//! going, so a single pass surfaces all issues of a unit. Templates use `{0}`, `{1}`, ...
//! placeholders filled in by [`format_message`].

use serde::Serialize;
use std::fmt;

use crate::position::LineMap;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
}

/// What went wrong, independent of the concrete message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A source construct with no target-language representation.
    UnsupportedConstruct,
    /// A candidate library name that the oracle could not resolve to a symbol.
    AmbiguousSymbol,
    /// A recognized library call used with an argument shape the rewrite cannot express.
    MalformedRewriteUsage,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            DiagnosticKind::UnsupportedConstruct => diagnostic_codes::UNSUPPORTED_CONSTRUCT,
            DiagnosticKind::AmbiguousSymbol => diagnostic_codes::AMBIGUOUS_SYMBOL,
            DiagnosticKind::MalformedRewriteUsage => diagnostic_codes::MALFORMED_REWRITE_USAGE,
        }
    }
}

/// A positioned translation diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub kind: DiagnosticKind,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            kind,
            code: kind.code(),
        }
    }

    /// Render as `file:line:column: message` using the unit's source text.
    #[must_use]
    pub fn render(&self, line_map: &LineMap, source: &str) -> String {
        let pos = line_map.offset_to_position(self.start, source);
        format!(
            "{}:{}:{}: {}",
            self.file,
            pos.line + 1,
            pos.character + 1,
            self.message_text
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): error TD{}: {}",
            self.file, self.start, self.code, self.message_text
        )
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

pub mod diagnostic_codes {
    pub const UNSUPPORTED_CONSTRUCT: u32 = 90001;
    pub const AMBIGUOUS_SYMBOL: u32 = 90002;
    pub const MALFORMED_REWRITE_USAGE: u32 = 90003;
}

pub mod diagnostic_messages {
    pub const OPERATOR_IS_UNSUPPORTED: &str = "{0} operator is unsupported";
    pub const CONSTRUCT_IS_UNSUPPORTED: &str = "{0} are unsupported";
    pub const INLINE_FUNCTION_TYPES_UNSUPPORTED: &str = "Inline function type declarations not supported. Use function types instead (http://goo.gl/ROC5jN).";
    pub const UNTYPED_PROPERTY_ACCESS: &str = "Untyped property access to \"{0}\" which could be a special ts2dart builtin. Please add type declarations to disambiguate.";
    pub const NO_DECLARATIONS_FOR_SYMBOL: &str = "no declarations for symbol {0}";
    pub const ARRAY_CONCAT_ONLY_ARRAYS: &str = "Array.concat only takes Array arguments";
    pub const MAP_FOR_EACH_TWO_PARAMETERS: &str =
        "Map.forEach callback requires exactly two arguments";
    pub const FORWARD_REF_ARROW_ONLY: &str = "forwardRef takes only arrow functions";
    pub const CONST_MAP_ARGUMENTS: &str =
        "Arguments on a Map constructor in a const are unsupported";
    pub const MISSING_ARGUMENT: &str = "{0} requires at least {1} argument(s)";
}

//! Diagnostic collection for one translation run.

use tracing::debug;
use tsdart_common::{Diagnostic, DiagnosticKind};
use tsdart_syntax::Node;

/// Collects diagnostics in traversal order. Reporting never interrupts the walk.
#[derive(Debug)]
pub struct ErrorReporter {
    file_name: String,
    diagnostics: Vec<Diagnostic>,
}

impl ErrorReporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        ErrorReporter {
            file_name: file_name.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn report(&mut self, node: &Node, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(
            self.file_name.clone(),
            node.pos,
            node.end.saturating_sub(node.pos),
            kind,
            message,
        );
        debug!(
            file = %diagnostic.file,
            start = diagnostic.start,
            kind = ?kind,
            message = %diagnostic.message_text,
            "translation diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

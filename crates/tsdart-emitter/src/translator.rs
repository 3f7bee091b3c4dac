//! Dispatch engine.
//!
//! [`Transpiler`] is the immutable, shareable part: the ordered step list and the facade
//! tables. Each call to [`Transpiler::translate_unit`] creates a [`UnitTranslator`] that
//! owns the run's output buffer and diagnostics, so independent units can be translated
//! concurrently against one `Transpiler`.

use std::fmt;

use indexmap::IndexSet;
use tracing::{debug, debug_span, trace};
use tsdart_common::{Diagnostic, DiagnosticKind};
use tsdart_syntax::{Decl, Expr, Name, Node, NodeArena, NodeData, NodeIndex, TypeOracle};

use crate::error_reporter::ErrorReporter;
use crate::facade::FacadeConverter;
use crate::facade::rules::RewriteRules;
use crate::options::TranslateOptions;
use crate::output::Output;
use crate::step::TranslationStep;
use crate::steps::default_steps;

// =============================================================================
// Results
// =============================================================================

/// A defect in the tree handed to the translator. Aborts the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// A leaf node no step claimed.
    UnhandledNode { kind: &'static str, pos: u32 },
    /// A child handle pointing outside the arena.
    MissingNode { index: NodeIndex },
    /// A child of the wrong kind, e.g. a non-string module specifier.
    UnexpectedNode {
        expected: &'static str,
        found: &'static str,
        pos: u32,
    },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::UnhandledNode { kind, pos } => {
                write!(f, "unhandled node kind {kind} at offset {pos}")
            }
            TranslateError::MissingNode { index } => {
                write!(f, "node index {} is not in the arena", index.0)
            }
            TranslateError::UnexpectedNode {
                expected,
                found,
                pos,
            } => write!(f, "expected {expected} at offset {pos}, found {found}"),
        }
    }
}

impl std::error::Error for TranslateError {}

pub type TranslateResult<T> = Result<T, TranslateError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslateOutput {
    pub file_name: String,
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl TranslateOutput {
    /// No diagnostics were recorded. Text is produced either way.
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// =============================================================================
// Transpiler
// =============================================================================

pub struct Transpiler {
    steps: Vec<Box<dyn TranslationStep>>,
    facade: FacadeConverter,
    options: TranslateOptions,
}

impl Transpiler {
    pub fn new(options: TranslateOptions) -> Self {
        Self::with_steps(options, default_steps())
    }

    /// Build with a custom step chain, tried in the given order.
    pub fn with_steps(options: TranslateOptions, steps: Vec<Box<dyn TranslationStep>>) -> Self {
        let rules = RewriteRules::builtin().extend(&options);
        let facade = FacadeConverter::new(rules, options.base_path.clone());
        debug!(
            steps = ?steps.iter().map(|s| s.name()).collect::<Vec<_>>(),
            "transpiler configured"
        );
        Transpiler {
            steps,
            facade,
            options,
        }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    pub fn facade(&self) -> &FacadeConverter {
        &self.facade
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Translate the unit rooted at `root`.
    ///
    /// Without an oracle (or with `translateBuiltins` off) no facade rewrite applies and
    /// every name is transliterated.
    pub fn translate_unit(
        &self,
        arena: &NodeArena,
        root: NodeIndex,
        oracle: Option<&dyn TypeOracle>,
    ) -> TranslateResult<TranslateOutput> {
        let root_node = arena
            .get(root)
            .ok_or(TranslateError::MissingNode { index: root })?;
        let file_name = match &root_node.data {
            NodeData::SourceFile(file) => file.file_name.clone(),
            _ => String::new(),
        };
        let span = debug_span!("translate_unit", file = %file_name);
        let _enter = span.enter();

        let oracle = if self.options.translate_builtins {
            oracle
        } else {
            None
        };
        let mut unit = UnitTranslator {
            arena,
            oracle,
            facade: &self.facade,
            steps: &self.steps,
            output: Output::with_capacity(arena.len() * 4),
            errors: ErrorReporter::new(file_name.clone()),
            emitted_imports: IndexSet::new(),
        };

        if self.options.emit_extra_imports {
            unit.emit_extra_imports(root)?;
        }
        unit.visit(root)?;

        let diagnostics = unit.errors.into_diagnostics();
        debug!(diagnostics = diagnostics.len(), "unit translated");
        Ok(TranslateOutput {
            file_name,
            text: unit.output.finish(),
            diagnostics,
        })
    }
}

impl Default for Transpiler {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}

// =============================================================================
// Per-run state
// =============================================================================

/// State of one translation run. Steps receive it mutably.
pub struct UnitTranslator<'a> {
    pub(crate) arena: &'a NodeArena,
    pub(crate) oracle: Option<&'a dyn TypeOracle>,
    pub(crate) facade: &'a FacadeConverter,
    steps: &'a [Box<dyn TranslationStep>],
    output: Output,
    errors: ErrorReporter,
    /// Import targets already written for this unit, in emission order
    pub(crate) emitted_imports: IndexSet<String>,
}

impl<'a> UnitTranslator<'a> {
    /// Translate `idx`: the first step that claims it wins; unclaimed nodes with children
    /// are recursed into; an unclaimed leaf is a fatal defect.
    pub fn visit(&mut self, idx: NodeIndex) -> TranslateResult<()> {
        let node = self.node(idx)?;
        let steps = self.steps;
        for step in steps {
            if step.attempt(self, idx, node)? {
                trace!(step = step.name(), kind = node.data.kind_name(), "claimed");
                return Ok(());
            }
        }

        let children = node.data.children();
        if children.is_empty() && !matches!(node.data, NodeData::SourceFile(_)) {
            return Err(TranslateError::UnhandledNode {
                kind: node.data.kind_name(),
                pos: node.pos,
            });
        }
        trace!(kind = node.data.kind_name(), "default traversal");
        for child in children {
            self.visit(child)?;
        }
        Ok(())
    }

    pub fn visit_opt(&mut self, idx: Option<NodeIndex>) -> TranslateResult<()> {
        match idx {
            Some(idx) => self.visit(idx),
            None => Ok(()),
        }
    }

    /// Visit nodes in order with no separator.
    pub fn visit_each(&mut self, nodes: &[NodeIndex]) -> TranslateResult<()> {
        for &idx in nodes {
            self.visit(idx)?;
        }
        Ok(())
    }

    /// Visit nodes separated by `,`.
    pub fn visit_list(&mut self, nodes: &[NodeIndex]) -> TranslateResult<()> {
        self.visit_list_with(nodes, ",")
    }

    pub fn visit_list_with(&mut self, nodes: &[NodeIndex], separator: &str) -> TranslateResult<()> {
        for (i, &idx) in nodes.iter().enumerate() {
            if i > 0 {
                self.emit(separator);
            }
            self.visit(idx)?;
        }
        Ok(())
    }

    /// `< A , B >`, or nothing for an empty list.
    pub fn emit_type_arguments(&mut self, type_arguments: &[NodeIndex]) -> TranslateResult<()> {
        if type_arguments.is_empty() {
            return Ok(());
        }
        self.emit("<");
        self.visit_list(type_arguments)?;
        self.emit(">");
        Ok(())
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn emit(&mut self, text: &str) {
        self.output.emit(text);
    }

    pub fn emit_no_space(&mut self, text: &str) {
        self.output.emit_no_space(text);
    }

    pub fn suppress_space(&mut self) {
        self.output.suppress_space();
    }

    /// Text emitted so far.
    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub fn report(
        &mut self,
        idx: NodeIndex,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> TranslateResult<()> {
        let node = self.node(idx)?;
        self.errors.report(node, kind, message);
        Ok(())
    }

    pub fn report_unsupported(&mut self, idx: NodeIndex, message: impl Into<String>) -> TranslateResult<()> {
        self.report(idx, DiagnosticKind::UnsupportedConstruct, message)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.errors.diagnostics()
    }

    // =========================================================================
    // Tree queries
    // =========================================================================

    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    pub fn node(&self, idx: NodeIndex) -> TranslateResult<&'a Node> {
        self.arena
            .get(idx)
            .ok_or(TranslateError::MissingNode { index: idx })
    }

    pub fn has_ancestor(&self, idx: NodeIndex, pred: impl Fn(&NodeData) -> bool) -> bool {
        self.arena.ancestors(idx).any(|(_, node)| pred(&node.data))
    }

    /// Inside a decorator, or an argument of a `CONST_EXPR(...)` call.
    pub fn is_in_const_context(&self, idx: NodeIndex) -> bool {
        self.has_ancestor(idx, |data| {
            matches!(data, NodeData::Decl(Decl::Decorator { .. }))
        }) || self.is_inside_const_expr(idx)
    }

    /// The nearest enclosing call is a `CONST_EXPR(...)` call.
    pub fn is_inside_const_expr(&self, idx: NodeIndex) -> bool {
        let nearest_call = self.arena.ancestors(idx).find_map(|(_, node)| match &node.data {
            NodeData::Expr(Expr::Call { expression, .. }) => Some(*expression),
            _ => None,
        });
        nearest_call.is_some_and(|callee| {
            matches!(
                self.arena.get(callee).map(|n| &n.data),
                Some(NodeData::Name(Name::Identifier { text })) if text == "CONST_EXPR"
            )
        })
    }

    pub(crate) fn unexpected(&self, expected: &'static str, idx: NodeIndex) -> TranslateError {
        match self.arena.get(idx) {
            Some(node) => TranslateError::UnexpectedNode {
                expected,
                found: node.data.kind_name(),
                pos: node.pos,
            },
            None => TranslateError::MissingNode { index: idx },
        }
    }
}

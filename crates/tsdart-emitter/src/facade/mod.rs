//! Facade: rewrites recognized standard-library idioms into their Dart counterparts.
//!
//! Resolution runs in a fixed order for every call, property access and type name:
//! 1. extract the identifier text (the last name segment),
//! 2. bail out unless it is in a candidate set, before touching the oracle,
//! 3. resolve the symbol and follow aliases to the declaration,
//! 4. key the declaration by normalized module path and qualified name,
//! 5. look the key up in the category's table and apply the rewrite.
//!
//! Anything that falls out before step 5 is transliterated by the caller.

pub mod handlers;
pub mod imports;
pub mod rules;
pub mod symbol_key;

use rustc_hash::FxHashSet;
use tracing::debug;
use tsdart_common::{DiagnosticKind, diagnostic_messages, format_message};
use tsdart_syntax::{Expr, Name, NodeData, NodeIndex, SymbolId};

use crate::translator::{TranslateResult, UnitTranslator};

use handlers::CallSite;
use rules::RewriteRules;
use symbol_key::{KeyError, SymbolKey, symbol_key};

/// Result of offering a node to the facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacadeOutcome {
    /// Output for the node was produced (or deliberately suppressed) by a rewrite.
    Rewritten,
    /// No rewrite applies; the caller translates the node normally.
    NotHandled,
    /// A candidate name could not be resolved. A diagnostic was recorded and the caller
    /// emits nothing for the node.
    Unresolved,
}

/// Immutable rewrite tables plus the candidate name sets derived from them.
#[derive(Debug)]
pub struct FacadeConverter {
    rules: RewriteRules,
    candidate_properties: FxHashSet<String>,
    candidate_types: FxHashSet<String>,
    base_path: Option<String>,
}

impl FacadeConverter {
    pub fn new(rules: RewriteRules, base_path: Option<String>) -> Self {
        let candidate_properties = rules.candidate_properties();
        let candidate_types = rules.candidate_types();
        FacadeConverter {
            rules,
            candidate_properties,
            candidate_types,
            base_path,
        }
    }

    pub fn rules(&self) -> &RewriteRules {
        &self.rules
    }

    pub fn is_candidate_property(&self, name: &str) -> bool {
        self.candidate_properties.contains(name)
    }

    pub fn is_candidate_type(&self, name: &str) -> bool {
        self.candidate_types.contains(name)
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }
}

impl<'a> UnitTranslator<'a> {
    /// Offer a call or `new` expression to the call rewrite table.
    pub fn maybe_handle_call(&mut self, call: NodeIndex) -> TranslateResult<FacadeOutcome> {
        let Some(oracle) = self.oracle else {
            return Ok(FacadeOutcome::NotHandled);
        };
        let arena = self.arena;
        let facade = self.facade;

        let node = self.node(call)?;
        let (callee, type_arguments, arguments) = match &node.data {
            NodeData::Expr(Expr::Call {
                expression,
                type_arguments,
                arguments,
            }) => (*expression, type_arguments.as_slice(), arguments.as_slice()),
            NodeData::Expr(Expr::New {
                expression,
                type_arguments,
                arguments,
            }) => (
                *expression,
                type_arguments.as_slice(),
                arguments.as_deref().unwrap_or_default(),
            ),
            _ => return Ok(FacadeOutcome::NotHandled),
        };

        let (ident, lookup, receiver) = match &self.node(callee)?.data {
            NodeData::Name(Name::Identifier { text }) => (text.as_str(), callee, None),
            NodeData::Expr(Expr::PropertyAccess { expression, name }) => {
                let Some(text) = arena.identifier_text(*name) else {
                    return Ok(FacadeOutcome::NotHandled);
                };
                (text, *name, Some(*expression))
            }
            _ => return Ok(FacadeOutcome::NotHandled),
        };
        if !facade.is_candidate_property(ident) {
            return Ok(FacadeOutcome::NotHandled);
        }

        let Some(symbol) = oracle.symbol_at_location(lookup) else {
            self.report_missing_type(call, ident)?;
            return Ok(FacadeOutcome::Unresolved);
        };
        let Some(key) = self.resolve_key(call, ident, symbol)? else {
            return Ok(FacadeOutcome::Unresolved);
        };
        let Some(&rewrite) = facade.rules.calls.get(&key) else {
            debug!(%key, "no call rewrite");
            return Ok(FacadeOutcome::NotHandled);
        };

        debug!(%key, ?rewrite, "applying call rewrite");
        let site = CallSite {
            node: call,
            receiver,
            type_arguments,
            arguments,
        };
        if self.apply_call_rewrite(rewrite, &site)? {
            Ok(FacadeOutcome::Rewritten)
        } else {
            Ok(FacadeOutcome::NotHandled)
        }
    }

    /// Offer a non-call `expr.name` access to the property rewrite table.
    pub fn handle_property_access(&mut self, access: NodeIndex) -> TranslateResult<FacadeOutcome> {
        let Some(oracle) = self.oracle else {
            return Ok(FacadeOutcome::NotHandled);
        };
        let facade = self.facade;
        let NodeData::Expr(Expr::PropertyAccess { expression, name }) = &self.node(access)?.data
        else {
            return Ok(FacadeOutcome::NotHandled);
        };
        let Some(ident) = self.arena.identifier_text(*name) else {
            return Ok(FacadeOutcome::NotHandled);
        };
        if !facade.is_candidate_property(ident) {
            return Ok(FacadeOutcome::NotHandled);
        }

        let Some(symbol) = oracle.symbol_at_location(*name) else {
            self.report_missing_type(access, ident)?;
            return Ok(FacadeOutcome::Unresolved);
        };
        let Some(key) = self.resolve_key(access, ident, symbol)? else {
            return Ok(FacadeOutcome::Unresolved);
        };
        let Some(&rewrite) = facade.rules.properties.get(&key) else {
            return Ok(FacadeOutcome::NotHandled);
        };

        debug!(%key, ?rewrite, "applying property rewrite");
        self.apply_property_rewrite(rewrite, *expression)?;
        Ok(FacadeOutcome::Rewritten)
    }

    /// Emit a type name, replacing recognized library types (`Promise` -> `Future`).
    /// Names without a table entry pass through unchanged.
    pub fn visit_type_name(&mut self, name: NodeIndex) -> TranslateResult<()> {
        let facade = self.facade;
        let ident = match &self.node(name)?.data {
            NodeData::Name(Name::Identifier { text }) => text.as_str(),
            NodeData::Name(Name::Qualified { right, .. }) => {
                self.arena.identifier_text(*right).unwrap_or_default()
            }
            _ => return self.visit(name),
        };

        if let Some(oracle) = self.oracle
            && facade.is_candidate_type(ident)
        {
            let Some(symbol) = oracle.symbol_at_location(name) else {
                self.report_missing_type(name, ident)?;
                return Ok(());
            };
            let Some(key) = self.resolve_key(name, ident, symbol)? else {
                return Ok(());
            };
            if let Some(replacement) = facade.rules.type_names.get(&key) {
                debug!(%key, %replacement, "type name rewritten");
                self.emit(replacement);
                return Ok(());
            }
        }
        self.visit(name)
    }

    /// Whether the static type of the expression at `node` is `qualified_name` declared in
    /// `module`; `lib` matches every default library.
    pub fn is_named_type(&self, node: NodeIndex, module: &str, qualified_name: &str) -> bool {
        let Some(oracle) = self.oracle else {
            return false;
        };
        let Some(symbol) = oracle.type_symbol_at_location(node) else {
            return false;
        };
        let Ok(actual) = symbol_key(oracle, symbol, self.facade.base_path()) else {
            return false;
        };
        let module_matches = if module == "lib" {
            actual.module == "lib" || actual.module == "lib.es6"
        } else {
            actual.module == module
        };
        module_matches && actual.qualified_name == qualified_name
    }

    /// Key `symbol`, recording a diagnostic when it has no declaration to key by.
    fn resolve_key(
        &mut self,
        at: NodeIndex,
        ident: &str,
        symbol: SymbolId,
    ) -> TranslateResult<Option<SymbolKey>> {
        let Some(oracle) = self.oracle else {
            return Ok(None);
        };
        match symbol_key(oracle, symbol, self.facade.base_path()) {
            Ok(key) => {
                debug!(ident, %key, "resolved symbol");
                Ok(Some(key))
            }
            Err(KeyError::NoDeclarations | KeyError::UnknownSymbol) => {
                let message = format_message(diagnostic_messages::NO_DECLARATIONS_FOR_SYMBOL, &[ident]);
                self.report(at, DiagnosticKind::AmbiguousSymbol, message)?;
                Ok(None)
            }
        }
    }

    fn report_missing_type(&mut self, at: NodeIndex, ident: &str) -> TranslateResult<()> {
        let message = format_message(diagnostic_messages::UNTYPED_PROPERTY_ACCESS, &[ident]);
        self.report(at, DiagnosticKind::AmbiguousSymbol, message)
    }
}

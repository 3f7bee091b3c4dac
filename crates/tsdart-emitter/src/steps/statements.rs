use tsdart_syntax::{Decl, Node, NodeData, NodeIndex, Stmt};

use crate::step::TranslationStep;
use crate::translator::{TranslateResult, UnitTranslator};

/// Control flow and statement forms.
pub struct StatementStep;

impl TranslationStep for StatementStep {
    fn name(&self) -> &'static str {
        "statements"
    }

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        _idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool> {
        let NodeData::Stmt(stmt) = &node.data else {
            return Ok(false);
        };
        match stmt {
            Stmt::Block { statements } => {
                t.emit("{");
                t.visit_each(statements)?;
                t.emit("}");
            }
            Stmt::Empty => t.emit(";"),
            Stmt::Expression { expression } => {
                t.visit(*expression)?;
                t.emit(";");
            }
            Stmt::Variable { declaration_list } => {
                t.visit(*declaration_list)?;
                t.emit(";");
            }
            Stmt::If {
                expression,
                then_statement,
                else_statement,
            } => {
                t.emit("if (");
                t.visit(*expression)?;
                t.emit(")");
                t.visit(*then_statement)?;
                if let Some(else_statement) = else_statement {
                    t.emit("else");
                    t.visit(*else_statement)?;
                }
            }
            Stmt::Do {
                statement,
                expression,
            } => {
                t.emit("do");
                t.visit(*statement)?;
                t.emit("while (");
                t.visit(*expression)?;
                t.emit(") ;");
            }
            Stmt::While {
                expression,
                statement,
            } => {
                t.emit("while (");
                t.visit(*expression)?;
                t.emit(")");
                t.visit(*statement)?;
            }
            Stmt::For {
                initializer,
                condition,
                incrementor,
                statement,
            } => {
                t.emit("for (");
                t.visit_opt(*initializer)?;
                t.emit(";");
                t.visit_opt(*condition)?;
                t.emit(";");
                t.visit_opt(*incrementor)?;
                t.emit(")");
                t.visit(*statement)?;
            }
            // Dart's `for-in` iterates values, like `for-of`.
            Stmt::ForIn {
                initializer,
                expression,
                statement,
            }
            | Stmt::ForOf {
                initializer,
                expression,
                statement,
            } => {
                t.emit("for (");
                t.visit(*initializer)?;
                t.emit("in");
                t.visit(*expression)?;
                t.emit(")");
                t.visit(*statement)?;
            }
            Stmt::Continue { label } => {
                t.emit("continue");
                t.visit_opt(*label)?;
                t.emit(";");
            }
            Stmt::Break { label } => {
                t.emit("break");
                t.visit_opt(*label)?;
                t.emit(";");
            }
            Stmt::Return { expression } => {
                t.emit("return");
                t.visit_opt(*expression)?;
                t.emit(";");
            }
            Stmt::Switch {
                expression,
                case_block,
            } => {
                t.emit("switch (");
                t.visit(*expression)?;
                t.emit(")");
                t.visit(*case_block)?;
            }
            Stmt::CaseBlock { clauses } => {
                t.emit("{");
                t.visit_each(clauses)?;
                t.emit("}");
            }
            Stmt::CaseClause {
                expression,
                statements,
            } => {
                t.emit("case");
                t.visit(*expression)?;
                t.emit(":");
                t.visit_each(statements)?;
            }
            Stmt::DefaultClause { statements } => {
                t.emit("default :");
                t.visit_each(statements)?;
            }
            Stmt::Labeled { label, statement } => {
                t.visit(*label)?;
                t.emit(":");
                t.visit(*statement)?;
            }
            Stmt::Throw { expression } => {
                t.emit("throw");
                t.visit(*expression)?;
                t.emit(";");
            }
            Stmt::Try {
                try_block,
                catch_clause,
                finally_block,
            } => {
                t.emit("try");
                t.visit(*try_block)?;
                t.visit_opt(*catch_clause)?;
                if let Some(finally_block) = finally_block {
                    t.emit("finally");
                    t.visit(*finally_block)?;
                }
            }
            Stmt::CatchClause {
                variable_declaration,
                block,
            } => emit_catch_clause(t, *variable_declaration, *block)?,
        }
        Ok(true)
    }
}

/// `catch (e: T)` becomes `on T catch ( e , e_stack )`.
fn emit_catch_clause(
    t: &mut UnitTranslator<'_>,
    variable_declaration: NodeIndex,
    block: NodeIndex,
) -> TranslateResult<()> {
    let NodeData::Decl(Decl::VariableDeclaration {
        name, type_node, ..
    }) = &t.node(variable_declaration)?.data
    else {
        return Err(t.unexpected("VariableDeclaration", variable_declaration));
    };
    let Some(binding) = t.arena().identifier_text(*name) else {
        return Err(t.unexpected("Identifier", *name));
    };

    if let Some(type_node) = type_node {
        t.emit("on");
        t.visit(*type_node)?;
    }
    t.emit("catch (");
    t.visit(*name)?;
    t.emit(",");
    t.emit(binding);
    t.emit_no_space("_stack");
    t.emit(")");
    t.visit(block)
}

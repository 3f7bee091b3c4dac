use tsdart_common::{diagnostic_messages, format_message};
use tsdart_syntax::{BinaryOperator, Expr, Node, NodeData, NodeIndex, Stmt};

use crate::facade::FacadeOutcome;
use crate::step::TranslationStep;
use crate::translator::{TranslateResult, UnitTranslator};

/// Operators, member access, calls and type assertions.
pub struct ExpressionStep;

impl TranslationStep for ExpressionStep {
    fn name(&self) -> &'static str {
        "expressions"
    }

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool> {
        let NodeData::Expr(expr) = &node.data else {
            return Ok(false);
        };
        match expr {
            Expr::Binary {
                left,
                operator,
                right,
            } => emit_binary(t, idx, *left, *operator, *right)?,
            Expr::PrefixUnary { operator, operand } => {
                t.emit(operator.as_str());
                t.visit(*operand)?;
            }
            Expr::PostfixUnary { operator, operand } => {
                t.visit(*operand)?;
                t.emit(operator.as_str());
            }
            Expr::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                t.visit(*condition)?;
                t.emit("?");
                t.visit(*when_true)?;
                t.emit(":");
                t.visit(*when_false)?;
            }
            Expr::Delete { .. } => report_operator(t, idx, "delete")?,
            Expr::Void { .. } => report_operator(t, idx, "void")?,
            Expr::TypeOf { .. } => report_operator(t, idx, "typeof")?,
            Expr::Parenthesized { expression } => {
                t.emit("(");
                t.visit(*expression)?;
                t.emit(")");
            }
            Expr::PropertyAccess { expression, name } => {
                emit_property_access(t, idx, *expression, *name)?
            }
            Expr::ElementAccess {
                expression,
                argument,
            } => {
                t.visit(*expression)?;
                t.emit("[");
                t.visit(*argument)?;
                t.emit("]");
            }
            Expr::Call {
                expression,
                type_arguments,
                arguments,
            } => {
                if t.maybe_handle_call(idx)? == FacadeOutcome::NotHandled {
                    t.visit(*expression)?;
                    t.emit_type_arguments(type_arguments)?;
                    t.emit("(");
                    t.visit_list(arguments)?;
                    t.emit(")");
                }
            }
            Expr::New {
                expression,
                type_arguments,
                arguments,
            } => {
                if t.maybe_handle_call(idx)? == FacadeOutcome::NotHandled {
                    t.emit(if t.is_in_const_context(idx) { "const" } else { "new" });
                    t.visit(*expression)?;
                    t.emit_type_arguments(type_arguments)?;
                    t.emit("(");
                    if let Some(arguments) = arguments {
                        t.visit_list(arguments)?;
                    }
                    t.emit(")");
                }
            }
            Expr::TypeAssertion {
                type_node,
                expression,
            } => {
                t.emit("(");
                t.visit(*expression)?;
                t.emit("as");
                t.visit(*type_node)?;
                t.emit(")");
            }
            Expr::Super => t.emit("super"),
        }
        Ok(true)
    }
}

fn emit_binary(
    t: &mut UnitTranslator<'_>,
    idx: NodeIndex,
    left: NodeIndex,
    operator: BinaryOperator,
    right: NodeIndex,
) -> TranslateResult<()> {
    match operator {
        BinaryOperator::EqualsEqualsEquals | BinaryOperator::ExclamationEqualsEquals => {
            if operator == BinaryOperator::ExclamationEqualsEquals {
                t.emit("!");
            }
            t.emit("identical (");
            t.visit(left)?;
            t.emit(",");
            t.visit(right)?;
            t.emit(")");
        }
        BinaryOperator::InstanceOf => {
            t.visit(left)?;
            t.emit("is");
            emit_type_expression(t, right)?;
        }
        // Checked before either operand so the expression produces no text at all.
        BinaryOperator::In => report_operator(t, idx, "in")?,
        _ => {
            t.visit(left)?;
            t.emit(operator.as_str());
            t.visit(right)?;
        }
    }
    Ok(())
}

/// The right side of `instanceof`: names go through type-name rewriting.
fn emit_type_expression(t: &mut UnitTranslator<'_>, idx: NodeIndex) -> TranslateResult<()> {
    match &t.node(idx)?.data {
        NodeData::Name(_) => t.visit_type_name(idx),
        NodeData::Expr(Expr::PropertyAccess { expression, name }) => {
            t.visit(*expression)?;
            t.emit(".");
            t.visit_type_name(*name)
        }
        _ => t.visit(idx),
    }
}

fn emit_property_access(
    t: &mut UnitTranslator<'_>,
    idx: NodeIndex,
    expression: NodeIndex,
    name: NodeIndex,
) -> TranslateResult<()> {
    // The catch clause declares `<binding>_stack` next to the caught value, so `e.stack`
    // inside the clause reads that binding.
    let is_stack_access = t.arena().identifier_text(name) == Some("stack")
        && t.has_ancestor(idx, |data| {
            matches!(data, NodeData::Stmt(Stmt::CatchClause { .. }))
        });
    if is_stack_access {
        t.visit(expression)?;
        t.emit_no_space("_stack");
        return Ok(());
    }

    if t.handle_property_access(idx)? == FacadeOutcome::NotHandled {
        t.visit(expression)?;
        t.emit(".");
        t.visit(name)?;
    }
    Ok(())
}

fn report_operator(t: &mut UnitTranslator<'_>, idx: NodeIndex, operator: &str) -> TranslateResult<()> {
    t.report_unsupported(
        idx,
        format_message(diagnostic_messages::OPERATOR_IS_UNSUPPORTED, &[operator]),
    )
}

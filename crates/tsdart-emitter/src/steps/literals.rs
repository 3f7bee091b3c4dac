use std::fmt::Write;

use tsdart_syntax::{Literal, Node, NodeData, NodeIndex};

use crate::step::TranslationStep;
use crate::translator::{TranslateResult, UnitTranslator};

/// Literal values, templates, array and object literals.
pub struct LiteralStep;

impl TranslationStep for LiteralStep {
    fn name(&self) -> &'static str {
        "literals"
    }

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool> {
        let NodeData::Literal(literal) = &node.data else {
            return Ok(false);
        };
        match literal {
            Literal::Numeric { text } | Literal::RegularExpression { text } => t.emit(text),
            Literal::String { text } => t.emit(&escape_string_literal(text)),
            Literal::NoSubstitutionTemplate { text } => {
                t.emit(&format!("'''{}'''", escape_template_text(text)));
            }
            Literal::Template { head, spans } => {
                t.visit(*head)?;
                t.visit_each(spans)?;
            }
            Literal::TemplateHead { text } => {
                t.emit(&format!("'''{}", escape_template_text(text)));
            }
            Literal::TemplateMiddle { text } => t.emit_no_space(&escape_template_text(text)),
            Literal::TemplateTail { text } => {
                t.emit_no_space(&escape_template_text(text));
                t.emit_no_space("'''");
            }
            Literal::TemplateSpan {
                expression,
                literal,
            } => {
                t.emit_no_space("${");
                t.suppress_space();
                t.visit(*expression)?;
                t.emit_no_space("}");
                t.visit(*literal)?;
            }
            Literal::Array { elements } => {
                if t.is_in_const_context(idx) {
                    t.emit("const");
                }
                t.emit("[");
                t.visit_list(elements)?;
                t.emit("]");
            }
            Literal::Object { properties } => {
                if t.is_in_const_context(idx) {
                    t.emit("const");
                }
                t.emit("{");
                t.visit_list(properties)?;
                t.emit("}");
            }
            Literal::PropertyAssignment { name, initializer } => {
                emit_property_key(t, *name)?;
                t.emit(":");
                t.visit(*initializer)?;
            }
            Literal::ShorthandPropertyAssignment { name } => {
                emit_property_key(t, *name)?;
                t.emit(":");
                t.visit(*name)?;
            }
            Literal::True => t.emit("true"),
            Literal::False => t.emit("false"),
            Literal::Null => t.emit("null"),
            Literal::This => t.emit("this"),
        }
        Ok(true)
    }
}

/// Identifier keys become string keys; string and numeric keys are kept.
fn emit_property_key(t: &mut UnitTranslator<'_>, name: NodeIndex) -> TranslateResult<()> {
    match t.arena().identifier_text(name) {
        Some(key) => {
            t.emit(&format!("\"{key}\""));
            Ok(())
        }
        None => t.visit(name),
    }
}

/// Double-quoted Dart string. `$` is escaped so it never starts an interpolation.
pub(crate) fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Literal text inside a `'''` string.
pub(crate) fn escape_template_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out
}

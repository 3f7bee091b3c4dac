use tsdart_common::diagnostic_messages;
use tsdart_syntax::{KeywordType, Name, Node, NodeData, NodeIndex, TypeNode};

use crate::step::TranslationStep;
use crate::translator::{TranslateResult, UnitTranslator};

/// Names and type annotations.
pub struct TypeStep;

impl TranslationStep for TypeStep {
    fn name(&self) -> &'static str {
        "types"
    }

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool> {
        match &node.data {
            NodeData::Name(Name::Identifier { text }) => t.emit(text),
            NodeData::Name(Name::Qualified { left, right }) => {
                t.visit(*left)?;
                t.emit(".");
                t.visit(*right)?;
            }
            NodeData::Type(ty) => emit_type(t, idx, ty)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn emit_type(t: &mut UnitTranslator<'_>, idx: NodeIndex, ty: &TypeNode) -> TranslateResult<()> {
    match ty {
        TypeNode::Keyword(keyword) => t.emit(match keyword {
            KeywordType::Number => "num",
            KeywordType::String => "String",
            KeywordType::Boolean => "bool",
            KeywordType::Void => "void",
            KeywordType::Any => "dynamic",
        }),
        TypeNode::Reference {
            type_name,
            type_arguments,
        } => {
            t.visit_type_name(*type_name)?;
            t.emit_type_arguments(type_arguments)?;
        }
        TypeNode::Literal { .. } => t.emit("dynamic"),
        TypeNode::Parameter { name, constraint } => {
            t.visit(*name)?;
            if let Some(constraint) = constraint {
                t.emit("extends");
                t.visit(*constraint)?;
            }
        }
        TypeNode::Array { element_type } => {
            t.emit("List");
            t.emit("<");
            t.visit(*element_type)?;
            t.emit(">");
        }
        TypeNode::Union { types } => {
            t.emit("dynamic");
            t.emit("/*");
            t.visit_list_with(types, "|")?;
            t.emit("*/");
        }
        TypeNode::Function { .. } => {
            t.report_unsupported(idx, diagnostic_messages::INLINE_FUNCTION_TYPES_UNSUPPORTED)?;
        }
        TypeNode::ExpressionWithTypeArguments {
            expression,
            type_arguments,
        } => {
            if matches!(t.node(*expression)?.data, NodeData::Name(_)) {
                t.visit_type_name(*expression)?;
            } else {
                t.visit(*expression)?;
            }
            t.emit_type_arguments(type_arguments)?;
        }
    }
    Ok(())
}

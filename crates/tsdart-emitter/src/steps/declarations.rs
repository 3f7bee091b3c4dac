use tsdart_common::{diagnostic_messages, format_message};
use tsdart_syntax::{
    Decl, HeritageToken, Literal, Node, NodeData, NodeIndex, Stmt, VariableKind,
};

use crate::step::TranslationStep;
use crate::translator::{TranslateResult, UnitTranslator};

/// Variables, functions, classes, interfaces, enums and imports.
pub struct DeclarationStep;

impl TranslationStep for DeclarationStep {
    fn name(&self) -> &'static str {
        "declarations"
    }

    fn attempt(
        &self,
        t: &mut UnitTranslator<'_>,
        idx: NodeIndex,
        node: &Node,
    ) -> TranslateResult<bool> {
        let NodeData::Decl(decl) = &node.data else {
            return Ok(false);
        };
        match decl {
            Decl::VariableDeclarationList { kind, declarations } => {
                emit_variable_list(t, idx, *kind, declarations)?
            }
            Decl::VariableDeclaration {
                name, initializer, ..
            } => {
                t.visit(*name)?;
                if let Some(initializer) = initializer {
                    t.emit("=");
                    t.visit(*initializer)?;
                }
            }
            Decl::Parameter {
                name,
                type_node,
                initializer,
                ..
            } => {
                t.visit_opt(*type_node)?;
                t.visit(*name)?;
                if let Some(initializer) = initializer {
                    t.emit("=");
                    t.visit(*initializer)?;
                }
            }
            Decl::Function {
                name,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                t.visit_opt(*return_type)?;
                t.visit(*name)?;
                t.emit_type_arguments(type_parameters)?;
                emit_parameters(t, parameters)?;
                emit_body(t, *body)?;
            }
            Decl::FunctionExpression {
                parameters, body, ..
            } => {
                emit_parameters(t, parameters)?;
                t.visit(*body)?;
            }
            Decl::ArrowFunction {
                parameters, body, ..
            } => {
                emit_parameters(t, parameters)?;
                if !matches!(t.node(*body)?.data, NodeData::Stmt(Stmt::Block { .. })) {
                    t.emit("=>");
                }
                t.visit(*body)?;
            }
            Decl::Class {
                decorators,
                is_abstract,
                name,
                type_parameters,
                heritage_clauses,
                members,
            } => {
                t.visit_each(decorators)?;
                if *is_abstract {
                    t.emit("abstract");
                }
                t.emit("class");
                t.visit(*name)?;
                t.emit_type_arguments(type_parameters)?;
                t.visit_each(heritage_clauses)?;
                t.emit("{");
                t.visit_each(members)?;
                t.emit("}");
            }
            Decl::Interface {
                name,
                type_parameters,
                heritage_clauses,
                members,
            } => {
                t.emit("abstract class");
                t.visit(*name)?;
                t.emit_type_arguments(type_parameters)?;
                t.visit_each(heritage_clauses)?;
                t.emit("{");
                t.visit_each(members)?;
                t.emit("}");
            }
            Decl::HeritageClause { token, types } => {
                // Interfaces can only be implemented in Dart.
                let in_interface = t
                    .arena()
                    .parent(idx)
                    .and_then(|parent| t.arena().get(parent))
                    .is_some_and(|parent| matches!(parent.data, NodeData::Decl(Decl::Interface { .. })));
                let keyword = match token {
                    HeritageToken::Extends if !in_interface => "extends",
                    _ => "implements",
                };
                t.emit(keyword);
                t.visit_list(types)?;
            }
            Decl::Property {
                decorators,
                is_static,
                name,
                type_node,
                initializer,
            } => {
                t.visit_each(decorators)?;
                if *is_static {
                    t.emit("static");
                }
                emit_type_or_var(t, *type_node)?;
                t.visit(*name)?;
                if let Some(initializer) = initializer {
                    t.emit("=");
                    t.visit(*initializer)?;
                }
                t.emit(";");
            }
            Decl::Method {
                decorators,
                is_static,
                name,
                parameters,
                return_type,
                body,
            } => {
                t.visit_each(decorators)?;
                if *is_static {
                    t.emit("static");
                }
                t.visit_opt(*return_type)?;
                t.visit(*name)?;
                emit_parameters(t, parameters)?;
                emit_body(t, *body)?;
            }
            Decl::Constructor { parameters, body } => {
                let class_name = t
                    .arena()
                    .parent(idx)
                    .and_then(|parent| match &t.arena().get(parent)?.data {
                        NodeData::Decl(Decl::Class { name, .. }) => t.arena().identifier_text(*name),
                        _ => None,
                    });
                let Some(class_name) = class_name else {
                    return Err(t.unexpected("ClassDeclaration member", idx));
                };
                t.emit(class_name);
                emit_parameters(t, parameters)?;
                emit_body(t, *body)?;
            }
            Decl::PropertySignature { name, type_node } => {
                emit_type_or_var(t, *type_node)?;
                t.visit(*name)?;
                t.emit(";");
            }
            Decl::MethodSignature {
                name,
                parameters,
                return_type,
            } => {
                t.visit_opt(*return_type)?;
                t.visit(*name)?;
                emit_parameters(t, parameters)?;
                t.emit(";");
            }
            Decl::Decorator { expression } => {
                t.emit("@");
                t.visit(*expression)?;
            }
            Decl::Enum { name, members } => emit_enum(t, *name, members)?,
            Decl::EnumMember { name, .. } => t.visit(*name)?,
            Decl::Import {
                named_imports,
                module_specifier,
            } => {
                t.emit("import");
                emit_module_path(t, *module_specifier)?;
                if !named_imports.is_empty() {
                    t.emit("show");
                    t.visit_list(named_imports)?;
                }
                t.emit(";");
            }
            Decl::ImportSpecifier {
                property_name,
                name,
            } => {
                if property_name.is_some() {
                    report_construct(t, idx, "import renames")?;
                } else {
                    t.visit_type_name(*name)?;
                }
            }
            Decl::ImportEquals {
                name,
                module_specifier,
            } => {
                t.emit("import");
                emit_module_path(t, *module_specifier)?;
                t.emit("as");
                t.visit_type_name(*name)?;
                t.emit(";");
            }
            Decl::Module { .. } => report_construct(t, idx, "namespaces")?,
        }
        Ok(true)
    }
}

/// Dart lists share a single type, so only one declaration may carry an annotation.
fn emit_variable_list(
    t: &mut UnitTranslator<'_>,
    idx: NodeIndex,
    kind: VariableKind,
    declarations: &[NodeIndex],
) -> TranslateResult<()> {
    let mut annotated = Vec::with_capacity(declarations.len());
    for &declaration in declarations {
        match &t.node(declaration)?.data {
            NodeData::Decl(Decl::VariableDeclaration { type_node, .. }) => {
                annotated.push(*type_node)
            }
            _ => return Err(t.unexpected("VariableDeclaration", declaration)),
        }
    }
    if annotated.len() > 1 && annotated.iter().any(Option::is_some) {
        return report_construct(t, idx, "typed variable declaration lists");
    }

    if kind == VariableKind::Const {
        t.emit("final");
    }
    match annotated.first().copied().flatten() {
        Some(type_node) => t.visit(type_node)?,
        None if kind != VariableKind::Const => t.emit("var"),
        None => {}
    }
    t.visit_list(declarations)
}

/// `( a , [ b = 1 ] )`: optional and defaulted parameters open a trailing `[ ]` group.
fn emit_parameters(t: &mut UnitTranslator<'_>, parameters: &[NodeIndex]) -> TranslateResult<()> {
    t.emit("(");
    let mut in_optional = false;
    for (i, &parameter) in parameters.iter().enumerate() {
        if i > 0 {
            t.emit(",");
        }
        let optional = matches!(
            &t.node(parameter)?.data,
            NodeData::Decl(Decl::Parameter { optional, initializer, .. })
                if *optional || initializer.is_some()
        );
        if optional && !in_optional {
            t.emit("[");
            in_optional = true;
        }
        t.visit(parameter)?;
    }
    if in_optional {
        t.emit("]");
    }
    t.emit(")");
    Ok(())
}

fn emit_body(t: &mut UnitTranslator<'_>, body: Option<NodeIndex>) -> TranslateResult<()> {
    match body {
        Some(body) => t.visit(body),
        None => {
            t.emit(";");
            Ok(())
        }
    }
}

fn emit_type_or_var(t: &mut UnitTranslator<'_>, type_node: Option<NodeIndex>) -> TranslateResult<()> {
    match type_node {
        Some(type_node) => t.visit(type_node),
        None => {
            t.emit("var");
            Ok(())
        }
    }
}

fn emit_enum(t: &mut UnitTranslator<'_>, name: NodeIndex, members: &[NodeIndex]) -> TranslateResult<()> {
    for &member in members {
        if let NodeData::Decl(Decl::EnumMember {
            initializer: Some(_),
            ..
        }) = t.node(member)?.data
        {
            return report_construct(t, member, "enum initializers");
        }
    }
    t.emit("enum");
    t.visit(name)?;
    t.emit("{");
    t.visit_list(members)?;
    t.emit("}");
    Ok(())
}

fn emit_module_path(t: &mut UnitTranslator<'_>, specifier: NodeIndex) -> TranslateResult<()> {
    let NodeData::Literal(Literal::String { text }) = &t.node(specifier)?.data else {
        return Err(t.unexpected("StringLiteral", specifier));
    };
    t.emit(&format!("\"{}\"", dart_module_path(text)));
    Ok(())
}

/// `./foo` -> `foo.dart`, `../foo` -> `../foo.dart`, `pkg/foo` -> `package:pkg/foo.dart`.
pub(crate) fn dart_module_path(specifier: &str) -> String {
    if let Some(relative) = specifier.strip_prefix("./") {
        format!("{relative}.dart")
    } else if specifier.starts_with("../") || specifier.starts_with('/') {
        format!("{specifier}.dart")
    } else {
        format!("package:{specifier}.dart")
    }
}

fn report_construct(t: &mut UnitTranslator<'_>, idx: NodeIndex, construct: &str) -> TranslateResult<()> {
    t.report_unsupported(
        idx,
        format_message(diagnostic_messages::CONSTRUCT_IS_UNSUPPORTED, &[construct]),
    )
}

//! Rewrite handlers: the Dart text produced for each table entry.

use tsdart_common::{DiagnosticKind, diagnostic_messages, format_message};
use tsdart_syntax::{Decl, NodeData, NodeIndex, Stmt};

use crate::facade::rules::{CallRewrite, PropertyRewrite};
use crate::translator::{TranslateResult, UnitTranslator};

/// A call or `new` expression handed to a rewrite.
#[derive(Clone, Copy, Debug)]
pub struct CallSite<'a> {
    pub node: NodeIndex,
    /// `xs` in `xs.push(v)`; `None` for free calls and constructors
    pub receiver: Option<NodeIndex>,
    pub type_arguments: &'a [NodeIndex],
    pub arguments: &'a [NodeIndex],
}

impl<'a> UnitTranslator<'a> {
    /// Emit the replacement for `rewrite`. Returns `false` when the rewrite decides the
    /// call should be translated normally after all.
    pub(crate) fn apply_call_rewrite(
        &mut self,
        rewrite: CallRewrite,
        site: &CallSite<'_>,
    ) -> TranslateResult<bool> {
        let args = site.arguments;
        match rewrite {
            CallRewrite::ArrayPush => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("add", args)?;
            }
            CallRewrite::ArrayPop => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("removeLast", &[])?;
            }
            CallRewrite::ArrayShift => {
                self.visit_opt(site.receiver)?;
                self.emit(". removeAt ( 0 )");
            }
            CallRewrite::ArrayUnshift => {
                self.emit("(");
                self.visit_opt(site.receiver)?;
                if let [single] = args {
                    self.emit(".. insert ( 0,");
                    self.visit(*single)?;
                    self.emit(") ) . length");
                } else {
                    self.emit(".. insertAll ( 0, [");
                    self.visit_list(args)?;
                    self.emit("]) ) . length");
                }
            }
            CallRewrite::ArrayMap => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("map", args)?;
                self.emit_method_call("toList", &[])?;
            }
            CallRewrite::ArrayFilter => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("where", args)?;
                self.emit_method_call("toList", &[])?;
            }
            CallRewrite::ArraySome => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("any", args)?;
            }
            CallRewrite::ArraySlice => {
                self.emit_call("ListWrapper.slice", &with_receiver(site))?;
            }
            CallRewrite::ArraySplice => {
                self.emit_call("ListWrapper.splice", &with_receiver(site))?;
            }
            CallRewrite::ArrayConcat => {
                self.emit("( new List . from (");
                self.visit_opt(site.receiver)?;
                self.emit(")");
                for &arg in args {
                    if !self.is_named_type(arg, "lib", "Array") {
                        self.report(
                            arg,
                            DiagnosticKind::MalformedRewriteUsage,
                            diagnostic_messages::ARRAY_CONCAT_ONLY_ARRAYS,
                        )?;
                    }
                    self.emit(".. addAll (");
                    self.visit(arg)?;
                    self.emit(")");
                }
                self.emit(")");
            }
            CallRewrite::ArrayJoin => {
                self.visit_opt(site.receiver)?;
                if args.is_empty() {
                    self.emit(". join ( \",\" )");
                } else {
                    self.emit_method_call("join", args)?;
                }
            }
            CallRewrite::ArrayReduce => {
                if !self.require_arguments(site, "Array.reduce", 1)? {
                    return Ok(true);
                }
                self.visit_opt(site.receiver)?;
                if let [callback, initial, ..] = args {
                    // Dart's fold takes the initial value first.
                    self.emit_method_call("fold", &[*initial, *callback])?;
                } else {
                    self.emit(". fold ( null ,");
                    self.visit(args[0])?;
                    self.emit(")");
                }
            }
            CallRewrite::ArrayIsArray => {
                if !self.require_arguments(site, "Array.isArray", 1)? {
                    return Ok(true);
                }
                self.emit("( (");
                self.visit_list(args)?;
                self.emit(")");
                self.emit("is List");
                self.emit(")");
            }
            CallRewrite::ArrayFind => {
                if !self.require_arguments(site, "Array.find", 1)? {
                    return Ok(true);
                }
                self.visit_opt(site.receiver)?;
                self.emit(". firstWhere (");
                self.visit(args[0])?;
                self.emit(", orElse : ( ) => null )");
            }
            CallRewrite::RegExpTest => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("hasMatch", args)?;
            }
            CallRewrite::RegExpExec => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("allMatches", args)?;
                self.emit_method_call("toList", &[])?;
            }
            CallRewrite::MapSet => {
                if !self.require_arguments(site, "Map.set", 2)? {
                    return Ok(true);
                }
                self.visit_opt(site.receiver)?;
                self.emit("[");
                self.visit(args[0])?;
                self.emit("]");
                self.emit("=");
                self.visit(args[1])?;
            }
            CallRewrite::MapGet => {
                if !self.require_arguments(site, "Map.get", 1)? {
                    return Ok(true);
                }
                self.visit_opt(site.receiver)?;
                self.emit("[");
                self.visit(args[0])?;
                self.emit("]");
            }
            CallRewrite::MapHas => {
                self.visit_opt(site.receiver)?;
                self.emit_method_call("containsKey", args)?;
            }
            CallRewrite::MapDelete => {
                // Map.delete reports whether the key was present:
                // (m.containsKey(k) && (m.remove(k) != null || true))
                self.emit("(");
                self.visit_opt(site.receiver)?;
                self.emit_method_call("containsKey", args)?;
                self.emit("&& (");
                self.visit_opt(site.receiver)?;
                self.emit_method_call("remove", args)?;
                self.emit("!= null || true ) )");
            }
            CallRewrite::MapForEach => {
                if !self.require_arguments(site, "Map.forEach", 1)? {
                    return Ok(true);
                }
                self.emit_map_for_each(site)?;
            }
            CallRewrite::ConstMapConstructor => {
                if !self.is_inside_const_expr(site.node) {
                    return Ok(false);
                }
                if !args.is_empty() {
                    self.report(
                        site.node,
                        DiagnosticKind::MalformedRewriteUsage,
                        diagnostic_messages::CONST_MAP_ARGUMENTS,
                    )?;
                }
                self.emit("const");
                self.emit_type_arguments(site.type_arguments)?;
                self.emit("{ }");
            }
            CallRewrite::ForwardRef => {
                if !self.require_arguments(site, "forwardRef", 1)? {
                    return Ok(true);
                }
                match &self.node(args[0])?.data {
                    NodeData::Decl(Decl::ArrowFunction { body, .. }) => self.visit(*body)?,
                    _ => self.report(
                        site.node,
                        DiagnosticKind::MalformedRewriteUsage,
                        diagnostic_messages::FORWARD_REF_ARROW_ONLY,
                    )?,
                }
            }
            // `const` is emitted by the literal handling, which sees the whole subtree.
            CallRewrite::ConstExpr | CallRewrite::NormalizeBlank => {
                self.visit_list(args)?;
            }
        }
        Ok(true)
    }

    pub(crate) fn apply_property_rewrite(
        &mut self,
        rewrite: PropertyRewrite,
        receiver: NodeIndex,
    ) -> TranslateResult<()> {
        match rewrite {
            PropertyRewrite::MapSize => {
                self.visit(receiver)?;
                self.emit(".");
                self.emit("length");
            }
        }
        Ok(())
    }

    /// JavaScript passes `(value, key)` to the callback, Dart passes `(key, value)`.
    fn emit_map_for_each(&mut self, site: &CallSite<'_>) -> TranslateResult<()> {
        let callback = site.arguments[0];
        let (parameters, body, is_arrow) = match &self.node(callback)?.data {
            NodeData::Decl(Decl::FunctionExpression {
                parameters, body, ..
            }) => (parameters.as_slice(), *body, false),
            NodeData::Decl(Decl::ArrowFunction {
                parameters, body, ..
            }) => (parameters.as_slice(), *body, true),
            _ => {
                self.visit_opt(site.receiver)?;
                self.emit(". forEach ( ( k , v ) => (");
                self.visit(callback)?;
                self.emit(") ( v , k ) )");
                return Ok(());
            }
        };

        let [value, key] = parameters else {
            return self.report(
                site.node,
                DiagnosticKind::MalformedRewriteUsage,
                diagnostic_messages::MAP_FOR_EACH_TWO_PARAMETERS,
            );
        };
        self.visit_opt(site.receiver)?;
        self.emit(". forEach ( (");
        self.visit(*key)?;
        self.emit(",");
        self.visit(*value)?;
        self.emit(")");
        let body_is_block = matches!(
            self.node(body)?.data,
            NodeData::Stmt(Stmt::Block { .. })
        );
        if is_arrow && !body_is_block {
            self.emit("=>");
        }
        self.visit(body)?;
        self.emit(")");
        Ok(())
    }

    fn emit_method_call(&mut self, name: &str, args: &[NodeIndex]) -> TranslateResult<()> {
        self.emit(".");
        self.emit_call(name, args)
    }

    fn emit_call(&mut self, name: &str, args: &[NodeIndex]) -> TranslateResult<()> {
        self.emit(name);
        self.emit("(");
        self.visit_list(args)?;
        self.emit(")");
        Ok(())
    }

    fn require_arguments(
        &mut self,
        site: &CallSite<'_>,
        name: &str,
        count: usize,
    ) -> TranslateResult<bool> {
        if site.arguments.len() >= count {
            return Ok(true);
        }
        let message = format_message(
            diagnostic_messages::MISSING_ARGUMENT,
            &[name, &count.to_string()],
        );
        self.report(site.node, DiagnosticKind::MalformedRewriteUsage, message)?;
        Ok(false)
    }
}

fn with_receiver(site: &CallSite<'_>) -> Vec<NodeIndex> {
    site.receiver
        .into_iter()
        .chain(site.arguments.iter().copied())
        .collect()
}

//! Rewrite tables: `module path -> qualified name -> rewrite`.
//!
//! The built-in rule set covers the JavaScript standard library and the Angular facade
//! typings. [`RewriteRules::extend`] merges entries from [`TranslateOptions`], so a new
//! idiom is a table entry and never a change to the dispatch code.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use crate::facade::symbol_key::SymbolKey;
use crate::options::TranslateOptions;

/// Rewrites applied to call and `new` expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallRewrite {
    ArrayPush,
    ArrayPop,
    ArrayShift,
    ArrayUnshift,
    ArrayMap,
    ArrayFilter,
    ArraySome,
    ArraySlice,
    ArraySplice,
    ArrayConcat,
    ArrayJoin,
    ArrayReduce,
    ArrayIsArray,
    ArrayFind,
    RegExpTest,
    RegExpExec,
    MapSet,
    MapGet,
    MapHas,
    MapDelete,
    MapForEach,
    /// `new Map<K, V>()` inside a constant expression
    ConstMapConstructor,
    ForwardRef,
    ConstExpr,
    NormalizeBlank,
}

/// Rewrites applied to non-call member access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyRewrite {
    MapSize,
}

#[derive(Clone, Debug)]
pub struct RewriteTable<V> {
    modules: FxHashMap<String, FxHashMap<String, V>>,
}

impl<V> Default for RewriteTable<V> {
    fn default() -> Self {
        RewriteTable {
            modules: FxHashMap::default(),
        }
    }
}

impl<V: Clone> RewriteTable<V> {
    pub fn insert(&mut self, module: &str, name: &str, value: V) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Register the same entries under several module paths.
    fn insert_all(&mut self, modules: &[&str], entries: &[(&str, V)]) {
        for module in modules {
            for (name, value) in entries {
                self.insert(module, name, value.clone());
            }
        }
    }

    fn merge(&mut self, other: &FxHashMap<String, FxHashMap<String, V>>) {
        for (module, entries) in other {
            for (name, value) in entries {
                self.insert(module, name, value.clone());
            }
        }
    }

    pub fn get(&self, key: &SymbolKey) -> Option<&V> {
        self.modules.get(&key.module)?.get(&key.qualified_name)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.values().all(|entries| entries.is_empty())
    }

    /// Final dotted segment of every qualified name (`Array.push` -> `push`).
    pub fn candidate_names(&self) -> impl Iterator<Item = &str> {
        self.modules.values().flat_map(|entries| {
            entries
                .keys()
                .map(|name| name.rsplit('.').next().unwrap_or(name))
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct RewriteRules {
    pub calls: RewriteTable<CallRewrite>,
    pub properties: RewriteTable<PropertyRewrite>,
    pub type_names: RewriteTable<String>,
    /// `type name -> import target`
    pub extra_imports: FxHashMap<String, String>,
}

const DEFAULT_LIBS: &[&str] = &["lib", "lib.es6"];
const ES6_COLLECTIONS: &[&str] = &[
    "angular2/typings/es6-shim/es6-shim",
    "angular2/typings/es6-collections/es6-collections",
];

static BUILTIN_RULES: Lazy<RewriteRules> = Lazy::new(build_builtin_rules);

fn build_builtin_rules() -> RewriteRules {
    use CallRewrite::*;

    let mut rules = RewriteRules::default();

    rules.calls.insert_all(
        DEFAULT_LIBS,
        &[
            ("Array.push", ArrayPush),
            ("Array.pop", ArrayPop),
            ("Array.shift", ArrayShift),
            ("Array.unshift", ArrayUnshift),
            ("Array.map", ArrayMap),
            ("Array.filter", ArrayFilter),
            ("Array.some", ArraySome),
            ("Array.slice", ArraySlice),
            ("Array.splice", ArraySplice),
            ("Array.concat", ArrayConcat),
            ("Array.join", ArrayJoin),
            ("Array.reduce", ArrayReduce),
            ("ArrayConstructor.isArray", ArrayIsArray),
            ("RegExp.test", RegExpTest),
            ("RegExp.exec", RegExpExec),
        ],
    );
    rules.calls.insert_all(
        ES6_COLLECTIONS,
        &[
            ("Map.set", MapSet),
            ("Map.get", MapGet),
            ("Map.has", MapHas),
            ("Map.delete", MapDelete),
            ("Map.forEach", MapForEach),
            ("Array.find", ArrayFind),
        ],
    );
    rules.calls.insert(
        "angular2/src/facade/collection",
        "Map",
        ConstMapConstructor,
    );
    rules
        .calls
        .insert("angular2/src/core/di/forward_ref", "forwardRef", ForwardRef);
    rules.calls.insert_all(
        &["angular2/src/facade/lang"],
        &[("CONST_EXPR", ConstExpr), ("normalizeBlank", NormalizeBlank)],
    );

    rules
        .properties
        .insert_all(ES6_COLLECTIONS, &[("Map.size", PropertyRewrite::MapSize)]);

    let stdlib_types: Vec<(&str, String)> = [
        ("Date", "DateTime"),
        ("Array", "List"),
        ("XMLHttpRequest", "HttpRequest"),
        ("Uint8Array", "Uint8List"),
        ("ArrayBuffer", "ByteBuffer"),
        // Dart ships two incompatible DOM APIs
        ("Node", "dynamic"),
        ("Text", "dynamic"),
        ("Element", "dynamic"),
        ("Event", "dynamic"),
        ("HTMLElement", "dynamic"),
        ("HTMLAnchorElement", "dynamic"),
        ("HTMLStyleElement", "dynamic"),
        ("HTMLInputElement", "dynamic"),
        ("HTMLDocument", "dynamic"),
        ("History", "dynamic"),
        ("Location", "dynamic"),
    ]
    .into_iter()
    .map(|(name, replacement)| (name, replacement.to_string()))
    .collect();
    rules.type_names.insert_all(DEFAULT_LIBS, &stdlib_types);
    rules.type_names.insert_all(
        &[
            "angular2/typings/es6-promise/es6-promise",
            "angular2/typings/es6-shim/es6-shim",
        ],
        &[("Promise", "Future".to_string())],
    );
    rules.type_names.insert_all(
        &[
            "../../node_modules/rxjs/Observable",
            "node_modules/rxjs/Observable",
        ],
        &[("Observable", "Stream".to_string())],
    );
    rules
        .type_names
        .insert("angular2/src/facade/lang", "Date", "DateTime".to_string());

    for (type_name, target) in [
        ("XMLHttpRequest", "dart:html"),
        ("KeyboardEvent", "dart:html"),
        ("Uint8Array", "dart:typed_arrays"),
        ("ArrayBuffer", "dart:typed_arrays"),
    ] {
        rules
            .extra_imports
            .insert(type_name.to_string(), target.to_string());
    }

    rules
}

impl RewriteRules {
    /// The fixed rule set, built once per process.
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    /// Merge configured entries; configured entries replace built-in ones.
    pub fn extend(mut self, options: &TranslateOptions) -> Self {
        self.calls.merge(&options.call_rewrites);
        self.properties.merge(&options.property_rewrites);
        self.type_names.merge(&options.type_names);
        for (type_name, target) in &options.extra_imports {
            self.extra_imports.insert(type_name.clone(), target.clone());
        }
        self
    }

    /// Names that may resolve to a call or property rewrite.
    pub fn candidate_properties(&self) -> FxHashSet<String> {
        self.calls
            .candidate_names()
            .chain(self.properties.candidate_names())
            .map(str::to_string)
            .collect()
    }

    /// Names that may resolve to a type-name replacement.
    pub fn candidate_types(&self) -> FxHashSet<String> {
        self.type_names
            .candidate_names()
            .map(str::to_string)
            .collect()
    }
}

//! Translator configuration.
//!
//! Options are plain JSON (camelCase keys), e.g.
//!
//! ```json
//! {
//!   "basePath": "/work/project",
//!   "callRewrites": { "my/lib/list": { "List.append": "arrayPush" } },
//!   "typeNames": { "my/lib/async": { "Task": "Future" } },
//!   "extraImports": { "CanvasElement": "dart:html" }
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::facade::rules::{CallRewrite, PropertyRewrite};

/// `module path -> qualified name -> value`
pub type ModuleTable<V> = FxHashMap<String, FxHashMap<String, V>>;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateOptions {
    /// Project root; declaring file names are made relative to it before table lookup
    pub base_path: Option<String>,
    /// Resolve and rewrite standard-library idioms through the oracle
    pub translate_builtins: bool,
    /// Emit `import` directives required by rewritten type names
    pub emit_extra_imports: bool,
    pub call_rewrites: ModuleTable<CallRewrite>,
    pub property_rewrites: ModuleTable<PropertyRewrite>,
    pub type_names: ModuleTable<String>,
    /// `type name -> import target`
    pub extra_imports: FxHashMap<String, String>,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            base_path: None,
            translate_builtins: true,
            emit_extra_imports: true,
            call_rewrites: FxHashMap::default(),
            property_rewrites: FxHashMap::default(),
            type_names: FxHashMap::default(),
            extra_imports: FxHashMap::default(),
        }
    }
}

impl TranslateOptions {
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("failed to parse translator options")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options file {}", path.display()))?;
        Self::from_json_str(&source)
            .with_context(|| format!("invalid options in {}", path.display()))
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }
}

//! Symbol keys: the `(module path, qualified name)` pair rewrite tables are indexed by.

use std::fmt;

use tsdart_syntax::{SymbolFlags, SymbolId, TypeOracle};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolKey {
    /// Declaring file relative to the base path, without `.ts` / `.d.ts`
    pub module: String,
    pub qualified_name: String,
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.qualified_name)
    }
}

/// Why a symbol could not be keyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyError {
    UnknownSymbol,
    NoDeclarations,
}

/// Follow alias symbols to their terminal declaration. Cycles and dangling aliases
/// stop the walk at the last symbol reached.
pub fn resolve_alias(oracle: &dyn TypeOracle, symbol: SymbolId) -> SymbolId {
    let mut current = symbol;
    let mut seen = vec![symbol];
    loop {
        let Some(sym) = oracle.symbol(current) else {
            return current;
        };
        if !sym.is_alias() {
            return current;
        }
        match oracle.aliased_symbol(current) {
            Some(next) if !seen.contains(&next) => {
                seen.push(next);
                current = next;
            }
            _ => return current,
        }
    }
}

pub fn symbol_key(
    oracle: &dyn TypeOracle,
    symbol: SymbolId,
    base_path: Option<&str>,
) -> Result<SymbolKey, KeyError> {
    let terminal = resolve_alias(oracle, symbol);
    let sym = oracle.symbol(terminal).ok_or(KeyError::UnknownSymbol)?;
    let declaration = sym.primary_declaration().ok_or(KeyError::NoDeclarations)?;

    let module = module_path(&declaration.file_name, base_path);
    // Functions, variables and classes are keyed by their bare name even when the
    // checker prefixes the declaring module.
    let qualified_name =
        if sym.flags.intersects(SymbolFlags::FUNCTION | SymbolFlags::VARIABLE | SymbolFlags::CLASS) {
            sym.name.clone()
        } else {
            oracle.fully_qualified_name(terminal)
        };
    Ok(SymbolKey {
        module,
        qualified_name,
    })
}

/// Normalize a declaring file name into a table module path.
///
/// Default-library files collapse to their bare name (`.../lib.es6.d.ts` -> `lib.es6`).
/// Other files are made relative to `base_path` and lose their `.d.ts` / `.ts` suffix.
pub fn module_path(file_name: &str, base_path: Option<&str>) -> String {
    let normalized = file_name.replace('\\', "/");
    let base_name = normalized.rsplit('/').next().unwrap_or(&normalized);
    if base_name.starts_with("lib.") && base_name.ends_with(".d.ts") {
        return strip_ts_suffix(base_name).to_string();
    }

    let mut relative = normalized.as_str();
    if let Some(base) = base_path {
        let base = base.replace('\\', "/");
        let base = base.trim_end_matches('/');
        if !base.is_empty()
            && let Some(rest) = relative.strip_prefix(base)
            && (rest.is_empty() || rest.starts_with('/'))
        {
            relative = rest;
        }
    }
    let relative = relative.strip_prefix("./").unwrap_or(relative);
    let relative = relative.trim_start_matches('/');
    strip_ts_suffix(relative).to_string()
}

fn strip_ts_suffix(path: &str) -> &str {
    path.strip_suffix(".d.ts")
        .or_else(|| path.strip_suffix(".ts"))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsdart_syntax::BoundOracle;

    #[test]
    fn test_default_lib_collapses_to_bare_name() {
        assert_eq!(
            module_path("/usr/lib/node_modules/typescript/lib/lib.d.ts", None),
            "lib"
        );
        assert_eq!(
            module_path("C:\\ts\\lib\\lib.es6.d.ts", Some("/work")),
            "lib.es6"
        );
    }

    #[test]
    fn test_relative_to_base_path() {
        assert_eq!(
            module_path(
                "/work/angular2/typings/es6-shim/es6-shim.d.ts",
                Some("/work/")
            ),
            "angular2/typings/es6-shim/es6-shim"
        );
        assert_eq!(
            module_path("/work/angular2/src/facade/lang.ts", Some("/work")),
            "angular2/src/facade/lang"
        );
        assert_eq!(
            module_path("./node_modules/rxjs/Observable.d.ts", None),
            "node_modules/rxjs/Observable"
        );
    }

    #[test]
    fn test_base_path_must_match_whole_segment() {
        assert_eq!(
            module_path("/workspace/a.ts", Some("/work")),
            "workspace/a"
        );
    }

    #[test]
    fn test_members_keep_qualified_name() {
        let mut oracle = BoundOracle::new();
        let array = oracle.declare("Array", SymbolFlags::INTERFACE, "/ts/lib.d.ts");
        let push = oracle.declare_member(array, "push", SymbolFlags::METHOD);
        let key = symbol_key(&oracle, push, None).unwrap();
        assert_eq!(key.module, "lib");
        assert_eq!(key.qualified_name, "Array.push");
        assert_eq!(key.to_string(), "lib:Array.push");
    }

    #[test]
    fn test_functions_collapse_to_bare_name() {
        let mut oracle = BoundOracle::new();
        let module = oracle.declare("\"forward_ref\"", SymbolFlags::VALUE_MODULE, "/p/forward_ref.ts");
        let func = oracle.declare_member(module, "forwardRef", SymbolFlags::FUNCTION);
        let key = symbol_key(&oracle, func, Some("/p")).unwrap();
        assert_eq!(key.qualified_name, "forwardRef");
        assert_eq!(key.module, "forward_ref");
    }

    #[test]
    fn test_alias_chain_reaches_declaration() {
        let mut oracle = BoundOracle::new();
        let target = oracle.declare("CONST_EXPR", SymbolFlags::FUNCTION, "/p/facade/lang.ts");
        let reexport = oracle.declare_alias("CONST_EXPR", target, "/p/facade/index.ts");
        let import = oracle.declare_alias("CONST_EXPR", reexport, "/p/app.ts");
        assert_eq!(resolve_alias(&oracle, import), target);
        assert_eq!(
            symbol_key(&oracle, import, Some("/p")),
            symbol_key(&oracle, target, Some("/p"))
        );
    }

    #[test]
    fn test_missing_declarations() {
        let mut oracle = BoundOracle::new();
        let stub = oracle.declare_without_declarations("ghost", SymbolFlags::FUNCTION);
        assert_eq!(
            symbol_key(&oracle, stub, None),
            Err(KeyError::NoDeclarations)
        );
        assert_eq!(
            symbol_key(&oracle, SymbolId(99), None),
            Err(KeyError::UnknownSymbol)
        );
    }
}

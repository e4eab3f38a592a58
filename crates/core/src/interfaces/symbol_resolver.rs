//! Symbol resolution interface
//!
//! Provides the per-round view of the program being compiled.

use std::collections::HashSet;
use std::sync::Arc;

use super::SymbolInfo;

/// Trait for looking up declarations
pub trait SymbolResolver {
    /// All class declarations carrying the given annotation, in source order
    fn symbols_with_annotation(&self, annotation: &str) -> Vec<Arc<dyn SymbolInfo>>;

    /// Resolve a class declaration by qualified name
    fn resolve_class(&self, qualified_name: &str) -> Option<Arc<dyn SymbolInfo>>;

    /// Check whether `symbol` is, or transitively extends, `qualified_name`
    fn inherits_from(&self, symbol: &dyn SymbolInfo, qualified_name: &str) -> bool {
        let mut visited = HashSet::new();
        inherits_from_inner(self, symbol, qualified_name, &mut visited)
    }
}

fn inherits_from_inner<R: SymbolResolver + ?Sized>(
    resolver: &R,
    symbol: &dyn SymbolInfo,
    qualified_name: &str,
    visited: &mut HashSet<String>,
) -> bool {
    if symbol.qualified_name() == Some(qualified_name) {
        return true;
    }

    for super_type in symbol.super_types() {
        if super_type == qualified_name {
            return true;
        }
        if !visited.insert(super_type.clone()) {
            continue;
        }
        if let Some(declaration) = resolver.resolve_class(super_type) {
            if inherits_from_inner(resolver, declaration.as_ref(), qualified_name, visited) {
                return true;
            }
        }
    }

    false
}

//! Member lookup across a declaration's supertype chain

use std::collections::{HashSet, VecDeque};

use crate::{
    interfaces::{SymbolInfo, SymbolResolver},
    types::{FunctionDecl, PropertyDecl},
};

/// Functions and properties visible on a declaration
#[derive(Debug, Default)]
pub struct Members {
    pub functions: Vec<FunctionDecl>,
    pub properties: Vec<PropertyDecl>,
}

/// Gather members declared on `symbol` and on every resolvable supertype.
///
/// Supertypes are visited nearest first and a member name is taken from the
/// first declaration that has it, so overrides shadow inherited members.
pub fn collect_members(symbol: &dyn SymbolInfo, resolver: &dyn SymbolResolver) -> Members {
    let mut members = Members::default();
    let mut function_names = HashSet::new();
    let mut property_names = HashSet::new();
    let mut add = |declaration: &dyn SymbolInfo, members: &mut Members| {
        for function in declaration.functions() {
            if function_names.insert(function.name.clone()) {
                members.functions.push(function.clone());
            }
        }
        for property in declaration.properties() {
            if property_names.insert(property.name.clone()) {
                members.properties.push(property.clone());
            }
        }
    };

    add(symbol, &mut members);

    let mut visited = HashSet::new();
    let mut pending: VecDeque<String> = symbol.super_types().iter().cloned().collect();
    while let Some(super_type) = pending.pop_front() {
        if !visited.insert(super_type.clone()) {
            continue;
        }
        if let Some(declaration) = resolver.resolve_class(&super_type) {
            add(declaration.as_ref(), &mut members);
            pending.extend(declaration.super_types().iter().cloned());
        }
    }

    members
}

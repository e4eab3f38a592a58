//! Snapshot-backed symbol resolver
//!
//! Serves declarations from a JSON snapshot exported by a compiler front
//! end, so rounds can be driven outside the compiler.

use crate::{
    error::Result,
    interfaces::{SymbolInfo, SymbolResolver},
    types::ClassDeclaration,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Accepted snapshot file shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    List(Vec<ClassDeclaration>),
    Wrapped { declarations: Vec<ClassDeclaration> },
}

/// In-memory `SymbolResolver` over a list of declarations
#[derive(Debug, Default, Clone)]
pub struct SnapshotResolver {
    declarations: Vec<Arc<ClassDeclaration>>,
    by_name: HashMap<String, usize>,
}

impl SnapshotResolver {
    pub fn new(declarations: Vec<ClassDeclaration>) -> Self {
        let mut resolver = Self::default();
        resolver.extend(declarations);
        resolver
    }

    /// Parse a snapshot: either a JSON array of declarations or an object
    /// with a `declarations` array
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        let declarations = match file {
            SnapshotFile::List(declarations) => declarations,
            SnapshotFile::Wrapped { declarations } => declarations,
        };
        Ok(Self::new(declarations))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let resolver = Self::from_json(&contents)?;
        tracing::debug!(
            "Loaded {} declaration(s) from {:?}",
            resolver.declarations.len(),
            path
        );
        Ok(resolver)
    }

    /// Add declarations. A later declaration with the same qualified name
    /// replaces the earlier one in place, keeping its source position.
    pub fn extend(&mut self, declarations: impl IntoIterator<Item = ClassDeclaration>) {
        for declaration in declarations {
            let existing = declaration
                .qualified_name
                .as_ref()
                .and_then(|name| self.by_name.get(name).copied());
            if let Some(index) = existing {
                tracing::debug!("Replacing duplicate declaration {:?}", declaration.qualified_name);
                self.declarations[index] = Arc::new(declaration);
                continue;
            }

            if let Some(name) = declaration.qualified_name.clone() {
                self.by_name.insert(name, self.declarations.len());
            }
            self.declarations.push(Arc::new(declaration));
        }
    }

    /// Merge another resolver's declarations into this one
    pub fn merge(&mut self, other: SnapshotResolver) {
        self.extend(
            other
                .declarations
                .into_iter()
                .map(|decl| Arc::unwrap_or_clone(decl)),
        );
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl SymbolResolver for SnapshotResolver {
    fn symbols_with_annotation(&self, annotation: &str) -> Vec<Arc<dyn SymbolInfo>> {
        self.declarations
            .iter()
            .filter(|decl| decl.has_annotation(annotation))
            .map(|decl| Arc::clone(decl) as Arc<dyn SymbolInfo>)
            .collect()
    }

    fn resolve_class(&self, qualified_name: &str) -> Option<Arc<dyn SymbolInfo>> {
        self.by_name
            .get(qualified_name)
            .map(|&index| Arc::clone(&self.declarations[index]) as Arc<dyn SymbolInfo>)
    }
}

use anyhow::{Context, Result};
use kgen_core::{GeneratorConfig, services::SnapshotResolver};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Load a declaration snapshot from a JSON file or every `*.json` file
/// below a directory, in path order
pub fn load_symbols(path: &str) -> Result<SnapshotResolver> {
    let path = Path::new(path);
    if path.is_file() {
        return SnapshotResolver::load_from_file(path)
            .with_context(|| format!("Failed to load symbols from {}", path.display()));
    }
    if !path.is_dir() {
        anyhow::bail!("Symbol snapshot not found: {}", path.display());
    }

    let mut resolver = SnapshotResolver::default();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
        if !entry.file_type().is_file() || !is_json {
            continue;
        }

        debug!("Loading snapshot file {}", entry.path().display());
        let snapshot = SnapshotResolver::load_from_file(entry.path())
            .with_context(|| format!("Failed to load symbols from {}", entry.path().display()))?;
        resolver.merge(snapshot);
    }

    Ok(resolver)
}

/// Load an explicit config file, or discover one above the current directory
pub fn load_config(explicit: Option<&str>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => GeneratorConfig::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}")),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            GeneratorConfig::discover(&cwd).context("Failed to load discovered config")
        }
    }
}

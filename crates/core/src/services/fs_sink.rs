//! Emission sink writing Kotlin files under an output directory

use crate::{error::Result, interfaces::EmissionSink};
use std::path::{Path, PathBuf};

/// Writes `<root>/<package path>/<file>.kt`
#[derive(Debug)]
pub struct FileSystemSink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSystemSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    /// Path a unit would be written to
    pub fn path_for(&self, package_name: &str, file_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in package_name.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{file_name}.kt"));
        path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl EmissionSink for FileSystemSink {
    fn emit(&mut self, package_name: &str, file_name: &str, text: &str) -> Result<()> {
        let path = self.path_for(package_name, file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, text)?;
        tracing::debug!("Wrote {:?}", path);
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_into_package_directories() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSystemSink::new(temp_dir.path());

        sink.emit("my.mod", "ChestScreen", "class ChestScreen").unwrap();
        sink.emit("", "Root", "object Root").unwrap();

        let screen = temp_dir.path().join("my").join("mod").join("ChestScreen.kt");
        assert_eq!(std::fs::read_to_string(&screen).unwrap(), "class ChestScreen");
        assert!(temp_dir.path().join("Root.kt").exists());
        assert_eq!(sink.written().len(), 2);
    }
}

use super::{Maker, escape_path};
use crate::error::Result;

/// One named, package-scoped output unit
#[derive(Debug)]
pub struct Source {
    package_name: String,
    file_name: String,
    imports: Vec<String>,
    makers: Vec<Box<dyn Maker>>,
}

impl Source {
    pub fn new(package_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            file_name: file_name.into(),
            imports: Vec::new(),
            makers: Vec::new(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    pub fn with_maker(mut self, maker: impl Maker + 'static) -> Self {
        self.makers.push(Box::new(maker));
        self
    }
}

impl Maker for Source {
    fn make(&self) -> Result<String> {
        let header = if self.package_name.is_empty() {
            "\n".to_string()
        } else {
            format!("package {}\n\n", escape_path(&self.package_name))
        };
        let imports = self
            .imports
            .iter()
            .map(|import| format!("import {}", escape_path(import)))
            .collect::<Vec<_>>()
            .join("\n");
        let makers = self
            .makers
            .iter()
            .map(|maker| maker.make())
            .collect::<Result<Vec<_>>>()?
            .join("\n\n");

        Ok(format!("{header}{imports}\n\n{makers}"))
    }
}

/// Top-level text emitted exactly as given
#[derive(Debug, Clone)]
pub struct Verbatim(String);

impl Verbatim {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Maker for Verbatim {
    fn make(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

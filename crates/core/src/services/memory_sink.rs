//! Emission sink that keeps units in memory

use crate::{error::Result, interfaces::EmissionSink};
use serde::Serialize;

/// One rendered unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedUnit {
    pub package_name: String,
    pub file_name: String,
    pub text: String,
}

/// Records every emitted unit in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<EmittedUnit>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[EmittedUnit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<EmittedUnit> {
        self.units
    }

    pub fn find(&self, file_name: &str) -> Option<&EmittedUnit> {
        self.units.iter().find(|unit| unit.file_name == file_name)
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.units.iter().map(|unit| unit.file_name.as_str()).collect()
    }
}

impl EmissionSink for MemorySink {
    fn emit(&mut self, package_name: &str, file_name: &str, text: &str) -> Result<()> {
        self.units.push(EmittedUnit {
            package_name: package_name.to_string(),
            file_name: file_name.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

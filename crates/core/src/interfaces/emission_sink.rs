//! Emission interface
//!
//! Where rendered source units go.

use crate::error::Result;

/// Trait for receiving rendered source units
pub trait EmissionSink {
    /// Write one unit named `file_name` in package `package_name`
    fn emit(&mut self, package_name: &str, file_name: &str, text: &str) -> Result<()>;
}

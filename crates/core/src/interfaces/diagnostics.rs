//! Diagnostic reporting interface

use crate::types::Location;

/// A reported problem with the user's declarations
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub location: Location,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Trait for fire-and-forget error reports
pub trait DiagnosticSink {
    fn error(&mut self, message: &str, location: &Location);
}

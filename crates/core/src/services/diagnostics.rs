//! Diagnostic sinks

use crate::{
    interfaces::{Diagnostic, DiagnosticSink},
    types::Location,
};

/// Keeps every reported diagnostic
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics reported against `symbol`
    pub fn for_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |d| d.location.symbol == symbol)
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn error(&mut self, message: &str, location: &Location) {
        self.diagnostics.push(Diagnostic {
            message: message.to_string(),
            location: location.clone(),
        });
    }
}

/// Logs diagnostics through `tracing` and keeps them for the exit status
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    inner: CollectingDiagnostics,
}

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.inner.diagnostics()
    }

    pub fn has_errors(&self) -> bool {
        !self.inner.is_empty()
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn error(&mut self, message: &str, location: &Location) {
        tracing::error!(location = %location, "{}", message);
        self.inner.error(message, location);
    }
}

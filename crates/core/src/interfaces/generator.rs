//! Generator and round-processing interfaces
//!
//! The host calls `process_round` once per compiler round until it returns
//! an empty continuation set.

use super::{DiagnosticSink, EmissionSink, SymbolResolver};
use crate::{error::Result, types::SymbolRef};

/// One unit of generation work driven by the round processor
pub trait Generator {
    /// Called once, on the first round, before any generator runs
    fn first_round_run(
        &mut self,
        _resolver: &dyn SymbolResolver,
        _diagnostics: &mut dyn DiagnosticSink,
    ) {
    }

    /// Run this generator for the current round, returning deferred symbols
    fn run(
        &mut self,
        resolver: &dyn SymbolResolver,
        sink: &mut dyn EmissionSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Vec<SymbolRef>>;
}

/// The host's round-calling convention
pub trait RoundProcessor {
    /// Process one round; an empty result means there is nothing left to do
    fn process_round(
        &mut self,
        resolver: &dyn SymbolResolver,
        sink: &mut dyn EmissionSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Vec<SymbolRef>>;
}

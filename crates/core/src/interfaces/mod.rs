//! Collaborator interfaces
//!
//! The core consumes a symbol resolver, an emission sink and a diagnostic
//! sink, and exposes its own round processing through `RoundProcessor`.
//! Concrete hosts live outside the core; `crate::services` provides
//! in-process implementations for the CLI and tests.

pub mod diagnostics;
pub mod emission_sink;
pub mod generator;
pub mod symbol_info;
pub mod symbol_resolver;

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use emission_sink::EmissionSink;
pub use generator::{Generator, RoundProcessor};
pub use symbol_info::SymbolInfo;
pub use symbol_resolver::SymbolResolver;

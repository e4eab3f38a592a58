//! kgen-core - compile-time source generation for container blocks
//!
//! This crate provides:
//! - A builder DSL ([`kgen`]) that renders Kotlin source text
//! - GUI metadata extraction ([`extract`]) over an abstract symbol model
//! - The runtime library and container generators ([`generators`]) and the
//!   round processor that drives them ([`processor`])
//! - In-process resolvers and sinks ([`services`]) for hosts and tests
pub mod config;
pub mod error;
pub mod extract;
pub mod generators;
pub mod interfaces;
pub mod kgen;
pub mod processor;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result, ValidationError};
pub use types::*;

pub use config::GeneratorConfig;
pub use interfaces::{
    Diagnostic, DiagnosticSink, EmissionSink, Generator, RoundProcessor, SymbolInfo,
    SymbolResolver,
};
pub use processor::{ContainerProcessor, run_to_completion};

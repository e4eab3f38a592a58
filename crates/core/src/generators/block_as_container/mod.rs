//! Container block generator
//!
//! Turns every class carrying the marker annotation into five companion
//! units plus one aggregate initializer, then checks on the following round
//! that each class inherits its generated abstract base.
//!
//! Rounds move through [`Phase`]:
//! - `Discover`: collect annotated declarations, emit nothing
//! - `Generate`: validate and emit every input, then the initializer
//! - `Recheck`: verify inheritance of the generated bases, emit nothing
//! - `Finished`: nothing left to do

mod abstract_block;
mod block_entity;
mod initializer;
mod inventory;
mod screen;
mod screen_handler;
pub mod templates;
pub mod validate;

use super::emit_source;
use std::collections::HashSet;

use crate::{
    config::GeneratorConfig,
    error::{Result, ValidationError},
    interfaces::{DiagnosticSink, EmissionSink, Generator, SymbolResolver},
    kgen::{Maker, Source},
    types::{AnnotatedInput, Location, SymbolRef, ValidatedInput, qualify},
};
pub use templates::{FabricTemplates, FamilyTemplates};
pub use validate::{Rejection, validate_input};

/// Where the generator is in its round sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Discover,
    Generate,
    Recheck,
    Finished,
}

pub struct BlockAsContainer {
    config: GeneratorConfig,
    templates: Box<dyn FamilyTemplates>,
    phase: Phase,
    sources: Vec<AnnotatedInput>,
    deferred: Vec<ValidatedInput>,
}

impl BlockAsContainer {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_templates(config, Box::new(FabricTemplates))
    }

    pub fn with_templates(config: GeneratorConfig, templates: Box<dyn FamilyTemplates>) -> Self {
        Self {
            config,
            templates,
            phase: Phase::Discover,
            sources: Vec::new(),
            deferred: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Inputs generated in the last `Generate` round awaiting the recheck
    pub fn deferred(&self) -> &[ValidatedInput] {
        &self.deferred
    }

    /// The companion units for one validated input, in emission order
    pub fn companion_sources(&self, input: &ValidatedInput) -> Vec<Source> {
        self.templates.family(input, &self.config)
    }

    /// The aggregate initializer for a set of processed inputs
    pub fn initializer_source(&self, processed: &[ValidatedInput]) -> Source {
        self.templates.initializer(processed, &self.config)
    }

    fn discover(&mut self, resolver: &dyn SymbolResolver) {
        let mut seen = HashSet::new();
        self.sources = resolver
            .symbols_with_annotation(&self.config.annotation)
            .into_iter()
            // One family per class even when the host reports it twice
            .filter(|declaration| match declaration.qualified_name() {
                Some(name) => seen.insert(name.to_string()),
                None => true,
            })
            .map(|declaration| AnnotatedInput { declaration })
            .collect();
        tracing::info!(
            "Discovered {} declaration(s) annotated with {}",
            self.sources.len(),
            self.config.annotation
        );
        self.phase = Phase::Generate;
    }

    fn generate(
        &mut self,
        resolver: &dyn SymbolResolver,
        sink: &mut dyn EmissionSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Vec<SymbolRef>> {
        let mut processed = Vec::new();

        for input in &self.sources {
            let validated = match validate_input(input, resolver, &self.config) {
                Ok(validated) => validated,
                Err(Rejection { error, location }) => {
                    tracing::warn!("Skipping {}: {}", input.declaration.location(), error);
                    diagnostics.error(&error.to_string(), &location);
                    continue;
                }
            };

            // Render the whole family before emitting any of it
            let rendered = self
                .companion_sources(&validated)
                .into_iter()
                .map(|source| {
                    let text = source.make()?;
                    Ok((source, text))
                })
                .collect::<Result<Vec<_>>>()?;

            let emitted = rendered.iter().try_for_each(|(source, text)| {
                tracing::debug!("Emitting {}.{}", source.package_name(), source.file_name());
                sink.emit(source.package_name(), source.file_name(), text)
            });
            if let Err(e) = emitted {
                diagnostics.error(
                    &format!("Failed to emit sources for {}: {}", validated.qualified_name, e),
                    &validated.declaration.location(),
                );
                continue;
            }

            tracing::info!("Generated container family for {}", validated.qualified_name);
            processed.push(validated);
        }

        let initializer = self.initializer_source(&processed);
        if let Err(e) = emit_source(sink, &initializer) {
            tracing::warn!("Aggregate initializer failed, dropping {} processed input(s)", processed.len());
            diagnostics.error(
                &format!("Failed to emit {}: {}", self.config.initializer_name, e),
                &Location::new(qualify(&self.config.lib_package, &self.config.initializer_name)),
            );
            self.phase = Phase::Finished;
            return Ok(Vec::new());
        }

        let continuation = processed
            .iter()
            .map(|input| SymbolRef(input.qualified_name.clone()))
            .collect::<Vec<_>>();
        self.phase = if processed.is_empty() {
            Phase::Finished
        } else {
            Phase::Recheck
        };
        self.deferred = processed;
        Ok(continuation)
    }

    fn recheck(&mut self, resolver: &dyn SymbolResolver, diagnostics: &mut dyn DiagnosticSink) {
        let annotation = GeneratorConfig::simple_name(&self.config.annotation);

        for input in &self.deferred {
            let expected = qualify(input.package_name(), &input.names.abstract_block);
            // The host may hand out a fresher view of the declaration
            let declaration = resolver
                .resolve_class(&input.qualified_name)
                .unwrap_or_else(|| input.declaration.clone());

            if resolver.inherits_from(declaration.as_ref(), &expected) {
                continue;
            }

            let error = ValidationError::MissingAbstractBase {
                annotation: annotation.to_string(),
                expected: input.names.abstract_block.clone(),
            };
            tracing::warn!("{}: {}", input.qualified_name, error);
            diagnostics.error(&error.to_string(), &declaration.location());
        }

        self.phase = Phase::Finished;
    }
}

impl Generator for BlockAsContainer {
    fn first_round_run(
        &mut self,
        resolver: &dyn SymbolResolver,
        _diagnostics: &mut dyn DiagnosticSink,
    ) {
        self.discover(resolver);
    }

    fn run(
        &mut self,
        resolver: &dyn SymbolResolver,
        sink: &mut dyn EmissionSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Vec<SymbolRef>> {
        match self.phase {
            Phase::Discover => {
                self.discover(resolver);
                self.generate(resolver, sink, diagnostics)
            }
            Phase::Generate => self.generate(resolver, sink, diagnostics),
            Phase::Recheck => {
                self.recheck(resolver, diagnostics);
                Ok(Vec::new())
            }
            Phase::Finished => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests;

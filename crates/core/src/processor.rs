//! Round processor composing the generators
//!
//! The first round runs discovery for every generator and the priority
//! generators, then asks the host for one more round. Later rounds run the
//! regular generators until none of them has anything left to continue.

use crate::{
    config::GeneratorConfig,
    error::Result,
    generators::{BlockAsContainer, LibGenerator},
    interfaces::{DiagnosticSink, EmissionSink, Generator, RoundProcessor, SymbolResolver},
    types::SymbolRef,
};

/// Symbol handed back after the first round to force a second one
pub const ROUND_TRIGGER: &str = "kotlin.Any";

pub struct ContainerProcessor {
    priority_generators: Vec<Box<dyn Generator>>,
    generators: Vec<Box<dyn Generator>>,
    priority_generators_run: bool,
    rounds: usize,
}

impl ContainerProcessor {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_generators(
            vec![Box::new(LibGenerator::new(config.clone()))],
            vec![Box::new(BlockAsContainer::new(config))],
        )
    }

    pub fn with_generators(
        priority_generators: Vec<Box<dyn Generator>>,
        generators: Vec<Box<dyn Generator>>,
    ) -> Self {
        Self {
            priority_generators,
            generators,
            priority_generators_run: false,
            rounds: 0,
        }
    }

    /// Number of rounds processed so far
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl RoundProcessor for ContainerProcessor {
    fn process_round(
        &mut self,
        resolver: &dyn SymbolResolver,
        sink: &mut dyn EmissionSink,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Vec<SymbolRef>> {
        self.rounds += 1;
        tracing::debug!("Processing round {}", self.rounds);

        if !self.priority_generators_run {
            for generator in &mut self.generators {
                generator.first_round_run(resolver, diagnostics);
            }
            for generator in &mut self.priority_generators {
                generator.run(resolver, sink, diagnostics)?;
            }
            self.priority_generators_run = true;
            return Ok(vec![SymbolRef(ROUND_TRIGGER.to_string())]);
        }

        let mut continuation = Vec::new();
        for generator in &mut self.generators {
            continuation.extend(generator.run(resolver, sink, diagnostics)?);
        }
        Ok(continuation)
    }
}

/// Drive `processor` until it returns an empty continuation set.
///
/// Returns the number of rounds run. `max_rounds` bounds a processor that
/// never settles.
pub fn run_to_completion(
    processor: &mut dyn RoundProcessor,
    resolver: &dyn SymbolResolver,
    sink: &mut dyn EmissionSink,
    diagnostics: &mut dyn DiagnosticSink,
    max_rounds: usize,
) -> Result<usize> {
    for round in 1..=max_rounds {
        let continuation = processor.process_round(resolver, sink, diagnostics)?;
        if continuation.is_empty() {
            tracing::debug!("Finished after {} round(s)", round);
            return Ok(round);
        }
        tracing::debug!("Round {} continues with {} symbol(s)", round, continuation.len());
    }
    Err(crate::Error::Other(format!(
        "Processing did not settle within {max_rounds} rounds"
    )))
}

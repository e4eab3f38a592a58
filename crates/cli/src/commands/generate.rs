use anyhow::{Context, Result};
use kgen_core::{
    ContainerProcessor, EmissionSink, run_to_completion,
    services::{FileSystemSink, MemorySink, TracingDiagnostics},
};
use tracing::info;

use crate::utils::{load_config, load_symbols};

/// Upper bound on rounds before the run is considered stuck
const MAX_ROUNDS: usize = 16;

pub fn generate_command(
    symbols: &str,
    out: &str,
    config: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config)?;
    let resolver = load_symbols(symbols)?;
    info!("Loaded {} declaration(s) from {}", resolver.len(), symbols);

    let mut processor = ContainerProcessor::new(config);
    let mut diagnostics = TracingDiagnostics::new();

    let mut run = |sink: &mut dyn EmissionSink, diagnostics: &mut TracingDiagnostics| {
        run_to_completion(&mut processor, &resolver, sink, diagnostics, MAX_ROUNDS)
            .context("Generation failed")
    };

    if dry_run {
        let mut sink = MemorySink::new();
        let rounds = run(&mut sink, &mut diagnostics)?;
        println!("🔍 Dry run: {} unit(s) in {} round(s)", sink.units().len(), rounds);
        for unit in sink.units() {
            println!("   📄 {}.{}", unit.package_name, unit.file_name);
        }
    } else {
        let mut sink = FileSystemSink::new(out);
        let rounds = run(&mut sink, &mut diagnostics)?;
        println!(
            "✅ Wrote {} file(s) to {} in {} round(s)",
            sink.written().len(),
            out,
            rounds
        );
    }

    if diagnostics.has_errors() {
        for diagnostic in diagnostics.diagnostics() {
            eprintln!("❌ {diagnostic}");
        }
        anyhow::bail!("{} diagnostic(s) reported", diagnostics.diagnostics().len());
    }

    Ok(())
}

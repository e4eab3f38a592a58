use anyhow::Result;
use kgen_core::{
    AnnotatedInput, CompanionNames, GuiInfo, Location, SymbolInfo, SymbolResolver,
    generators::block_as_container::{Rejection, validate_input},
};
use serde::Serialize;

use crate::utils::{load_config, load_symbols};

/// Analysis outcome for one annotated declaration
#[derive(Debug, Serialize)]
struct DeclarationReport {
    symbol: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    companions: Option<CompanionNames>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gui: Option<GuiInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_location: Option<Location>,
}

pub fn analyze_command(symbols: &str, config: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let resolver = load_symbols(symbols)?;

    let reports = resolver
        .symbols_with_annotation(&config.annotation)
        .into_iter()
        .map(|declaration| {
            let symbol = declaration.location();
            match validate_input(&AnnotatedInput { declaration }, &resolver, &config) {
                Ok(input) => DeclarationReport {
                    symbol,
                    companions: Some(input.names),
                    gui: Some(input.gui),
                    error: None,
                    error_location: None,
                },
                Err(Rejection { error, location }) => DeclarationReport {
                    symbol,
                    companions: None,
                    gui: None,
                    error: Some(error.to_string()),
                    error_location: Some(location),
                },
            }
        })
        .collect::<Vec<_>>();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("No declarations annotated with {}", config.annotation);
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }
    Ok(())
}

fn print_report(report: &DeclarationReport) {
    println!("🔍 {}", report.symbol);
    println!("{}", "=".repeat(80));

    if let Some(error) = &report.error {
        let location = report
            .error_location
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        println!("   ❌ {error}");
        println!("      at {location}");
        println!();
        return;
    }

    if let Some(names) = &report.companions {
        println!("   📦 Companions:");
        for name in names.all() {
            println!("      - {name}");
        }
    }

    if let Some(gui) = &report.gui {
        println!("   🖼  GUI: {}", gui.qualified_name);
        let events = gui
            .events
            .iter()
            .map(|e| format!("{e:?}"))
            .collect::<Vec<_>>();
        if events.is_empty() {
            println!("      Events: none");
        } else {
            println!("      Events: {}", events.join(", "));
        }
        match &gui.state {
            Some(state) => {
                println!("      State: {}", state.qualified_name);
                for property in &state.properties {
                    println!(
                        "         {}: {} ({} / {})",
                        property.name, property.type_name, property.buf_reader, property.buf_writer
                    );
                }
            }
            None => println!("      State: none"),
        }
    }
    println!();
}

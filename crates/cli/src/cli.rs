use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{analyze_command, generate_command, init_command};

#[derive(Parser, Debug)]
#[command(name = "kgen")]
#[command(version, about = "Generate container block sources from declaration snapshots", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every generation round and write the emitted sources
    #[command(visible_alias = "g")]
    Generate {
        /// Declaration snapshot: a JSON file or a directory of JSON files
        symbols: String,

        /// Output directory for generated sources
        #[arg(short, long, default_value = "generated")]
        out: String,

        /// Generator config file (defaults to the nearest .kgen.json)
        #[arg(short, long)]
        config: Option<String>,

        /// List the units that would be written without writing them
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Show companion names and GUI metadata for annotated declarations
    #[command(visible_alias = "a")]
    Analyze {
        /// Declaration snapshot: a JSON file or a directory of JSON files
        symbols: String,

        /// Generator config file (defaults to the nearest .kgen.json)
        #[arg(short, long)]
        config: Option<String>,

        /// Print the analysis as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Write a default generator config
    Init {
        /// Directory to write the config into
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate {
                symbols,
                out,
                config,
                dry_run,
            } => generate_command(&symbols, &out, config.as_deref(), dry_run),
            Commands::Analyze {
                symbols,
                config,
                json,
            } => analyze_command(&symbols, config.as_deref(), json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

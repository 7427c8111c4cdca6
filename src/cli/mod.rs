//! Command-line interface for sheet-concat
//!
//! Provides `merge` and `inspect` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod inspect;
mod merge;
mod utils;

/// Merge spreadsheet and CSV files row-wise into a single table
#[derive(Parser)]
#[command(name = "sheet-concat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge files or folders of files into one output file
    Merge(merge::MergeArgs),

    /// Show the header and row count a file would contribute to a merge
    Inspect(inspect::InspectArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Merge(args) => merge::run(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}

/// Log to stderr so stdout stays reserved for reports. `RUST_LOG` directives are
/// kept; the verbosity flag only sets the floor.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(verbose).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

//! Inspect command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use super::utils::TableArgs;
use sheet_concat::{read_file, MergeOptions};

#[derive(Args)]
pub struct InspectArgs {
    /// File to read
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    #[command(flatten)]
    pub table: TableArgs,

    /// Output format: 'text' or 'json'
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}

pub fn run(args: InspectArgs) -> Result<()> {
    if !matches!(args.format.as_str(), "text" | "json") {
        anyhow::bail!("Invalid format '{}': expected 'text' or 'json'", args.format);
    }

    let options = args.table.resolve(None, MergeOptions::default())?;
    let table = read_file(&args.path, &options)
        .with_context(|| format!("Failed to inspect {}", args.path.display()))?;

    if args.format == "json" {
        let report = json!({
            "file": args.path.display().to_string(),
            "header_rows": table.arity(),
            "columns": table.columns(),
            "rows": table.row_count(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File: {}", args.path.display());
    println!("Header rows: {}", table.arity());
    println!("Columns ({}):", table.column_count());
    for (idx, key) in table.columns().iter().enumerate() {
        println!("  {}. {}", idx + 1, key);
    }
    println!("Data rows: {}", table.row_count());
    Ok(())
}

//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use super::utils::TableArgs;
use sheet_concat::scan::InputScanner;
use sheet_concat::{concatenate_files, save_file, MergeError, MergeOptions, Table};

#[derive(Args)]
pub struct MergeArgs {
    /// Files or folders to merge, in the order their rows should appear
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output file (.xlsx or .csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    #[command(flatten)]
    pub table: TableArgs,

    /// Do not append the Source column holding each row's file name
    #[arg(long)]
    pub no_filename_column: bool,

    /// Descend into subfolders of folder inputs
    #[arg(short, long)]
    pub recursive: bool,

    /// Fail immediately instead of asking for another output path when saving fails
    #[arg(long)]
    pub no_prompt: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let start_time = Instant::now();

    let add_filename_column = args.no_filename_column.then_some(false);
    let defaults = MergeOptions { add_filename_column: true, ..MergeOptions::default() };
    let options = args.table.resolve(add_filename_column, defaults)?;

    let files = InputScanner::new()
        .recursive(args.recursive)
        .scan(&args.inputs)?
        .into_mergeable()?;
    tracing::info!("merging {} files with {:?}", files.len(), options);

    let table = concatenate_files(&files, &options).context("Failed to merge files")?;

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let prompt = interactive && !args.no_prompt;
    let saved_to = save_with_retry(&table, args.output, options.csv_delimiter, prompt)?;

    println!(
        "Merged {} files ({} rows) into {}",
        files.len(),
        table.row_count(),
        saved_to.display()
    );
    tracing::debug!("merge finished in {:.2?}", start_time.elapsed());
    Ok(())
}

/// Save `table`, asking for another path after a failed save when `prompt` is set.
///
/// The merged table is reused across attempts; files are never re-read.
fn save_with_retry(
    table: &Table,
    mut path: PathBuf,
    csv_delimiter: char,
    prompt: bool,
) -> Result<PathBuf> {
    loop {
        match save_file(table, &path, csv_delimiter) {
            Ok(()) => return Ok(path),
            Err(err @ (MergeError::Write { .. } | MergeError::UnsupportedFormat { .. }))
                if prompt =>
            {
                eprintln!("error: {}", err);
                let answer: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Save to another path (.xlsx or .csv, empty to cancel)")
                    .allow_empty(true)
                    .interact_text()?;
                let answer = answer.trim();
                if answer.is_empty() {
                    anyhow::bail!("Save cancelled; merged output was not written");
                }
                path = PathBuf::from(answer);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to save {}", path.display()))
            }
        }
    }
}

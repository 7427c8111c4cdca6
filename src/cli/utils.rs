//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sheet_concat::config::{load_config, merge_cli_with_config, CliOverrides};
use sheet_concat::MergeOptions;

/// Read options shared by every subcommand that opens files.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Rows to skip at the top of each file, before the header
    #[arg(long = "skip-top", value_name = "ROWS")]
    pub skip_top_rows: Option<usize>,

    /// Number of rows that form the header (multi-level when > 1)
    #[arg(long = "header-rows", value_name = "ROWS")]
    pub header_rows: Option<usize>,

    /// Rows to drop at the bottom of each file
    #[arg(long = "skip-bottom", value_name = "ROWS")]
    pub skip_bottom_rows: Option<usize>,

    /// CSV delimiter for reading and writing (single character, or 'tab')
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub csv_delimiter: Option<char>,

    /// Path to config file (sheet-concat.toml or .sheet-concat.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl TableArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            skip_top_rows: self.skip_top_rows,
            header_rows: self.header_rows,
            skip_bottom_rows: self.skip_bottom_rows,
            add_filename_column: None,
            csv_delimiter: self.csv_delimiter,
        }
    }

    /// Resolve options from flags, the config file and `defaults`.
    pub fn resolve(
        &self,
        add_filename_column: Option<bool>,
        defaults: MergeOptions,
    ) -> Result<MergeOptions> {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        let config = load_config(&cwd, self.config.as_deref())?;

        let mut overrides = self.overrides();
        overrides.add_filename_column = add_filename_column;
        let options = merge_cli_with_config(&config, &overrides, defaults);
        options.validate()?;
        Ok(options)
    }
}

/// Parse a delimiter argument, accepting `tab` and `\t` for the tab character.
pub fn parse_delimiter(value: &str) -> Result<char, String> {
    if matches!(value, "tab" | "\\t") {
        return Ok('\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
    }
}

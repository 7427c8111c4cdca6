//! Layering CLI flags over the config file.

use super::Config;
use crate::domain::MergeOptions;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub skip_top_rows: Option<usize>,
    pub header_rows: Option<usize>,
    pub skip_bottom_rows: Option<usize>,
    pub add_filename_column: Option<bool>,
    pub csv_delimiter: Option<char>,
}

/// Resolve options with precedence CLI > config file > `defaults`.
pub fn merge_cli_with_config(
    config: &Config,
    cli: &CliOverrides,
    defaults: MergeOptions,
) -> MergeOptions {
    MergeOptions {
        skip_top_rows: cli
            .skip_top_rows
            .or(config.skip_top_rows)
            .unwrap_or(defaults.skip_top_rows),
        header_rows: cli.header_rows.or(config.header_rows).unwrap_or(defaults.header_rows),
        skip_bottom_rows: cli
            .skip_bottom_rows
            .or(config.skip_bottom_rows)
            .unwrap_or(defaults.skip_bottom_rows),
        add_filename_column: cli
            .add_filename_column
            .or(config.add_filename_column)
            .unwrap_or(defaults.add_filename_column),
        csv_delimiter: cli
            .csv_delimiter
            .or(config.csv_delimiter)
            .unwrap_or(defaults.csv_delimiter),
    }
}

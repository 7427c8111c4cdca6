//! Configuration loading and merging for the command-line caller
//!
//! Handles loading defaults from a config file and layering CLI flags on top with
//! precedence CLI > File > Defaults. The merge pipeline itself never reads config.

use serde::Deserialize;

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Defaults file contents. Every field is optional; absent fields fall through to
/// the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub skip_top_rows: Option<usize>,
    pub header_rows: Option<usize>,
    pub skip_bottom_rows: Option<usize>,
    pub add_filename_column: Option<bool>,
    pub csv_delimiter: Option<char>,
}

//! Per-call merge options.

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, Result};

pub const DEFAULT_CSV_DELIMITER: char = ';';

/// Options shared by every file of one merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Rows physically skipped before the header.
    pub skip_top_rows: usize,
    /// Consecutive rows, after skipping, that make up the header stack.
    pub header_rows: usize,
    /// Rows dropped from the tail of the data region.
    pub skip_bottom_rows: usize,
    /// Append a trailing column holding each row's source file name.
    pub add_filename_column: bool,
    /// Field delimiter for reading and writing CSV.
    pub csv_delimiter: char,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            skip_top_rows: 0,
            header_rows: 1,
            skip_bottom_rows: 0,
            add_filename_column: false,
            csv_delimiter: DEFAULT_CSV_DELIMITER,
        }
    }
}

impl MergeOptions {
    pub fn validate(&self) -> Result<()> {
        if self.header_rows == 0 {
            return Err(MergeError::InvalidOptions("header_rows must be at least 1".to_string()));
        }
        csv_delimiter_byte(self.csv_delimiter)?;
        Ok(())
    }
}

/// The CSV codec works on single bytes, so only ASCII delimiters are accepted.
pub fn csv_delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() && !matches!(delimiter, '"' | '\n' | '\r') {
        Ok(delimiter as u8)
    } else {
        Err(MergeError::InvalidOptions(format!(
            "CSV delimiter must be a single ASCII character other than a quote or newline, got {delimiter:?}"
        )))
    }
}

//! Delimited text (CSV) reader.
//!
//! Delimited text has no notion of a header row, so the whole file is read as a
//! grid and the header stack is sliced off afterwards.

use std::path::Path;

use crate::domain::csv_delimiter_byte;
use crate::error::{MergeError, Result};
use crate::utils::read_text_file;

/// Read every record of a CSV file as a row of strings.
///
/// Rows may have differing field counts; blank lines are skipped by the parser.
pub fn read_grid(path: &Path, delimiter: char) -> Result<Vec<Vec<String>>> {
    let delimiter = csv_delimiter_byte(delimiter)?;
    let (content, encoding) = read_text_file(path).map_err(|e| MergeError::read(path, e))?;
    tracing::debug!("{}: decoded as {}", path.display(), encoding.name());

    parse_grid(&content, delimiter).map_err(|e| MergeError::read(path, e))
}

pub(crate) fn parse_grid(content: &str, delimiter: u8) -> std::result::Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

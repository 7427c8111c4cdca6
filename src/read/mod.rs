//! Reading one tabular file into a [`Table`].
//!
//! Each format produces a raw grid of text cells; [`grid::build_table`] then applies
//! the row-skip and multi-row-header rules uniformly.

use std::path::Path;

use crate::domain::{InputFormat, MergeOptions, Table};
use crate::error::{MergeError, Result};

pub mod delimited;
pub mod grid;
pub mod workbook;

pub use grid::build_table;

/// Read `path` into a table, applying `options`' skip and header settings.
///
/// Fails with [`MergeError::NotFound`] for a missing file,
/// [`MergeError::UnsupportedFormat`] for an unrecognized extension,
/// [`MergeError::MultiSheet`] for a workbook with several sheets and
/// [`MergeError::Read`] for anything the codecs reject.
pub fn read_file(path: impl AsRef<Path>, options: &MergeOptions) -> Result<Table> {
    let path = path.as_ref();
    options.validate()?;

    if !path.is_file() {
        return Err(MergeError::NotFound { path: path.to_path_buf() });
    }
    let format = InputFormat::from_path(path).ok_or_else(|| MergeError::unsupported(path))?;

    let grid = match format {
        InputFormat::Csv => delimited::read_grid(path, options.csv_delimiter)?,
        workbook_format => workbook::read_grid(path, workbook_format)?,
    };
    tracing::debug!("{}: {:?} grid with {} rows", path.display(), format, grid.len());

    let table = build_table(grid, options).map_err(|reason| MergeError::read(path, reason))?;
    tracing::debug!(
        "{}: {} columns, {} data rows",
        path.display(),
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColumnKey;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let err = read_file("/definitely/not/here.csv", &MergeOptions::default()).unwrap_err();
        assert!(matches!(err, MergeError::NotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("notes.txt");
        fs::write(&path, "id;name\n1;a\n").expect("write");

        let err = read_file(&path, &MergeOptions::default()).unwrap_err();
        assert!(matches!(err, MergeError::UnsupportedFormat { ref extension, .. } if extension == ".txt"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let tmp = TempDir::new().expect("tmp");
        let dir = tmp.path().join("folder.csv");
        fs::create_dir(&dir).expect("mkdir");
        assert!(matches!(
            read_file(&dir, &MergeOptions::default()),
            Err(MergeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_uppercase_csv_extension() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("DATA.CSV");
        fs::write(&path, "id;name\n1;Alice\n").expect("write");

        let table = read_file(&path, &MergeOptions::default()).expect("read");
        assert_eq!(table.columns(), &[ColumnKey::single("id"), ColumnKey::single("name")]);
        assert_eq!(table.rows(), &[vec!["1".to_string(), "Alice".to_string()]]);
    }

    #[test]
    fn test_too_few_rows_for_header_is_read_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("short.csv");
        fs::write(&path, "only;one\n").expect("write");

        let options = MergeOptions { header_rows: 2, ..MergeOptions::default() };
        let err = read_file(&path, &options).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
        assert!(err.to_string().contains("expected 2 header rows"));
    }

    #[test]
    fn test_invalid_options_checked_before_io() {
        let options = MergeOptions { header_rows: 0, ..MergeOptions::default() };
        assert!(matches!(
            read_file("/missing.csv", &options),
            Err(MergeError::InvalidOptions(_))
        ));
    }
}

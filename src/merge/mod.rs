//! Row-wise concatenation of many files into one table.
//!
//! Files are read strictly in the order given. The first read error aborts the
//! whole merge; later files are never opened and no partial table is returned.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{ColumnKey, MergeOptions, Table};
use crate::error::{MergeError, Result};
use crate::read::read_file;
use crate::utils::base_name;

/// Read every file in `files` and stack their rows into one table.
///
/// Header arity must match the first file; column key text may differ, in which
/// case the result holds the union of columns in first-seen order and rows from
/// files lacking a column get an empty cell there.
pub fn concatenate_files<P: AsRef<Path>>(files: &[P], options: &MergeOptions) -> Result<Table> {
    options.validate()?;
    tracing::info!("merging {} files", files.len());

    let mut merger = Merger::new(options.add_filename_column);
    for file in files {
        let path = file.as_ref();
        let table = read_file(path, options)?;
        merger.append(path, table)?;
    }

    let merged = merger.finish(options.header_rows);
    tracing::info!(
        "merged {} rows into {} columns",
        merged.row_count(),
        merged.column_count()
    );
    Ok(merged)
}

/// Accumulator for [`concatenate_files`].
pub(crate) struct Merger {
    add_filename_column: bool,
    expected_arity: Option<usize>,
    columns: Vec<ColumnKey>,
    positions: HashMap<ColumnKey, usize>,
    rows: Vec<Vec<String>>,
    sources: Vec<String>,
}

impl Merger {
    pub(crate) fn new(add_filename_column: bool) -> Self {
        Self {
            add_filename_column,
            expected_arity: None,
            columns: Vec::new(),
            positions: HashMap::new(),
            rows: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Append the rows of `table`, read from `path`.
    pub(crate) fn append(&mut self, path: &Path, table: Table) -> Result<()> {
        let found = table.arity();
        match self.expected_arity {
            None => self.expected_arity = Some(found),
            Some(expected) if expected != found => {
                return Err(MergeError::Compatibility { path: path.to_path_buf(), expected, found });
            }
            Some(_) => {}
        }

        let targets: Vec<usize> =
            table.columns().iter().map(|key| self.position_of(key)).collect();
        let width = self.columns.len();
        let source = base_name(path);
        let appended = table.row_count();

        for row in table.rows() {
            let mut merged = vec![String::new(); width];
            for (cell, &target) in row.iter().zip(&targets) {
                merged[target] = cell.clone();
            }
            self.rows.push(merged);
            if self.add_filename_column {
                self.sources.push(source.clone());
            }
        }

        tracing::debug!("{}: appended {} rows", path.display(), appended);
        Ok(())
    }

    /// Column slot for `key`, registering it at the end on first sight.
    fn position_of(&mut self, key: &ColumnKey) -> usize {
        if let Some(&idx) = self.positions.get(key) {
            return idx;
        }
        let idx = self.columns.len();
        self.columns.push(key.clone());
        self.positions.insert(key.clone(), idx);
        idx
    }

    /// Build the merged table. `default_arity` applies when nothing was appended.
    pub(crate) fn finish(self, default_arity: usize) -> Table {
        let arity = self.expected_arity.unwrap_or(default_arity);
        let mut table = Table::with_columns(arity, self.columns);
        for row in self.rows {
            table.push_row(row);
        }

        if self.add_filename_column {
            let key = ColumnKey::provenance(arity);
            if let Some(idx) = table.column_index(&key) {
                table.remove_column(idx);
            }
            table.push_column(key, self.sources);
        }

        table
    }
}

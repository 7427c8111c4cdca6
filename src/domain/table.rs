//! In-memory table with tuple-keyed columns.

use serde::Serialize;
use std::fmt;

/// Name of the provenance column added by the merger.
pub const PROVENANCE_COLUMN: &str = "Source";

/// Column identifier: one component per header row.
///
/// Keys compare structurally, so two files with the same header text produce
/// the same key regardless of where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ColumnKey(Vec<String>);

impl ColumnKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        debug_assert!(!parts.is_empty(), "column key needs at least one component");
        Self(parts)
    }

    /// Single-component key, the common one-header-row case.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Provenance key padded with empty components to `arity`.
    pub fn provenance(arity: usize) -> Self {
        let mut parts = vec![String::new(); arity.max(1)];
        parts[0] = PROVENANCE_COLUMN.to_string();
        Self(parts)
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Component for header row `level`, empty when out of range.
    pub fn component(&self, level: usize) -> &str {
        self.0.get(level).map(String::as_str).unwrap_or("")
    }

    /// Copy of this key with `.n` appended to the last component.
    pub(crate) fn with_suffix(&self, n: usize) -> Self {
        let mut parts = self.0.clone();
        if let Some(last) = parts.last_mut() {
            last.push_str(&format!(".{n}"));
        }
        Self(parts)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

/// Ordered rows of text cells under a header of [`ColumnKey`]s.
///
/// Rows are positional: every row holds exactly one cell per column. The row
/// index is the position in `rows`, always dense and 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    arity: usize,
    columns: Vec<ColumnKey>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Empty table whose keys have `arity` components.
    pub fn new(arity: usize) -> Self {
        Self { arity, columns: Vec::new(), rows: Vec::new() }
    }

    pub fn with_columns(arity: usize, columns: Vec<ColumnKey>) -> Self {
        debug_assert!(columns.iter().all(|c| c.arity() == arity));
        Self { arity, columns, rows: Vec::new() }
    }

    /// Number of header rows each column key is built from.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, key: &ColumnKey) -> Option<usize> {
        self.columns.iter().position(|c| c == key)
    }

    /// Cells of one column, top to bottom.
    pub fn column_values<'a>(&'a self, key: &ColumnKey) -> Option<Vec<&'a str>> {
        let idx = self.column_index(key)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Append a row, padding with empty cells or truncating to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Append a column; `values` must have one entry per existing row.
    pub(crate) fn push_column(&mut self, key: ColumnKey, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(key);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    pub(crate) fn remove_column(&mut self, idx: usize) {
        self.columns.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
    }
}

//! Grid -> table: row skipping, header stack, key deduplication.

use std::collections::HashMap;

use crate::domain::{ColumnKey, MergeOptions, Table};

/// Turn a raw grid of text cells into a table.
///
/// After `skip_top_rows`, the next `header_rows` rows become the header stack and
/// the rest is data, minus `skip_bottom_rows` rows from the tail. Bottom skipping
/// saturates at the data region and never eats header rows.
///
/// Errors when fewer than `header_rows` rows remain after the top skip.
pub fn build_table(grid: Vec<Vec<String>>, options: &MergeOptions) -> Result<Table, String> {
    let arity = options.header_rows;
    let mut rows: Vec<Vec<String>> = grid.into_iter().skip(options.skip_top_rows).collect();

    if rows.len() < arity {
        return Err(format!(
            "expected {} header rows after skipping {} rows, found {}",
            arity,
            options.skip_top_rows,
            rows.len()
        ));
    }

    let mut data = rows.split_off(arity);
    let header = rows;
    let keep = data.len().saturating_sub(options.skip_bottom_rows);
    data.truncate(keep);

    let width = header.iter().chain(data.iter()).map(Vec::len).max().unwrap_or(0);
    let keys = (0..width)
        .map(|col| {
            ColumnKey::new(header.iter().map(|row| row.get(col).cloned().unwrap_or_default()))
        })
        .collect();

    let mut table = Table::with_columns(arity, dedup_keys(keys));
    for row in data {
        table.push_row(row);
    }
    Ok(table)
}

/// Make keys unique, keeping order.
///
/// The first occurrence is unchanged; later ones get `.1`, `.2`, ... on their last
/// component. A generated key that collides with an existing one keeps counting.
pub fn dedup_keys(keys: Vec<ColumnKey>) -> Vec<ColumnKey> {
    let mut counts: HashMap<ColumnKey, usize> = HashMap::new();
    let mut out = Vec::with_capacity(keys.len());

    for mut key in keys {
        let mut seen = counts.get(&key).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(key.clone(), seen + 1);
            key = key.with_suffix(seen);
            seen = counts.get(&key).copied().unwrap_or(0);
        }
        counts.insert(key.clone(), seen + 1);
        out.push(key);
    }

    out
}

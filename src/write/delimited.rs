//! CSV serialization.

use crate::domain::Table;
use crate::error::BoxError;

use super::header_record;

/// Render `table` as UTF-8 CSV bytes with `delimiter` between fields.
pub fn render(table: &Table, delimiter: u8) -> Result<Vec<u8>, BoxError> {
    if table.column_count() == 0 {
        return Ok(Vec::new());
    }

    let mut writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(Vec::new());
    for level in 0..table.arity() {
        writer.write_record(header_record(table, level))?;
    }
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.into_inner().map_err(|e| e.to_string().into())
}

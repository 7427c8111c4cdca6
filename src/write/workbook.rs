//! XLSX serialization via rust_xlsxwriter.

use rust_xlsxwriter::{Format, Workbook};

use crate::domain::Table;
use crate::error::BoxError;

use super::header_record;

const SHEET_NAME: &str = "Merged";

/// Render `table` as a single-sheet workbook. Every cell is written as text.
pub fn render(table: &Table) -> Result<Vec<u8>, BoxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    let bold = Format::new().set_bold();

    for level in 0..table.arity() {
        let row = u32::try_from(level)?;
        for (col, text) in header_record(table, level).into_iter().enumerate() {
            if !text.is_empty() {
                sheet.write_string_with_format(row, u16::try_from(col)?, text, &bold)?;
            }
        }
    }

    let offset = table.arity();
    for (idx, cells) in table.rows().iter().enumerate() {
        let row = u32::try_from(offset + idx)?;
        for (col, text) in cells.iter().enumerate() {
            if !text.is_empty() {
                sheet.write_string(row, u16::try_from(col)?, text)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

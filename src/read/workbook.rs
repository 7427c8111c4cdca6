//! Workbook reader (OOXML, legacy BIFF and binary workbooks) built on calamine.

use calamine::{open_workbook, Data, DataType, Reader, Xls, Xlsb, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::InputFormat;
use crate::error::{MergeError, Result};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read the only sheet of a workbook as a grid of text cells.
///
/// Grid cells keep their sheet coordinates: leading empty rows and columns are
/// kept, so `skip_top_rows` means what the user sees.
pub fn read_grid(path: &Path, format: InputFormat) -> Result<Vec<Vec<String>>> {
    match format {
        InputFormat::OpenXml => read_single_sheet::<Xlsx<_>>(path),
        InputFormat::Legacy => read_single_sheet::<Xls<_>>(path),
        InputFormat::Binary => read_single_sheet::<Xlsb<_>>(path),
        InputFormat::Csv => Err(MergeError::read(path, "delimited text is not a workbook")),
    }
}

fn read_single_sheet<R>(path: &Path) -> Result<Vec<Vec<String>>>
where
    R: Reader<BufReader<File>>,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let mut workbook: R = open_workbook(path).map_err(|e: R::Error| MergeError::read(path, e))?;

    let sheets = workbook.sheet_names().len();
    if sheets > 1 {
        return Err(MergeError::MultiSheet { path: path.to_path_buf(), sheets });
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MergeError::read(path, "workbook has no worksheets"))?
        .map_err(|e: R::Error| MergeError::read(path, e))?;

    // Ranges start at the first used cell; pad back to A1.
    let (first_row, first_col) =
        range.start().map(|(row, col)| (row as usize, col as usize)).unwrap_or((0, 0));
    let mut grid: Vec<Vec<String>> = vec![Vec::new(); first_row];
    grid.extend(range.rows().map(|row| {
        let mut cells = vec![String::new(); first_col];
        cells.extend(row.iter().map(cell_text));
        cells
    }));
    Ok(grid)
}

/// Literal text of a cell; values are never coerced between types.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt: chrono::NaiveDateTime| dt.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MergeOptions;
    use crate::read::read_file;
    use calamine::CellErrorType;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use std::fs;
    use tempfile::TempDir;

    fn write_people(path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "id").unwrap();
        sheet.write_string(0, 1, "name").unwrap();
        sheet.write_string(0, 2, "score").unwrap();
        sheet.write_number(1, 0, 1).unwrap();
        sheet.write_string(1, 1, "Alice").unwrap();
        sheet.write_number(1, 2, 2.5).unwrap();
        sheet.write_string(2, 0, "007").unwrap();
        sheet.write_string(2, 1, "Bob").unwrap();
        sheet.write_boolean(2, 2, true).unwrap();
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_cell_text_literals() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("007".into())), "007");
        assert_eq!(cell_text(&Data::Float(1.0)), "1");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Bool(false)), "FALSE");
        assert_eq!(cell_text(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
    }

    #[test]
    fn test_date_cells_render_as_timestamp() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("dates.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let date = ExcelDateTime::from_ymd(2024, 3, 5).unwrap();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        sheet.write_string(0, 0, "day").unwrap();
        sheet.write_datetime_with_format(1, 0, &date, &date_format).unwrap();
        workbook.save(&path).unwrap();

        let table = read_file(&path, &MergeOptions::default()).expect("read");
        assert_eq!(table.rows()[0], vec!["2024-03-05 00:00:00"]);
    }

    #[test]
    fn test_leading_empty_columns_are_kept() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("indented.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 2, "id").unwrap();
        sheet.write_string(1, 2, "1").unwrap();
        workbook.save(&path).unwrap();

        let grid = read_grid(&path, InputFormat::OpenXml).expect("grid");
        assert_eq!(grid, vec![vec!["", "", "id"], vec!["", "", "1"]]);
    }

    #[test]
    fn test_reads_single_sheet_as_text() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("people.xlsx");
        write_people(&path);

        let grid = read_grid(&path, InputFormat::OpenXml).expect("grid");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["id", "name", "score"]);
        assert_eq!(grid[1], vec!["1", "Alice", "2.5"]);
        assert_eq!(grid[2], vec!["007", "Bob", "TRUE"]);
    }

    #[test]
    fn test_leading_empty_rows_count_towards_skip() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("offset.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(2, 0, "id").unwrap();
        sheet.write_string(3, 0, "1").unwrap();
        workbook.save(&path).unwrap();

        let options = MergeOptions { skip_top_rows: 2, ..MergeOptions::default() };
        let table = read_file(&path, &options).expect("read");
        assert_eq!(table.columns()[0].to_string(), "id");
        assert_eq!(table.rows()[0], vec!["1"]);
    }

    #[test]
    fn test_multi_sheet_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("two.xlsx");
        let mut workbook = Workbook::new();
        workbook.add_worksheet().write_string(0, 0, "a").unwrap();
        workbook.add_worksheet().write_string(0, 0, "b").unwrap();
        workbook.save(&path).unwrap();

        let err = read_grid(&path, InputFormat::OpenXml).unwrap_err();
        assert!(matches!(err, MergeError::MultiSheet { sheets: 2, .. }));
    }

    #[test]
    fn test_template_extension_uses_ooxml_codec() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("people.xltx");
        write_people(&path);

        let table = read_file(&path, &MergeOptions::default()).expect("read");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_content_is_never_sniffed() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("people.xls");
        write_people(&path);

        assert!(matches!(read_grid(&path, InputFormat::Legacy), Err(MergeError::Read { .. })));
    }

    #[test]
    fn test_corrupt_workbook_is_read_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.xlsx");
        fs::write(&path, b"this is not a zip archive").expect("write");

        let err = read_file(&path, &MergeOptions::default()).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
        assert!(err.to_string().contains("broken.xlsx"));
        let source = std::error::Error::source(&err).expect("codec error kept as source");
        assert!(source.downcast_ref::<calamine::XlsxError>().is_some());
    }
}

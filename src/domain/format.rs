//! File format dispatch by extension.
//!
//! The extension is the only thing consulted; file content is never sniffed.

use std::path::Path;

use crate::utils::extension_with_dot;

/// Every extension `read_file` accepts, lowercase with leading dot.
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] =
    &[".xlsx", ".xlsm", ".xltm", ".xltx", ".xls", ".xlt", ".xlsb", ".csv"];

/// Readable formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// OOXML workbook (`.xlsx`, `.xlsm`, `.xltm`, `.xltx`)
    OpenXml,
    /// Legacy BIFF workbook (`.xls`, `.xlt`)
    Legacy,
    /// Binary workbook (`.xlsb`)
    Binary,
    /// Delimited text (`.csv`)
    Csv,
}

impl InputFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xltm" | "xltx" => Some(Self::OpenXml),
            "xls" | "xlt" => Some(Self::Legacy),
            "xlsb" => Some(Self::Binary),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(&extension_with_dot(path))
    }

    /// Workbook formats can hold several sheets; delimited text cannot.
    pub fn is_workbook(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

/// Writable formats, a strict subset of the readable ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match extension_with_dot(path).as_str() {
            ".xlsx" => Some(Self::Xlsx),
            ".csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        for ext in [".xlsx", ".xlsm", ".xltm", ".xltx"] {
            assert_eq!(InputFormat::from_extension(ext), Some(InputFormat::OpenXml), "{ext}");
        }
        assert_eq!(InputFormat::from_extension("xls"), Some(InputFormat::Legacy));
        assert_eq!(InputFormat::from_extension(".xlt"), Some(InputFormat::Legacy));
        assert_eq!(InputFormat::from_extension(".xlsb"), Some(InputFormat::Binary));
        assert_eq!(InputFormat::from_extension(".csv"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_extension(".txt"), None);
        assert_eq!(InputFormat::from_extension(""), None);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(InputFormat::from_path(Path::new("Report.XLSX")), Some(InputFormat::OpenXml));
        assert_eq!(OutputFormat::from_path(Path::new("out.CSV")), Some(OutputFormat::Csv));
    }

    #[test]
    fn test_supported_list_matches_dispatch() {
        for ext in SUPPORTED_INPUT_EXTENSIONS {
            assert!(InputFormat::from_extension(ext).is_some(), "{ext}");
        }
    }

    #[test]
    fn test_output_formats() {
        assert_eq!(OutputFormat::from_path(Path::new("out.xlsx")), Some(OutputFormat::Xlsx));
        assert_eq!(OutputFormat::from_path(Path::new("out.xls")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out.docx")), None);
        assert!(!InputFormat::Csv.is_workbook());
        assert!(InputFormat::Binary.is_workbook());
    }
}

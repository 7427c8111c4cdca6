//! Core data types shared by the reader, merger and writer.

pub mod format;
pub mod options;
pub mod table;

pub use format::{InputFormat, OutputFormat, SUPPORTED_INPUT_EXTENSIONS};
pub use options::{csv_delimiter_byte, MergeOptions, DEFAULT_CSV_DELIMITER};
pub use table::{ColumnKey, Table, PROVENANCE_COLUMN};

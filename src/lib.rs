//! sheet-concat: merge spreadsheet and CSV files row-wise into one table
//!
//! The library reads each input file into a [`Table`] whose columns are keyed by
//! multi-row header tuples, concatenates the tables in caller order and writes the
//! result back out as `.xlsx` or `.csv`.
//!
//! ```no_run
//! use sheet_concat::{concatenate_files, save_file, MergeOptions};
//!
//! let options = MergeOptions { add_filename_column: true, ..MergeOptions::default() };
//! let table = concatenate_files(&["a.csv", "b.xlsx"], &options)?;
//! save_file(&table, "merged.xlsx", options.csv_delimiter)?;
//! # Ok::<(), sheet_concat::MergeError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod merge;
pub mod read;
pub mod scan;
pub mod utils;
pub mod write;

pub use domain::{ColumnKey, InputFormat, MergeOptions, OutputFormat, Table};
pub use error::{MergeError, Result};
pub use merge::concatenate_files;
pub use read::read_file;
pub use write::save_file;

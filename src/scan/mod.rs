//! Input discovery for merge selections

pub mod selection;

pub use selection::{InputScanner, InputSelection, SelectionError};

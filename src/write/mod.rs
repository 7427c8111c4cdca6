//! Saving a table as `.xlsx` or `.csv`.
//!
//! The header is written as one row per header level, followed by the data rows
//! in table order. Output is staged in a temporary file next to the target and
//! renamed into place only when fully written, so a failed save leaves nothing
//! behind and the same table can be saved again.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::{csv_delimiter_byte, OutputFormat, Table};
use crate::error::{MergeError, Result};

pub mod delimited;
pub mod workbook;

/// Write `table` to `path`, choosing the format from the extension.
pub fn save_file(table: &Table, path: impl AsRef<Path>, csv_delimiter: char) -> Result<()> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path).ok_or_else(|| MergeError::unsupported(path))?;

    let bytes = match format {
        OutputFormat::Csv => {
            let delimiter = csv_delimiter_byte(csv_delimiter)?;
            delimited::render(table, delimiter)
        }
        OutputFormat::Xlsx => workbook::render(table),
    }
    .map_err(|e| MergeError::write(path, e))?;

    write_atomically(path, &bytes).map_err(|e| MergeError::write(path, e))?;
    tracing::info!("saved {} rows to {}", table.row_count(), path.display());
    Ok(())
}

/// Header row `level` as a flat record: component `level` of every key.
pub(crate) fn header_record(table: &Table, level: usize) -> Vec<&str> {
    table.columns().iter().map(|key| key.component(level)).collect()
}

fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    // Staged files default to 0600; request a plain file mode so the umask applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut staged = builder.tempfile_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;

    // An overwritten file keeps its permissions.
    if let Ok(existing) = fs::metadata(path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

//! Input selection: expand folders, partition by supported extension.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::domain::{InputFormat, SUPPORTED_INPUT_EXTENSIONS};
use crate::utils::{base_name, is_hidden};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no supported files selected (expected {})", SUPPORTED_INPUT_EXTENSIONS.join(", "))]
    NoSupportedFiles,

    #[error("select more than one file to merge")]
    SingleFile,

    #[error("unsupported files in selection:\n{}", .0.join("\n"))]
    RejectedFiles(Vec<String>),

    #[error("failed to list {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Files found in the caller's inputs, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSelection {
    pub supported: Vec<PathBuf>,
    pub rejected: Vec<PathBuf>,
}

impl InputSelection {
    /// Enforce the merge policy: at least two supported files and nothing rejected.
    pub fn into_mergeable(self) -> Result<Vec<PathBuf>, SelectionError> {
        if self.supported.is_empty() {
            return Err(SelectionError::NoSupportedFiles);
        }
        if self.supported.len() == 1 {
            return Err(SelectionError::SingleFile);
        }
        if !self.rejected.is_empty() {
            let names = self.rejected.iter().map(|p| base_name(p)).collect();
            return Err(SelectionError::RejectedFiles(names));
        }
        Ok(self.supported)
    }
}

/// Collects input files from explicit paths and folders.
pub struct InputScanner {
    recursive: bool,
}

impl Default for InputScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl InputScanner {
    pub fn new() -> Self {
        Self { recursive: false }
    }

    /// Descend into subfolders of folder inputs
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Expand `inputs` in order. Folder entries are sorted by file name.
    ///
    /// Explicit file paths are classified by extension only; whether they exist is
    /// left to the reader.
    pub fn scan<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<InputSelection, SelectionError> {
        let mut selection = InputSelection::default();

        for input in inputs {
            let input = input.as_ref();
            if input.is_dir() {
                self.scan_folder(input, &mut selection)?;
            } else {
                classify(&mut selection, input.to_path_buf());
            }
        }

        tracing::debug!(
            "selected {} supported, {} rejected files",
            selection.supported.len(),
            selection.rejected.len()
        );
        Ok(selection)
    }

    /// Dot-files inside folders (lock files, editor backups) are skipped. Without
    /// `recursive`, subfolders are rejected entries like any unreadable file.
    fn scan_folder(
        &self,
        folder: &Path,
        selection: &mut InputSelection,
    ) -> Result<(), SelectionError> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry
                .map_err(|source| SelectionError::Walk { path: folder.to_path_buf(), source })?;
            if is_hidden(entry.path()) {
                continue;
            }
            if entry.file_type().is_dir() {
                if !self.recursive {
                    selection.rejected.push(entry.into_path());
                }
                continue;
            }
            classify(selection, entry.into_path());
        }
        Ok(())
    }
}

fn classify(selection: &mut InputSelection, path: PathBuf) {
    if InputFormat::from_path(&path).is_some() {
        selection.supported.push(path);
    } else {
        selection.rejected.push(path);
    }
}

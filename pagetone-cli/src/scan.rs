//! Input directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from the input-directory scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input directory itself could not be listed.
    #[error("failed to list input directory {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One file could not be read as text.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the files of `dir` in filename order.
///
/// Subdirectories and other non-files are skipped. The sort keeps repeated
/// runs over an unchanged directory byte-identical in their CSV output.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::List {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::List {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
        }
    }
    files.sort();
    Ok(files)
}

/// Read one document's text.
pub fn read_document(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|e| ScanError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

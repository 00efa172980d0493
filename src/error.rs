//! Error types produced while scanning.
//!
//! A scan either completes or aborts on the first failure; there is no
//! per-entry recovery. The variants separate a bad root path from a failure
//! that happens part-way through the traversal.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path does not exist or cannot be accessed.
    #[error("path not found or inaccessible: {}", .path.display())]
    PathNotFound {
        /// The root path as supplied by the user
        path: PathBuf,
    },

    /// The root path exists but is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory {
        /// The root path as supplied by the user
        path: PathBuf,
    },

    /// A directory listing or metadata read failed during traversal.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure {
        /// The entry that could not be read
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Build a [`ScanError::ReadFailure`] from a `walkdir` error.
    ///
    /// Loop errors carry no I/O error of their own, so one is synthesized
    /// from the message.
    pub(crate) fn from_walkdir(err: walkdir::Error, root: &std::path::Path) -> Self {
        let path = err.path().map_or_else(|| root.to_path_buf(), PathBuf::from);
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));

        Self::ReadFailure { path, source }
    }
}

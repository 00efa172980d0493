//! Directory scanning and size accumulation.
//!
//! This module provides the traversal that walks a directory tree depth-first,
//! picks out every file whose name ends with [`EXTENSION`], and sums their
//! sizes. The first error aborts the scan; no partial report
//! is ever returned.

use std::{fs, path::Path};

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::{
    config::{EXTENSION, ScanOptions},
    error::ScanError,
    report::{FileEntry, ScanReport},
};

/// Directory scanner for `.cs` files.
///
/// The `Scanner` struct encapsulates the traversal of a directory tree and the
/// matching rule for file names. It is single-threaded and reads only
/// metadata; scanned files are never opened or modified.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses the progress spinner.
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use file_size::{config::ScanOptions, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions::default());
    /// assert!(!scanner.options().debug);
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The options this scanner was built with.
    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.scan_options
    }

    /// Check whether a path's file name ends with [`EXTENSION`].
    ///
    /// The comparison is a case-sensitive suffix match on the final path
    /// component, so `Foo.CS` and `Foo.csx` do not match.
    #[must_use]
    pub fn matches(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(EXTENSION))
    }

    /// Check that `root` exists and is a directory.
    ///
    /// # Errors
    ///
    /// - [`ScanError::PathNotFound`] if the path does not exist or its
    ///   metadata cannot be read
    /// - [`ScanError::NotADirectory`] if the path is not a directory
    pub fn validate_root(root: &Path) -> Result<(), ScanError> {
        let metadata = fs::metadata(root).map_err(|_| ScanError::PathNotFound {
            path: root.to_path_buf(),
        })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            })
        }
    }

    /// Scan a directory tree and total the sizes of all matching files.
    ///
    /// Entries are visited depth-first in the order the platform lists them,
    /// or in file-name order per directory when `sorted` is set. Symlinked
    /// directories are not descended into; a symlink with a matching name is
    /// counted with its target's size when the target is a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is invalid (see [`Self::validate_root`])
    /// or if any directory listing or metadata read fails during traversal.
    /// The scan stops at the first failure.
    pub fn scan_directory(&self, root: &Path) -> Result<ScanReport, ScanError> {
        Self::validate_root(root)?;

        let progress = self.progress_bar();
        let result = self.walk(root, &progress);
        progress.finish_and_clear();

        result
    }

    /// Walk the tree below `root`, collecting every matched file.
    fn walk(&self, root: &Path, progress: &ProgressBar) -> Result<ScanReport, ScanError> {
        let mut walker = WalkDir::new(root).follow_links(false);
        if self.scan_options.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut report = ScanReport::new();

        for entry in walker {
            let entry = entry.map_err(|e| ScanError::from_walkdir(e, root))?;
            progress.tick();

            let file_type = entry.file_type();
            if file_type.is_dir() || !Self::matches(entry.path()) {
                continue;
            }

            let metadata = if file_type.is_symlink() {
                fs::metadata(entry.path()).map_err(|source| ScanError::ReadFailure {
                    path: entry.path().to_path_buf(),
                    source,
                })?
            } else {
                entry.metadata().map_err(|e| ScanError::from_walkdir(e, root))?
            };

            if !metadata.is_file() {
                continue;
            }

            report.push(FileEntry::new(
                entry.path().to_path_buf(),
                root,
                metadata.len(),
            ));

            progress.set_message(format!("Scanning... {} matched", report.file_count()));
        }

        Ok(report)
    }

    /// Build the spinner shown on stderr while scanning.
    ///
    /// The spinner is advanced from the walk loop itself; there is no
    /// background ticker thread.
    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Scanning...");
        pb
    }
}

//! Console report for a completed scan.
//!
//! A [`ScanReport`] is only produced by a scan that ran to completion, so the
//! rendering functions here never print a partial total. The layout is:
//!
//! ```text
//! Listing .cs files from path: <root>
//! ----------------                        (debug only)
//! <path suffix>: <size> kB                (debug only, one per file)
//! ----------------                        (debug only)
//! Total size: <total> kB
//! ```

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{config::EXTENSION, utils::format_kb};

/// Line printed around the per-file listing in debug mode.
pub const SEPARATOR: &str = "----------------";

/// A single matched file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path as produced by the traversal
    pub path: PathBuf,

    /// Path text left after removing the root's text, e.g. `/sub/b.cs` for
    /// root `game` or `sub/b.cs` for root `game/`
    pub path_suffix: String,

    /// Size of the file in bytes
    pub size: u64,
}

impl FileEntry {
    /// Create an entry, deriving the path suffix from `root`.
    ///
    /// The root is removed as text, exactly as it was typed, so any separator
    /// following it is kept. Falls back to the full path when `path` does not
    /// start with `root`.
    #[must_use]
    pub fn new(path: PathBuf, root: &Path, size: u64) -> Self {
        let path_suffix = {
            let full = path.to_string_lossy();
            let prefix = root.to_string_lossy();
            full.strip_prefix(&*prefix).unwrap_or(&full).to_string()
        };

        Self {
            path,
            path_suffix,
            size,
        }
    }

    /// The per-file report line, e.g. `/sub/b.cs: 2.00 kB`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{}: {} kB", self.path_suffix, format_kb(self.size))
    }
}

/// Result of a completed scan: every matched file plus the running total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    entries: Vec<FileEntry>,
    total_bytes: u64,
}

impl ScanReport {
    /// Create an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            total_bytes: 0,
        }
    }

    /// Record a matched file and add its size to the total.
    pub fn push(&mut self, entry: FileEntry) {
        self.total_bytes = self.total_bytes.saturating_add(entry.size);
        self.entries.push(entry);
    }

    /// Matched files in traversal order.
    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of matched files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all matched file sizes, in bytes.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// The closing total line, e.g. `Total size: 3.00 kB`.
    #[must_use]
    pub fn total_line(&self) -> String {
        format!("Total size: {} kB", format_kb(self.total_bytes))
    }

    /// The report body (everything after the banner), one string per line.
    #[must_use]
    pub fn lines(&self, debug: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 3);

        if debug {
            lines.push(SEPARATOR.to_string());
            lines.extend(self.entries.iter().map(FileEntry::line));
            lines.push(SEPARATOR.to_string());
        }

        lines.push(self.total_line());
        lines
    }

    /// Render the report body into a `String`, each line ending in `\n`.
    #[must_use]
    pub fn render(&self, debug: bool) -> String {
        self.lines(debug)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }

    /// Write the report body to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying writer.
    pub fn write_to<W: Write>(&self, out: &mut W, debug: bool) -> io::Result<()> {
        for line in self.lines(debug) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// The opening banner, e.g. `Listing .cs files from path: /src/game`.
#[must_use]
pub fn banner(root: &Path) -> String {
    format!("Listing {EXTENSION} files from path: {}", root.display())
}

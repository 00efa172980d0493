//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how a scan is traversed and
//! how much detail the final report includes. The extension being matched is
//! not an option; it is the fixed [`EXTENSION`] constant.

/// File-name suffix a file must end with to be counted (case-sensitive).
pub const EXTENSION: &str = ".cs";

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether to print one line per matched file between separators
    pub debug: bool,

    /// Whether to visit directory entries in file-name order
    pub sorted: bool,
}

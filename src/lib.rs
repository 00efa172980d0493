//! # file-size
//!
//! Library side of the `file-size` CLI: a depth-first scan that totals the
//! size of every file ending in a given extension (`.cs` by default) and
//! renders a short kilobyte report.
//!
//! ## Modules
//!
//! - [`scanner`] - Tree traversal, suffix matching and size accumulation
//! - [`report`] - Matched entries, the running total, and report rendering
//! - [`config`] - Scan options and the persistent configuration file
//! - [`error`] - Typed scan errors
//! - [`utils`] - Kilobyte conversion and two-decimal formatting

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod utils;

pub use config::{FileConfig, ScanOptions};
pub use error::ScanError;
pub use report::{FileEntry, ScanReport};
pub use scanner::Scanner;

//! Configuration types for scanning and the persistent config file.
//!
//! - [`ScanOptions`] - Run-time options consumed by the scanner and report
//! - [`FileConfig`] - Values loaded from `config.toml`, used as CLI defaults

pub mod file;
pub mod scan;

pub use file::FileConfig;
pub use scan::{EXTENSION, ScanOptions};

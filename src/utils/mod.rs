//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! such as byte-to-kilobyte conversion and size formatting helpers.

pub mod size;

pub use size::{BYTES_PER_KB, bytes_to_kb, format_kb};

//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use file_size::config::file::{FileConfig, expand_tilde};
use file_size::config::ScanOptions;

/// Command-line arguments controlling traversal order and what is printed.
#[derive(Parser)]
struct ScanningArgs {
    /// Print every matched file with its size between separator lines
    #[arg(short = 'd', long)]
    debug: bool,

    /// Visit directory entries in file-name order
    ///
    /// Without this flag files are reported in the order the filesystem lists
    /// them, which may differ between runs and platforms.
    #[arg(long)]
    sort: bool,

    /// Hide the progress spinner
    #[arg(short = 'q', long)]
    quiet: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "file-size")]
#[command(about = "Recursively total the size of all .cs files under a directory")]
#[command(version)]
#[command(author)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory to scan
    ///
    /// When omitted, the `dir` value from the config file is used; if that is
    /// not set either, the path is read from an interactive prompt.
    dir: Option<PathBuf>,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Resolve the directory to scan from CLI args or config file.
    ///
    /// Priority: CLI argument > config file `dir`. Returns `None` when neither
    /// is set, in which case the caller prompts for a path. Tilde expansion is
    /// applied to paths originating from the config file.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| config.dir.as_deref().map(expand_tilde))
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// For both flags: CLI flag `||` config value `||` `false`.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            debug: self.scanning.debug || config.debug.unwrap_or(false),
            sorted: self.scanning.sort || config.sort.unwrap_or(false),
        }
    }

    /// Whether the progress spinner should be hidden.
    #[must_use]
    pub fn quiet(&self, config: &FileConfig) -> bool {
        self.scanning.quiet || config.quiet.unwrap_or(false)
    }
}

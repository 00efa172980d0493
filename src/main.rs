//! # file-size
//!
//! A small CLI tool that recursively scans a directory tree for C# source
//! files (`.cs`) and reports their total size in kilobytes.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for the directory, report only the total
//! file-size
//!
//! # Scan a directory and list every matched file
//! file-size ~/Projects/MyGame/Assets --debug --sort
//! ```

mod cli;

use std::{
    io::{self, Write},
    path::PathBuf,
    process::exit,
};

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use file_size::{config::FileConfig, report::banner, scanner::Scanner};
use inquire::Text;

/// Entry point for the file-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Resolves the root directory and options, validates the root, prints the
/// banner, scans, then prints the report. A failed scan prints no total.
///
/// # Errors
///
/// Returns errors from the prompt, root validation, traversal, or writing to
/// stdout.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();

    let root = match args.directory(&file_config) {
        Some(dir) => dir,
        None => prompt_for_directory()?,
    };
    let scanner =
        Scanner::new(args.scan_options(&file_config)).with_quiet(args.quiet(&file_config));
    let options = scanner.options();

    Scanner::validate_root(&root)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", banner(&root))?;
    out.flush()?;

    let report = scanner.scan_directory(&root)?;
    report.write_to(&mut out, options.debug)?;

    Ok(())
}

/// Ask the user for the directory to scan.
fn prompt_for_directory() -> Result<PathBuf> {
    let answer = Text::new("Target path:").prompt()?;
    let trimmed = answer.trim();

    if trimmed.is_empty() {
        bail!("No target path given");
    }

    Ok(PathBuf::from(trimmed))
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    FileConfig::load().unwrap_or_else(|e| {
        eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        FileConfig::default()
    })
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# file-size configuration
# All values shown are their defaults. Uncomment and change as needed.

# Directory to scan when none is given on the command line
# (you are prompted for one when this is not set)
# dir = "~/Projects/MyGame/Assets"

# Print every matched file with its size
# debug = false

# Visit directory entries in file-name order
# sort = false

# Hide the progress spinner
# quiet = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let dir = config.dir.as_ref().map_or_else(
        || "(prompt)  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
dir       = {dir}
debug     = {debug}
sort      = {sort}
quiet     = {quiet}",
        debug = show_bool(config.debug, false),
        sort = show_bool(config.sort, false),
        quiet = show_bool(config.quiet, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.dir.is_none());
        assert!(config.debug.is_none());
        assert!(config.sort.is_none());
        assert!(config.quiet.is_none());
    }

    #[test]
    fn test_format_config_defaults() {
        let formatted = format_config(&FileConfig::default());

        assert!(formatted.contains("dir       = (prompt)  (default)"));
        assert!(formatted.contains("debug     = false  (default)"));
    }

    #[test]
    fn test_format_config_values() {
        let config = FileConfig {
            dir: Some(PathBuf::from("/game/Assets")),
            debug: Some(true),
            sort: None,
            quiet: Some(true),
        };
        let formatted = format_config(&config);

        assert!(formatted.contains("dir       = \"/game/Assets\""));
        assert!(formatted.contains("debug     = true"));
        assert!(formatted.contains("sort      = false  (default)"));
        assert!(formatted.contains("quiet     = true"));
    }
}

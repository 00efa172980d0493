//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/file-size/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/Projects/MyGame/Assets"
//! debug = true
//! sort = true
//! quiet = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default directory to scan; the user is prompted when neither this nor
    /// a CLI argument is given
    pub dir: Option<PathBuf>,

    /// Whether to print per-file lines
    pub debug: Option<bool>,

    /// Whether to traverse in file-name order
    pub sort: Option<bool>,

    /// Whether to hide the progress spinner
    pub quiet: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use file_size::config::file::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/file-size/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("file-size").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.dir.is_none());
        assert!(config.debug.is_none());
        assert!(config.sort.is_none());
        assert!(config.quiet.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
dir = "~/Projects/Game"
debug = true
sort = true
quiet = false
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("~/Projects/Game")));
        assert_eq!(config.debug, Some(true));
        assert_eq!(config.sort, Some(true));
        assert_eq!(config.quiet, Some(false));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: FileConfig = toml::from_str("debug = true\n").unwrap();

        assert_eq!(config.debug, Some(true));
        assert!(config.dir.is_none());
        assert!(config.sort.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.dir.is_none());
        assert!(config.debug.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let result = toml::from_str::<FileConfig>("debug = \"yes please\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        let result = toml::from_str::<FileConfig>("keep_size = \"10MB\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_extension_key_is_rejected() {
        // The matched extension is fixed and cannot be set from the config file
        let result = toml::from_str::<FileConfig>("extension = \".rs\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "debug = true\nsort = true\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.debug, Some(true));
        assert_eq!(config.sort, Some(true));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let err = FileConfig::load_from(&tmp.path().join("missing.toml")).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_invalid_toml_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "debug = [").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with(Path::new("file-size").join("config.toml")));
        }
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let path = PathBuf::from("~/Projects");
        let expanded = expand_tilde(&path);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Projects"));
        }
    }

    #[test]
    fn test_expand_tilde_bare() {
        let expanded = expand_tilde(Path::new("~"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home);
        }
    }

    #[test]
    fn test_expand_tilde_no_effect_on_non_tilde() {
        let relative = PathBuf::from("some/relative/path");
        assert_eq!(expand_tilde(&relative), relative);

        let absolute = PathBuf::from("/usr/local/share");
        assert_eq!(expand_tilde(&absolute), absolute);

        // Only a leading `~` component is expanded
        let embedded = PathBuf::from("assets/~backup");
        assert_eq!(expand_tilde(&embedded), embedded);
    }
}

//! rune-wrap configuration system
//!
//! Settings are read from `rune.toml` and may be overridden by environment
//! variables, so a one-off run does not need an edited config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "rune.toml";

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Main configuration structure for rune-wrap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Word wrap settings
    pub wrap: WrapConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// Word wrap configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WrapConfig {
    /// Column budget for each output line
    pub width: usize,
    /// Strip trailing whitespace from wrapped lines when printing
    pub trim_trailing: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter directives (e.g. "rune_text=trace")
    pub filter: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: 80,
            trim_trailing: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl ConfigError {
    /// `true` when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist.
    ///
    /// Any other read or parse failure is logged and also yields defaults.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => Self::default(),
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_WRAP_WIDTH") {
            match val.parse::<usize>() {
                Ok(width) => self.wrap.width = width,
                Err(_) => log::warn!("ignoring RUNE_WRAP_WIDTH={val:?}: not a column count"),
            }
        }
        if let Ok(val) = std::env::var("RUNE_WRAP_TRIM_TRAILING") {
            self.wrap.trim_trailing = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(filter) = std::env::var("RUNE_LOG") {
            self.log.filter = filter;
        }
    }

    /// Render the configuration as a `rune.toml` document
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from `path`, or rune.toml (defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_or_default(),
        };
        config.merge_with_env();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RuneConfig::default();
        assert_eq!(config.wrap.width, 80);
        assert!(!config.wrap.trim_trailing);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_toml_serialization() {
        let config = RuneConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed: RuneConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: RuneConfig = toml::from_str("[wrap]\nwidth = 40\n").unwrap();
        assert_eq!(parsed.wrap.width, 40);
        assert!(!parsed.wrap.trim_trailing);
        assert_eq!(parsed.log, LogConfig::default());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = RuneConfig::load_from_file("does/not/exist/rune.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_only_missing_files_count_as_not_found() {
        let missing = RuneConfig::load_from_file("does/not/exist/rune.toml").unwrap_err();
        assert!(missing.is_not_found());

        // A directory in place of the file is a real read error.
        let dir = std::env::temp_dir();
        let err = RuneConfig::load_from_file(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_file_is_a_parse_error() {
        let path = std::env::temp_dir().join("rune-config-invalid-test.toml");
        std::fs::write(&path, "[wrap]\nwidth = \"wide\"\n").unwrap();
        let err = RuneConfig::load_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_merge_with_env() {
        // Set environment variable
        unsafe {
            std::env::set_var("RUNE_WRAP_WIDTH", "33");
            std::env::set_var("RUNE_WRAP_TRIM_TRAILING", "true");
        }

        let mut config = RuneConfig::default();
        config.merge_with_env();

        assert_eq!(config.wrap.width, 33);
        assert!(config.wrap.trim_trailing);

        // Clean up
        unsafe {
            std::env::remove_var("RUNE_WRAP_WIDTH");
            std::env::remove_var("RUNE_WRAP_TRIM_TRAILING");
        }
    }
}

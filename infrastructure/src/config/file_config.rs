//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [logging]
//! level = "info,my_app=debug"
//! format = "compact"
//! ansi = false
//! with_target = true
//! file = "/var/log/my_app.log"
//! provider = "jsonl"
//! jsonl_path = "/var/log/my_app.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("logging.level cannot be empty")]
    EmptyLevel,

    #[error("logging.jsonl_path is required when logging.provider = \"jsonl\"")]
    MissingJsonlPath,
}

/// Line format of the stderr / file `fmt` layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLogFormat {
    #[default]
    Full,
    Compact,
}

/// Backend that hands out logger handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileProviderKind {
    /// Emit `tracing` events
    #[default]
    Tracing,
    /// Write JSON lines to `jsonl_path`
    Jsonl,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub level: String,
    pub format: FileLogFormat,
    /// Enable colored terminal output
    pub ansi: bool,
    /// Show event targets
    pub with_target: bool,
    /// Also write formatted output to this file (no rotation)
    pub file: Option<PathBuf>,
    pub provider: FileProviderKind,
    /// Output file of the `jsonl` provider
    pub jsonl_path: Option<PathBuf>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: FileLogFormat::Full,
            ansi: true,
            with_target: false,
            file: None,
            provider: FileProviderKind::Tracing,
            jsonl_path: None,
        }
    }
}

impl FileLoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLevel);
        }
        if self.provider == FileProviderKind::Jsonl && self.jsonl_path.is_none() {
            return Err(ConfigValidationError::MissingJsonlPath);
        }
        Ok(())
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, FileLogFormat::Full);
        assert_eq!(config.logging.provider, FileProviderKind::Tracing);
        assert!(config.logging.ansi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_level_is_invalid() {
        let config = FileLoggingConfig {
            level: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyLevel));
    }

    #[test]
    fn test_jsonl_requires_path() {
        let mut config = FileLoggingConfig {
            provider: FileProviderKind::Jsonl,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::MissingJsonlPath));

        config.jsonl_path = Some(PathBuf::from("out.jsonl"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_lowercase_enums() {
        let config: FileLoggingConfig =
            serde_json::from_str(r#"{"format": "compact", "provider": "jsonl"}"#).unwrap();
        assert_eq!(config.format, FileLogFormat::Compact);
        assert_eq!(config.provider, FileProviderKind::Jsonl);
        assert_eq!(config.level, "info");
    }
}

//! Configuration file loading for logged-class
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOGGED_`-prefixed environment variables
//! 2. Explicitly requested file
//! 3. Project root: `./logged.toml` or `./.logged.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/logged-class/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLogFormat, FileLoggingConfig, FileProviderKind,
};
pub use loader::ConfigLoader;

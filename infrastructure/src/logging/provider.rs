//! Provider selection from configuration.

use super::jsonl_logger::JsonlLoggerProvider;
use super::tracing_logger::TracingLoggerProvider;
use crate::config::{ConfigValidationError, FileLoggingConfig, FileProviderKind};
use logged_application::LoggerProvider;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building a provider from configuration
#[derive(Error, Debug)]
pub enum ProviderSetupError {
    #[error("Invalid logging configuration: {0}")]
    Config(#[from] ConfigValidationError),

    #[error("Could not open JSONL log file {0}")]
    JsonlUnavailable(String),
}

/// Build the logger provider selected by `config.provider`.
pub fn build_provider(
    config: &FileLoggingConfig,
) -> Result<Arc<dyn LoggerProvider>, ProviderSetupError> {
    config.validate()?;

    match config.provider {
        FileProviderKind::Tracing => Ok(Arc::new(TracingLoggerProvider::new())),
        FileProviderKind::Jsonl => {
            let path = config
                .jsonl_path
                .as_ref()
                .ok_or(ConfigValidationError::MissingJsonlPath)?;
            let provider = JsonlLoggerProvider::new(path)
                .ok_or_else(|| ProviderSetupError::JsonlUnavailable(path.display().to_string()))?;
            Ok(Arc::new(provider))
        }
    }
}

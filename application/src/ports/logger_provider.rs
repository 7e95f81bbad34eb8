//! Port for obtaining named loggers.
//!
//! Defines the [`LoggerProvider`] trait, the process-wide logging facility
//! that turns a name into a [`LoggerHandle`]. Infrastructure adapters back it
//! with `tracing`, a JSONL file or an in-memory buffer.

use logged_domain::{LoggerHandle, NullLogger, ROOT_LOGGER_NAME};
use std::sync::Arc;
use thiserror::Error;

/// Errors a logger provider may report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Logger provider unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid logger name: {0:?}")]
    InvalidName(String),
}

/// Port for the logging facility that hands out named loggers.
///
/// Implementations are expected to return the same handle for repeated
/// requests of one name, and to treat the empty name as the root logger.
pub trait LoggerProvider: Send + Sync {
    /// Get the logger called `name`.
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LoggerHandle>, ProviderError>;
}

impl<P: LoggerProvider + ?Sized> LoggerProvider for Arc<P> {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LoggerHandle>, ProviderError> {
        (**self).get_logger(name)
    }
}

/// Resolve the effective logger name.
///
/// The empty name means the root logger. Names containing control characters
/// are rejected.
pub fn resolve_logger_name(name: &str) -> Result<&str, ProviderError> {
    if name.is_empty() {
        return Ok(ROOT_LOGGER_NAME);
    }
    if name.chars().any(char::is_control) {
        return Err(ProviderError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// No-op provider for tests and when logging is disabled.
pub struct NullLoggerProvider;

impl LoggerProvider for NullLoggerProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LoggerHandle>, ProviderError> {
        Ok(Arc::new(NullLogger::new(resolve_logger_name(name)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logged_domain::Severity;

    #[test]
    fn test_null_provider_names_handles() {
        let logger = NullLoggerProvider.get_logger("Worker").unwrap();
        assert_eq!(logger.name(), "Worker");
        assert!(Severity::ALL.iter().all(|s| logger.method(*s).is_some()));
    }

    #[test]
    fn test_empty_name_is_root() {
        let logger = NullLoggerProvider.get_logger("").unwrap();
        assert_eq!(logger.name(), ROOT_LOGGER_NAME);
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let err = NullLoggerProvider.get_logger("bad\nname").err().unwrap();
        assert_eq!(err, ProviderError::InvalidName("bad\nname".to_string()));
        assert_eq!(resolve_logger_name("app.db").unwrap(), "app.db");
    }

    #[test]
    fn test_arc_provider_delegates() {
        let provider: Arc<dyn LoggerProvider> = Arc::new(NullLoggerProvider);
        assert_eq!(provider.get_logger("x").unwrap().name(), "x");
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::InvalidName("a\nb".to_string());
        assert_eq!(err.to_string(), "Invalid logger name: \"a\\nb\"");
    }
}

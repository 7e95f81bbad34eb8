//! Application layer for logged-class
//!
//! This crate contains the logger provider port and the construction
//! interceptor that attaches loggers to new instances.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::logger_provider::{
    LoggerProvider, NullLoggerProvider, ProviderError, resolve_logger_name,
};
pub use use_cases::logged::{Logged, LoggedClass, LoggedError};

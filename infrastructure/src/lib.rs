//! Infrastructure layer for logged-class
//!
//! This crate contains adapters that implement the logger provider port
//! defined in the application layer, the `tracing` subscriber setup and
//! configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLogFormat, FileLoggingConfig,
    FileProviderKind,
};
pub use logging::{
    JsonlLoggerProvider, LoggingInitError, MemoryLoggerProvider, ProviderSetupError,
    TracingLogger, TracingLoggerProvider, build_provider, init_tracing,
};

//! Logging infrastructure: logger provider adapters and subscriber setup.
//!
//! Implementations of the [`LoggerProvider`](logged_application::LoggerProvider) port:
//!
//! - [`TracingLoggerProvider`]: emits `tracing` events (the default)
//! - [`JsonlLoggerProvider`]: writes one JSON object per line to a file
//! - [`MemoryLoggerProvider`]: keeps records in memory, for tests
//!
//! plus [`init_tracing`] to install the `tracing` subscriber and
//! [`build_provider`] to pick a provider from configuration.

mod jsonl_logger;
mod memory_logger;
mod provider;
mod subscriber;
mod tracing_logger;

pub use jsonl_logger::{JsonlLogger, JsonlLoggerProvider};
pub use memory_logger::{MemoryLogger, MemoryLoggerProvider};
pub use provider::{ProviderSetupError, build_provider};
pub use subscriber::{LoggingInitError, env_filter, init_tracing};
pub use tracing_logger::{LOG_TARGET, TracingLogger, TracingLoggerProvider};

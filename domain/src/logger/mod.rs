//! Logger domain module
//!
//! Everything needed to describe a logger and attach it to an object,
//! independent of any concrete logging backend:
//!
//! ```text
//! LoggerHandle ──method(severity)──▶ LogMethod ──call(msg, LogArgs)
//!      │
//!      └─ bind_methods ──▶ LogAttributes (owned by a LogTarget)
//! ```
//!
//! # Key Types
//!
//! - [`Severity`]: the six severity names
//! - [`LogArgs`]: positional and keyword arguments of a call
//! - [`LogMethod`]: one severity method of a handle
//! - [`LoggerHandle`]: a named logger exposing severity methods
//! - [`LogAttributes`] / [`LogTarget`]: logger slots and bound methods of an object
//! - [`bind_methods`]: copies a handle's severity methods onto a target

pub mod args;
pub mod attributes;
pub mod binder;
pub mod handle;
pub mod method;
pub mod record;
pub mod severity;

#[cfg(test)]
pub(crate) mod testing;

pub use args::{LogArgs, RESERVED_SEVERITY_FIELD};
pub use attributes::{HIDDEN_LOGGER_ATTR, LogAttributes, LogTarget, SHORT_LOGGER_ATTR};
pub use binder::bind_methods;
pub use handle::{LoggerHandle, NullLogger, ROOT_LOGGER_NAME};
pub use method::LogMethod;
pub use record::LogRecord;
pub use severity::{METHOD_NAMES, Severity};

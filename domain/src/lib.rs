//! Domain layer for logged-class
//!
//! This crate contains the core types for attaching loggers to objects.
//! It has no dependencies on any logging backend.
//!
//! # Core Concepts
//!
//! ## Logger handles
//!
//! A [`LoggerHandle`] is a named logger exposing one [`LogMethod`] per
//! [`Severity`]. Handles come from a provider outside this crate and are
//! shared by reference.
//!
//! ## Attaching to objects
//!
//! - **Binding**: [`bind_methods`] copies a handle's severity methods onto any
//!   [`LogTarget`], which then logs through them directly.
//! - **Mixin**: [`LoggedMixin`] gives a type severity methods that do nothing
//!   until a logger is attached to the type or to the instance.

pub mod core;
pub mod logger;
pub mod mixin;
pub mod util;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use logger::{
    HIDDEN_LOGGER_ATTR, LogArgs, LogAttributes, LogMethod, LogRecord, LogTarget, LoggerHandle,
    METHOD_NAMES, NullLogger, RESERVED_SEVERITY_FIELD, ROOT_LOGGER_NAME, SHORT_LOGGER_ATTR,
    Severity, bind_methods,
};
pub use mixin::{DefaultLogger, LoggedMixin, LoggerSlot};
pub use util::short_type_name;

//! Construction interceptor.
//!
//! [`Logged`] wraps a type's construction routine so that every new instance
//! starts out with a named logger attached:
//!
//! 1. compute the logger name (fixed `name`, else the runtime type name)
//! 2. request the handle from the [`LoggerProvider`]
//! 3. store it in fresh [`LogAttributes`] under `attr_name`
//! 4. bind the six severity methods when `add_methods` is set
//! 5. run the type's own construction logic ([`LoggedClass::init`])
//!
//! A type opts in by implementing [`LoggedClass`]. A subtype reuses its
//! ancestor's [`LoggedClass::decoration`] and construction logic but keeps its
//! own [`LoggedClass::class_name`], so by default it logs under its own name.
//! When the inherited decoration carries a fixed `name`, every type sharing it
//! logs under that same name.
//!
//! ```
//! use logged_application::{Logged, LoggedClass, NullLoggerProvider};
//! use logged_domain::{HIDDEN_LOGGER_ATTR, LogArgs, LogAttributes, LogTarget};
//!
//! struct Worker {
//!     attributes: LogAttributes,
//!     id: u32,
//! }
//!
//! impl LogTarget for Worker {
//!     fn log_attributes(&self) -> &LogAttributes { &self.attributes }
//!     fn log_attributes_mut(&mut self) -> &mut LogAttributes { &mut self.attributes }
//! }
//!
//! impl LoggedClass for Worker {
//!     type Args = u32;
//!     fn decoration() -> Logged { Logged::new() }
//!     fn init(attributes: LogAttributes, id: u32) -> Self {
//!         Worker { attributes, id }
//!     }
//! }
//!
//! let worker = Worker::create(&NullLoggerProvider, 7).unwrap();
//! assert_eq!(worker.logger(HIDDEN_LOGGER_ATTR).unwrap().name(), "Worker");
//! worker.info("worker {} ready", &LogArgs::new().arg(worker.id)).unwrap();
//! ```

use crate::ports::logger_provider::{LoggerProvider, ProviderError};
use logged_domain::{
    DomainError, HIDDEN_LOGGER_ATTR, LogAttributes, LogTarget, SHORT_LOGGER_ATTR, bind_methods,
    short_type_name,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Errors that can occur while constructing a logged instance.
#[derive(Error, Debug)]
pub enum LoggedError {
    #[error("Logger provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Method binding failed: {0}")]
    Binding(#[from] DomainError),
}

/// Options of the construction interceptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logged {
    /// Fixed logger name; empty means "use the runtime type name".
    pub name: String,
    /// Attribute the logger handle is stored under.
    pub attr_name: String,
    /// Whether to bind the six severity methods as well.
    pub add_methods: bool,
}

impl Default for Logged {
    fn default() -> Self {
        Self {
            name: String::new(),
            attr_name: HIDDEN_LOGGER_ATTR.to_string(),
            add_methods: true,
        }
    }
}

impl Logged {
    /// Bare decoration: hidden attribute, severity methods, runtime type name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle-only decoration stored under the short attribute.
    pub fn logger_attr() -> Self {
        Self {
            attr_name: SHORT_LOGGER_ATTR.to_string(),
            add_methods: false,
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_attr_name(mut self, attr_name: impl Into<String>) -> Self {
        self.attr_name = attr_name.into();
        self
    }

    pub fn with_methods(mut self, add_methods: bool) -> Self {
        self.add_methods = add_methods;
        self
    }

    /// Logger name for an instance whose runtime type is `runtime_class`.
    pub fn logger_name<'a>(&'a self, runtime_class: &'a str) -> &'a str {
        if self.name.is_empty() {
            runtime_class
        } else {
            &self.name
        }
    }

    /// Prepare the logger attributes of a new `runtime_class` instance.
    pub fn attach(
        &self,
        provider: &dyn LoggerProvider,
        runtime_class: &str,
    ) -> Result<LogAttributes, LoggedError> {
        let name = self.logger_name(runtime_class);
        let logger = provider.get_logger(name)?;

        trace!(
            logger = %name,
            attr_name = %self.attr_name,
            add_methods = self.add_methods,
            "Attaching logger to {}",
            runtime_class
        );

        let mut attributes = LogAttributes::new();
        attributes.set_logger(self.attr_name.clone(), logger.clone());
        if self.add_methods {
            bind_methods(&mut attributes, logger.as_ref())?;
        }
        Ok(attributes)
    }

    /// Construct a `T`, attaching its logger before `T::init` runs.
    pub fn construct<T: LoggedClass>(
        &self,
        provider: &dyn LoggerProvider,
        args: T::Args,
    ) -> Result<T, LoggedError> {
        let attributes = self.attach(provider, T::class_name())?;
        Ok(T::init(attributes, args))
    }
}

/// A type whose construction is intercepted by a [`Logged`] decoration.
pub trait LoggedClass: LogTarget + Sized {
    /// Construction arguments passed through to [`LoggedClass::init`].
    type Args;

    /// Decoration applied to this type's construction routine.
    fn decoration() -> Logged;

    /// Runtime type name, used as the logger name unless the decoration
    /// fixes one.
    fn class_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// The type's own construction logic, run after the logger is attached.
    ///
    /// `attributes` already holds the logger (and bound methods) and must be
    /// kept by the returned instance.
    fn init(attributes: LogAttributes, args: Self::Args) -> Self;

    /// Construct an instance through the decorated construction routine.
    fn create(provider: &dyn LoggerProvider, args: Self::Args) -> Result<Self, LoggedError> {
        Self::decoration().construct::<Self>(provider, args)
    }
}

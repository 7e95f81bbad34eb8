//! Optional logging mixin
//!
//! [`LoggedMixin`] gives a type the six severity methods without requiring a
//! logger at construction. Until a logger is attached every call is a no-op.
//!
//! A logger can be attached at two levels:
//!
//! - **type default**: a `static` [`DefaultLogger`] shared by every instance
//!   of the type (and of subtypes whose slot inherits from it);
//! - **instance override**: the instance's own [`LoggerSlot`], which shadows
//!   the type default.
//!
//! ```
//! use logged_domain::{DefaultLogger, LogArgs, LoggedMixin, LoggerSlot, NullLogger};
//! use std::sync::Arc;
//!
//! static WORKER_LOGGER: DefaultLogger = DefaultLogger::new();
//!
//! #[derive(Default)]
//! struct Worker {
//!     logger: LoggerSlot,
//! }
//!
//! impl LoggedMixin for Worker {
//!     fn default_logger() -> &'static DefaultLogger {
//!         &WORKER_LOGGER
//!     }
//!     fn logger_slot(&self) -> &LoggerSlot {
//!         &self.logger
//!     }
//!     fn logger_slot_mut(&mut self) -> &mut LoggerSlot {
//!         &mut self.logger
//!     }
//! }
//!
//! let worker = Worker::default();
//! worker.info("dropped, nothing attached", &LogArgs::NONE);
//!
//! Worker::set_default_logger(Some(Arc::new(NullLogger::new("Worker"))));
//! assert_eq!(worker.effective_logger().unwrap().name(), "Worker");
//! ```

use crate::logger::args::LogArgs;
use crate::logger::handle::LoggerHandle;
use crate::logger::severity::Severity;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Logger attachment state of a type or an instance.
#[derive(Clone, Default)]
pub enum LoggerSlot {
    /// Nothing set here; defer to the next level up.
    #[default]
    Inherit,
    /// Explicitly set to no logger.
    Detached,
    Attached(Arc<dyn LoggerHandle>),
}

impl LoggerSlot {
    fn from_option(logger: Option<Arc<dyn LoggerHandle>>) -> Self {
        match logger {
            Some(handle) => LoggerSlot::Attached(handle),
            None => LoggerSlot::Detached,
        }
    }

    /// Resolve against `fallback` when nothing is set here.
    fn resolve(
        &self,
        fallback: impl FnOnce() -> Option<Arc<dyn LoggerHandle>>,
    ) -> Option<Arc<dyn LoggerHandle>> {
        match self {
            LoggerSlot::Inherit => fallback(),
            LoggerSlot::Detached => None,
            LoggerSlot::Attached(handle) => Some(handle.clone()),
        }
    }
}

impl fmt::Debug for LoggerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerSlot::Inherit => f.write_str("Inherit"),
            LoggerSlot::Detached => f.write_str("Detached"),
            LoggerSlot::Attached(handle) => {
                f.debug_tuple("Attached").field(&handle.name()).finish()
            }
        }
    }
}

/// Type-level default logger.
///
/// Declared as a `static` per type. A subtype either shares its parent's
/// static outright or declares its own with [`DefaultLogger::inheriting`],
/// which follows the parent's default until the subtype sets one itself.
pub struct DefaultLogger {
    slot: RwLock<LoggerSlot>,
    parent: Option<&'static DefaultLogger>,
}

impl DefaultLogger {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(LoggerSlot::Inherit),
            parent: None,
        }
    }

    pub const fn inheriting(parent: &'static DefaultLogger) -> Self {
        Self {
            slot: RwLock::new(LoggerSlot::Inherit),
            parent: Some(parent),
        }
    }

    /// Set (or with `None`, explicitly clear) the default for this level.
    pub fn set(&self, logger: Option<Arc<dyn LoggerHandle>>) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = LoggerSlot::from_option(logger);
    }

    /// The default in effect: this level's own, else the parent's.
    pub fn get(&self) -> Option<Arc<dyn LoggerHandle>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.resolve(|| self.parent.and_then(DefaultLogger::get))
    }

    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("DefaultLogger")
            .field("slot", &*slot)
            .field("inherits", &self.parent.is_some())
            .finish()
    }
}

/// Severity methods that forward to an optionally attached logger.
pub trait LoggedMixin: Sized {
    /// The type-level default logger of `Self`.
    fn default_logger() -> &'static DefaultLogger;

    fn logger_slot(&self) -> &LoggerSlot;

    fn logger_slot_mut(&mut self) -> &mut LoggerSlot;

    /// Attach `logger` as the default for every instance without an override.
    fn set_default_logger(logger: Option<Arc<dyn LoggerHandle>>) {
        Self::default_logger().set(logger);
    }

    /// Attach `logger` to this instance only, shadowing the type default.
    fn set_logger(&mut self, logger: Option<Arc<dyn LoggerHandle>>) {
        *self.logger_slot_mut() = LoggerSlot::from_option(logger);
    }

    /// Instance override, falling back to the type default.
    fn effective_logger(&self) -> Option<Arc<dyn LoggerHandle>> {
        self.logger_slot().resolve(|| Self::default_logger().get())
    }

    /// Forward one call to the effective logger.
    ///
    /// Without a logger, or when the logger lacks the requested severity
    /// method, nothing happens.
    fn log(&self, severity: Severity, message: &str, args: &LogArgs) {
        let Some(logger) = self.effective_logger() else {
            return;
        };
        if let Some(method) = logger.method(severity) {
            method.call(message, &args.without_reserved());
        }
    }

    fn debug(&self, message: &str, args: &LogArgs) {
        self.log(Severity::Debug, message, args)
    }

    fn info(&self, message: &str, args: &LogArgs) {
        self.log(Severity::Info, message, args)
    }

    fn warning(&self, message: &str, args: &LogArgs) {
        self.log(Severity::Warning, message, args)
    }

    fn error(&self, message: &str, args: &LogArgs) {
        self.log(Severity::Error, message, args)
    }

    fn critical(&self, message: &str, args: &LogArgs) {
        self.log(Severity::Critical, message, args)
    }

    fn exception(&self, message: &str, args: &LogArgs) {
        self.log(Severity::Exception, message, args)
    }
}

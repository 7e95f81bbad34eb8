//! Logger attributes of a target object
//!
//! Objects cannot grow fields at runtime, so everything a construction
//! interceptor or [`bind_methods`](super::binder::bind_methods) attaches to an
//! object lives in one [`LogAttributes`] value the object owns:
//!
//! ```text
//! LogAttributes
//!   handles: "_logger" → Arc<dyn LoggerHandle>   (or "log", or any name)
//!   methods: debug/info/warning/error/critical/exception → LogMethod
//! ```
//!
//! The object exposes it through [`LogTarget`], which also provides the six
//! severity shortcuts backed by the bound methods.

use super::args::LogArgs;
use super::handle::LoggerHandle;
use super::method::LogMethod;
use super::severity::Severity;
use crate::core::error::DomainError;
use crate::util::short_type_name;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Conventional attribute holding the logger handle of a decorated object.
pub const HIDDEN_LOGGER_ATTR: &str = "_logger";

/// Short attribute used when only the handle is attached.
pub const SHORT_LOGGER_ATTR: &str = "log";

/// Named logger slots and bound severity methods of one object.
#[derive(Clone, Default)]
pub struct LogAttributes {
    handles: BTreeMap<String, Arc<dyn LoggerHandle>>,
    methods: BTreeMap<Severity, LogMethod>,
}

impl LogAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` under `attr_name`, replacing any previous handle there.
    pub fn set_logger(&mut self, attr_name: impl Into<String>, handle: Arc<dyn LoggerHandle>) {
        self.handles.insert(attr_name.into(), handle);
    }

    pub fn logger(&self, attr_name: &str) -> Option<&Arc<dyn LoggerHandle>> {
        self.handles.get(attr_name)
    }

    /// Store a bound severity method under its own name.
    pub fn set_method(&mut self, method: LogMethod) {
        self.methods.insert(method.severity(), method);
    }

    pub fn method(&self, severity: Severity) -> Option<&LogMethod> {
        self.methods.get(&severity)
    }

    /// Whether an attribute called `name` is present, either a logger slot
    /// or a bound severity method.
    pub fn has_attr(&self, name: &str) -> bool {
        if self.handles.contains_key(name) {
            return true;
        }
        name.parse::<Severity>()
            .map(|severity| self.methods.contains_key(&severity))
            .unwrap_or(false)
    }

    /// Names of all present attributes, logger slots first.
    pub fn attr_names(&self) -> Vec<&str> {
        self.handles
            .keys()
            .map(String::as_str)
            .chain(self.methods.values().map(|method| method.name()))
            .collect()
    }

    /// Invoke the bound method for `severity`.
    ///
    /// Fails with [`DomainError::AttributeResolution`] naming `target` when
    /// no method of that name has been bound.
    pub fn call(
        &self,
        target: &str,
        severity: Severity,
        message: &str,
        args: &LogArgs,
    ) -> Result<(), DomainError> {
        let method = self
            .method(severity)
            .ok_or_else(|| DomainError::attribute_resolution(target, severity.as_str()))?;
        method.call(message, args);
        Ok(())
    }
}

impl fmt::Debug for LogAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handles: BTreeMap<&str, &str> = self
            .handles
            .iter()
            .map(|(attr, handle)| (attr.as_str(), handle.name()))
            .collect();
        f.debug_struct("LogAttributes")
            .field("handles", &handles)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// An object that carries [`LogAttributes`].
///
/// The severity shortcuts call the methods bound by
/// [`bind_methods`](super::binder::bind_methods); on an object without bound
/// methods they fail with [`DomainError::AttributeResolution`] naming the
/// implementing type.
pub trait LogTarget {
    fn log_attributes(&self) -> &LogAttributes;

    fn log_attributes_mut(&mut self) -> &mut LogAttributes;

    /// Logger handle stored under `attr_name`
    fn logger(&self, attr_name: &str) -> Option<&Arc<dyn LoggerHandle>> {
        self.log_attributes().logger(attr_name)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.log_attributes().has_attr(name)
    }

    fn debug(&self, message: &str, args: &LogArgs) -> Result<(), DomainError> {
        self.log_attributes()
            .call(short_type_name::<Self>(), Severity::Debug, message, args)
    }

    fn info(&self, message: &str, args: &LogArgs) -> Result<(), DomainError> {
        self.log_attributes()
            .call(short_type_name::<Self>(), Severity::Info, message, args)
    }

    fn warning(&self, message: &str, args: &LogArgs) -> Result<(), DomainError> {
        self.log_attributes()
            .call(short_type_name::<Self>(), Severity::Warning, message, args)
    }

    fn error(&self, message: &str, args: &LogArgs) -> Result<(), DomainError> {
        self.log_attributes()
            .call(short_type_name::<Self>(), Severity::Error, message, args)
    }

    fn critical(&self, message: &str, args: &LogArgs) -> Result<(), DomainError> {
        self.log_attributes()
            .call(short_type_name::<Self>(), Severity::Critical, message, args)
    }

    fn exception(&self, message: &str, args: &LogArgs) -> Result<(), DomainError> {
        self.log_attributes()
            .call(short_type_name::<Self>(), Severity::Exception, message, args)
    }
}

impl LogTarget for LogAttributes {
    fn log_attributes(&self) -> &LogAttributes {
        self
    }

    fn log_attributes_mut(&mut self) -> &mut LogAttributes {
        self
    }
}

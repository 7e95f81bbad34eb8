//! Logger handle trait

use super::method::LogMethod;
use super::severity::Severity;

/// Name given to the logger requested with an empty name.
pub const ROOT_LOGGER_NAME: &str = "root";

/// A named logger capable of recording messages tagged with a severity.
///
/// Handles are produced by a logger provider and shared by reference
/// (`Arc<dyn LoggerHandle>`) between every object they are attached to.
pub trait LoggerHandle: Send + Sync {
    /// Logger name
    fn name(&self) -> &str;

    /// Severity method of this handle, or `None` if it does not expose one.
    ///
    /// Repeated lookups must return clones of the same [`LogMethod`] so that
    /// bound copies keep their identity.
    fn method(&self, severity: Severity) -> Option<LogMethod>;
}

/// Handle whose six severity methods discard everything.
pub struct NullLogger {
    name: String,
    methods: [LogMethod; 6],
}

impl NullLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Severity::ALL.map(|severity| LogMethod::new(severity, |_, _| {})),
        }
    }
}

impl LoggerHandle for NullLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn method(&self, severity: Severity) -> Option<LogMethod> {
        self.methods.iter().find(|m| m.severity() == severity).cloned()
    }
}

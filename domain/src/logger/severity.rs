//! Severity value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names of the recognised severity methods, in binding order.
pub const METHOD_NAMES: [&str; 6] = ["debug", "info", "warning", "error", "critical", "exception"];

/// Severity of a log message.
///
/// Each variant corresponds to one severity method exposed by a
/// [`LoggerHandle`](super::handle::LoggerHandle) and, after binding,
/// by a [`LogTarget`](super::attributes::LogTarget).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    /// Error-level message reported from an error handling path
    Exception,
}

impl Severity {
    /// All severities, in the same order as [`METHOD_NAMES`].
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Exception,
    ];

    /// Method name for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Exception => "exception",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSeverity(s.to_string()))
    }
}

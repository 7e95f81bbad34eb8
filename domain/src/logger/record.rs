//! Captured log record

use super::args::LogArgs;
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One log call as seen by a recording logger: the logger name, severity,
/// rendered message and the keyword fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub logger: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Value>,
}

impl LogRecord {
    /// Build a record by rendering `message` with `args`.
    pub fn new(
        logger: impl Into<String>,
        severity: Severity,
        message: &str,
        args: &LogArgs,
    ) -> Self {
        Self {
            logger: logger.into(),
            severity,
            message: args.render(message),
            fields: args.fields.clone(),
        }
    }
}

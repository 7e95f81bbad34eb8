//! In-memory logger handles, for asserting on log output in tests.

use logged_application::{LoggerProvider, ProviderError, resolve_logger_name};
use logged_domain::{LogMethod, LogRecord, LoggerHandle, Severity};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

type Records = Arc<Mutex<Vec<LogRecord>>>;

/// Logger that appends every call to a shared [`LogRecord`] buffer.
pub struct MemoryLogger {
    name: String,
    methods: [LogMethod; 6],
}

impl MemoryLogger {
    fn new(name: &str, records: Records) -> Self {
        let methods = Severity::ALL.map(|severity| {
            let records = records.clone();
            let logger = name.to_string();
            LogMethod::new(severity, move |message, args| {
                records
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(LogRecord::new(logger.as_str(), severity, message, args));
            })
        });
        Self {
            name: name.to_string(),
            methods,
        }
    }
}

impl LoggerHandle for MemoryLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn method(&self, severity: Severity) -> Option<LogMethod> {
        self.methods.iter().find(|m| m.severity() == severity).cloned()
    }
}

/// Provider whose loggers all record into one buffer, in call order.
#[derive(Default)]
pub struct MemoryLoggerProvider {
    records: Records,
    loggers: Mutex<HashMap<String, Arc<MemoryLogger>>>,
}

impl MemoryLoggerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Records of the logger called `name`.
    pub fn records_for(&self, name: &str) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.logger == name)
            .collect()
    }

    pub fn clear(&self) {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl LoggerProvider for MemoryLoggerProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LoggerHandle>, ProviderError> {
        let name = resolve_logger_name(name)?;
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        let logger = loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryLogger::new(name, self.records.clone())))
            .clone();
        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logged_domain::LogArgs;

    #[test]
    fn test_records_calls_in_order() {
        let provider = MemoryLoggerProvider::new();
        let a = provider.get_logger("a").unwrap();
        let b = provider.get_logger("b").unwrap();

        a.method(Severity::Info).unwrap().call("first", &LogArgs::NONE);
        b.method(Severity::Error).unwrap().call("second {}", &LogArgs::new().arg(2));

        let records = provider.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].logger, "a");
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[1].message, "second 2");
        assert_eq!(provider.records_for("b").len(), 1);
    }

    #[test]
    fn test_same_name_same_handle() {
        let provider = MemoryLoggerProvider::new();
        let a = provider.get_logger("x").unwrap();
        let b = provider.get_logger("x").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_clear_discards_records() {
        let provider = MemoryLoggerProvider::new();
        let logger = provider.get_logger("x").unwrap();
        logger.method(Severity::Debug).unwrap().call("gone", &LogArgs::NONE);
        provider.clear();
        assert!(provider.records().is_empty());
    }
}

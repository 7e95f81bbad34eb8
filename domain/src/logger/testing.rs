//! Recording logger used by the domain tests.

use super::handle::LoggerHandle;
use super::method::LogMethod;
use super::severity::Severity;
use std::sync::{Arc, Mutex};

/// Handle that records `"<name> <severity> <message>"` lines.
pub(crate) struct FakeLogger {
    name: String,
    lines: Arc<Mutex<Vec<String>>>,
    methods: Vec<LogMethod>,
}

impl FakeLogger {
    pub(crate) fn new(name: &str) -> Self {
        Self::without(name, &[])
    }

    /// A handle lacking the `missing` severity methods.
    pub(crate) fn without(name: &str, missing: &[Severity]) -> Self {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let methods = Severity::ALL
            .into_iter()
            .filter(|severity| !missing.contains(severity))
            .map(|severity| {
                let lines = lines.clone();
                let logger = name.to_string();
                LogMethod::new(severity, move |msg, args| {
                    lines
                        .lock()
                        .unwrap()
                        .push(format!("{} {} {}", logger, severity, args.render(msg)));
                })
            })
            .collect();
        Self {
            name: name.to_string(),
            lines,
            methods,
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LoggerHandle for FakeLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn method(&self, severity: Severity) -> Option<LogMethod> {
        self.methods.iter().find(|m| m.severity() == severity).cloned()
    }
}

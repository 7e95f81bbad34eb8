//! Bound severity method

use super::args::LogArgs;
use super::severity::Severity;
use std::fmt;
use std::sync::Arc;

type LogFn = dyn Fn(&str, &LogArgs) + Send + Sync;

/// A callable severity method of a logger handle.
///
/// Cloning is cheap and keeps the identity of the underlying callable, so a
/// method copied onto a target compares equal to the handle's own method.
#[derive(Clone)]
pub struct LogMethod {
    severity: Severity,
    func: Arc<LogFn>,
}

impl LogMethod {
    pub fn new<F>(severity: Severity, func: F) -> Self
    where
        F: Fn(&str, &LogArgs) + Send + Sync + 'static,
    {
        Self {
            severity,
            func: Arc::new(func),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Method name, identical to the severity name.
    pub fn name(&self) -> &'static str {
        self.severity.as_str()
    }

    pub fn call(&self, message: &str, args: &LogArgs) {
        (self.func)(message, args)
    }

    /// Whether both methods share the same underlying callable.
    pub fn same_as(&self, other: &LogMethod) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for LogMethod {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity && self.same_as(other)
    }
}

impl Eq for LogMethod {}

impl fmt::Debug for LogMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogMethod")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_call_forwards_message_and_args() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let method = LogMethod::new(Severity::Info, move |msg, args| {
            sink.lock().unwrap().push(args.render(msg));
        });

        method.call("hello {}", &LogArgs::new().arg("world"));

        assert_eq!(*seen.lock().unwrap(), vec!["hello world".to_string()]);
        assert_eq!(method.name(), "info");
    }

    #[test]
    fn test_clone_is_same_callable() {
        let method = LogMethod::new(Severity::Debug, |_, _| {});
        let copy = method.clone();
        assert!(method.same_as(&copy));
        assert_eq!(method, copy);
    }

    #[test]
    fn test_distinct_callables_are_not_equal() {
        let a = LogMethod::new(Severity::Debug, |_, _| {});
        let b = LogMethod::new(Severity::Debug, |_, _| {});
        assert!(!a.same_as(&b));
        assert_ne!(a, b);
    }
}

//! `tracing`-backed logger handles.
//!
//! [`TracingLoggerProvider`] is a named-logger registry: each name maps to
//! one [`TracingLogger`] whose severity methods emit `tracing` events under
//! the [`LOG_TARGET`] target, carrying the logger name and severity as
//! fields. Severities map onto `tracing` levels as follows:
//!
//! | Severity | Level |
//! |----------|-------|
//! | debug | DEBUG |
//! | info | INFO |
//! | warning | WARN |
//! | error, critical, exception | ERROR |

use logged_application::{LoggerProvider, ProviderError, resolve_logger_name};
use logged_domain::{LogArgs, LogMethod, LoggerHandle, Severity};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{debug, error, info, warn};

/// Target of every event emitted through a [`TracingLogger`].
pub const LOG_TARGET: &str = "logged";

/// Logger handle that forwards to the current `tracing` subscriber.
pub struct TracingLogger {
    name: Arc<str>,
    methods: [LogMethod; 6],
}

impl TracingLogger {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name: Arc<str> = name.into();
        let methods = Severity::ALL.map(|severity| {
            let logger = name.clone();
            LogMethod::new(severity, move |message, args| {
                emit(&logger, severity, message, args)
            })
        });
        Self { name, methods }
    }
}

impl LoggerHandle for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn method(&self, severity: Severity) -> Option<LogMethod> {
        self.methods.iter().find(|m| m.severity() == severity).cloned()
    }
}

fn emit(logger: &str, severity: Severity, message: &str, args: &LogArgs) {
    let message = args.render(message);
    let fields = args.render_fields();
    let fields = fields.as_deref();
    let name = severity.as_str();

    match severity {
        Severity::Debug => {
            debug!(target: LOG_TARGET, logger, severity = name, fields, "{}", message)
        }
        Severity::Info => info!(target: LOG_TARGET, logger, severity = name, fields, "{}", message),
        Severity::Warning => {
            warn!(target: LOG_TARGET, logger, severity = name, fields, "{}", message)
        }
        Severity::Error | Severity::Critical | Severity::Exception => {
            error!(target: LOG_TARGET, logger, severity = name, fields, "{}", message)
        }
    }
}

/// Registry handing out one [`TracingLogger`] per name.
#[derive(Default)]
pub struct TracingLoggerProvider {
    loggers: Mutex<HashMap<String, Arc<TracingLogger>>>,
}

impl TracingLoggerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry.
    pub fn global() -> &'static TracingLoggerProvider {
        static GLOBAL: OnceLock<TracingLoggerProvider> = OnceLock::new();
        GLOBAL.get_or_init(TracingLoggerProvider::new)
    }

    /// Number of loggers created so far.
    pub fn len(&self) -> usize {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LoggerProvider for TracingLoggerProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LoggerHandle>, ProviderError> {
        let name = resolve_logger_name(name)?;
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        let logger = loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(TracingLogger::new(name)))
            .clone();
        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory writer shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_info_output_contains_message_severity_and_name() {
        let logger = TracingLogger::new("Wittgenstein");
        let output = capture(|| {
            logger
                .method(Severity::Info)
                .unwrap()
                .call("Hello", &LogArgs::NONE)
        });

        assert!(output.contains("Hello"));
        assert!(output.contains("INFO"));
        assert!(output.contains("severity=\"info\""));
        assert!(output.contains("Wittgenstein"));
    }

    #[test]
    fn test_severities_map_to_levels() {
        let logger = TracingLogger::new("svc");
        let output = capture(|| {
            for severity in Severity::ALL {
                logger.method(severity).unwrap().call(severity.as_str(), &LogArgs::NONE);
            }
        });

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("DEBUG"));
        assert!(lines[1].contains("INFO"));
        assert!(lines[2].contains("WARN"));
        for line in &lines[3..] {
            assert!(line.contains("ERROR"));
        }
        assert!(lines[4].contains("severity=\"critical\""));
        assert!(lines[5].contains("severity=\"exception\""));
    }

    #[test]
    fn test_args_are_rendered_and_fields_recorded() {
        let logger = TracingLogger::new("db");
        let output = capture(|| {
            logger.method(Severity::Warning).unwrap().call(
                "slow query took {}ms",
                &LogArgs::new().arg(1200).field("table", "users"),
            )
        });

        assert!(output.contains("slow query took 1200ms"));
        assert!(output.contains("table=users"));
    }

    #[test]
    fn test_registry_returns_same_handle_per_name() {
        let provider = TracingLoggerProvider::new();
        let a = provider.get_logger("Worker").unwrap();
        let b = provider.get_logger("Worker").unwrap();
        let c = provider.get_logger("Other").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(provider.len(), 2);
    }

    #[test]
    fn test_registry_root_and_invalid_names() {
        let provider = TracingLoggerProvider::new();
        assert_eq!(provider.get_logger("").unwrap().name(), "root");
        assert!(matches!(
            provider.get_logger("a\tb"),
            Err(ProviderError::InvalidName(_))
        ));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = TracingLoggerProvider::global().get_logger("global-test").unwrap();
        let b = TracingLoggerProvider::global().get_logger("global-test").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}

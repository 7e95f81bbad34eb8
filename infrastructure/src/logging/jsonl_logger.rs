//! JSONL file writer for log records.
//!
//! Each call on a [`JsonlLogger`] is rendered into a [`LogRecord`] and
//! written as a single JSON line with a `timestamp`, appended to the file via
//! a buffered writer shared by every logger of the provider.

use logged_application::{LoggerProvider, ProviderError, resolve_logger_name};
use logged_domain::{LogArgs, LogMethod, LogRecord, LoggerHandle, Severity};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// Buffered JSONL file shared by all loggers of one provider.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
struct JsonlSink {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSink {
    fn write(&self, logger: &str, severity: Severity, message: &str, args: &LogArgs) {
        let record = LogRecord::new(logger, severity, message, args);
        let Ok(serde_json::Value::Object(mut map)) = serde_json::to_value(&record) else {
            return;
        };
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        map.insert("timestamp".to_string(), serde_json::Value::String(timestamp));

        let Ok(line) = serde_json::to_string(&map) else {
            return;
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}", line);
        // JSONL is append-only; flush each line for crash safety
        let _ = writer.flush();
    }
}

impl Drop for JsonlSink {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}

/// Logger handle writing one JSON object per call.
pub struct JsonlLogger {
    name: String,
    methods: [LogMethod; 6],
}

impl JsonlLogger {
    fn new(name: &str, sink: Arc<JsonlSink>) -> Self {
        let methods = Severity::ALL.map(|severity| {
            let sink = sink.clone();
            let logger = name.to_string();
            LogMethod::new(severity, move |message, args| {
                sink.write(&logger, severity, message, args)
            })
        });
        Self {
            name: name.to_string(),
            methods,
        }
    }
}

impl LoggerHandle for JsonlLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn method(&self, severity: Severity) -> Option<LogMethod> {
        self.methods.iter().find(|m| m.severity() == severity).cloned()
    }
}

/// Provider of [`JsonlLogger`]s writing into one file.
pub struct JsonlLoggerProvider {
    sink: Arc<JsonlSink>,
    loggers: Mutex<HashMap<String, Arc<JsonlLogger>>>,
    path: PathBuf,
}

impl JsonlLoggerProvider {
    /// Create a provider writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            sink: Arc::new(JsonlSink {
                writer: Mutex::new(BufWriter::new(file)),
            }),
            loggers: Mutex::new(HashMap::new()),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LoggerProvider for JsonlLoggerProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LoggerHandle>, ProviderError> {
        let name = resolve_logger_name(name)?;
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        let logger = loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(JsonlLogger::new(name, self.sink.clone())))
            .clone();
        Ok(logger)
    }
}

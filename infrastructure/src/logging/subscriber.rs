//! `tracing` subscriber setup.
//!
//! Installs the global subscriber that [`TracingLogger`](super::TracingLogger)
//! events end up in: an `EnvFilter`, a stderr `fmt` layer and, when
//! configured, a second `fmt` layer writing to a file.

use crate::config::{FileLogFormat, FileLoggingConfig};
use std::path::Path;
use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that can occur while installing the subscriber
#[derive(Error, Debug)]
pub enum LoggingInitError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Invalid log file path: {0}")]
    InvalidFilePath(String),

    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured directive.
pub fn env_filter(config: &FileLoggingConfig) -> Result<EnvFilter, LoggingInitError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.level)?),
    }
}

/// `fmt` layer honouring the configured format and toggles.
fn fmt_layer<S, W>(
    config: &FileLoggingConfig,
    writer: W,
    ansi: bool,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(config.with_target);

    match config.format {
        FileLogFormat::Full => layer.boxed(),
        FileLogFormat::Compact => layer.compact().boxed(),
    }
}

/// Install the global subscriber described by `config`.
///
/// Returns the guard of the file writer when `config.file` is set; logs
/// written to the file are flushed when the guard is dropped, so keep it
/// alive for the lifetime of the program.
pub fn init_tracing(config: &FileLoggingConfig) -> Result<Option<WorkerGuard>, LoggingInitError> {
    let filter = env_filter(config)?;

    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            // No ANSI colors in log files
            (Some(fmt_layer(config, writer, false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config, std::io::stderr, config.ansi))
        .with(file_layer)
        .try_init()?;

    tracing::debug!(
        level = %config.level,
        file = ?config.file,
        "Logging initialized"
    );

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggingInitError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingInitError::InvalidFilePath(path.display().to_string()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

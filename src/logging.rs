//! Tracing subscriber setup for the CLI

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt};

/// Keeps the background log writer alive; drop it last
pub struct LoggingGuard {
    _guard: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. With `log_file` set, events go through a
/// non-blocking writer into that file, which leaves the terminal free for the TUI; otherwise
/// they go to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        // Ignore error if a global subscriber is already set (e.g., when running in tests)
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(LoggingGuard { _guard: None });
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file at {}", path.display()))?;
    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(LoggingGuard {
        _guard: Some(guard),
    })
}

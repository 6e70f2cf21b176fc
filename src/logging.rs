//! Tracing setup with a runtime-adjustable level filter.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::config::LogLevel;

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Local wall-clock timestamps with millisecond precision.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Directory for daily log files.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("flagkit").join("logs"))
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. When `log_to_file` is set, the
/// returned guard must be kept alive for buffered lines to be flushed.
/// Calling this twice is harmless; the second call only logs a debug line.
pub fn init(level: LogLevel, log_to_file: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let (filter, handle) = reload::Layer::new(filter);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime)
        .with_target(false);

    let mut guard = None;
    let file_layer = if log_to_file {
        log_dir().map(|dir| {
            let appender = tracing_appender::rolling::daily(dir, "flagkit.log");
            let (writer, worker_guard) = tracing_appender::non_blocking(appender);
            guard = Some(worker_guard);
            fmt::layer()
                .with_writer(writer)
                .with_timer(LocalTime)
                .with_ansi(false)
        })
    } else {
        None
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    match installed {
        Ok(()) => {
            let _ = FILTER_HANDLE.set(handle);
            tracing::debug!(level = level.as_filter(), log_to_file, "Logging initialized");
        }
        Err(e) => {
            tracing::debug!(error = %e, "Subscriber already installed");
        }
    }

    guard
}

/// Change the active level without restarting.
pub fn set_verbosity(level: LogLevel) {
    let Some(handle) = FILTER_HANDLE.get() else {
        return;
    };
    if let Err(e) = handle.modify(|filter| *filter = EnvFilter::new(level.as_filter())) {
        tracing::warn!(error = %e, "Failed to update log level");
    }
}

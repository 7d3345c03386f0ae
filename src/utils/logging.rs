//! Logging initialization for the embedding shell

use once_cell::sync::OnceCell;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer alive for the life of the process.
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Install the global tracing subscriber, writing daily-rolled log files
/// under `log_dir`. Safe to call more than once; later calls are ignored.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logging(log_dir: &Path) {
    let file_appender = tracing_appender::rolling::daily(log_dir, "thinkit.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    let _ = LOG_GUARD.set(guard);
}

//! Tracing setup.
//!
//! Filtering comes from `TURNLOG_LOG`, falling back to `RUST_LOG`, then to
//! `warn`. With `TURNLOG_LOG_FILE=<dir>` logs go to a daily-rotated JSON
//! file in that directory; this is the only way to capture debug logs while
//! the viewer owns the terminal. Otherwise logs go to stderr.

use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// Returns a guard that must stay alive for the process lifetime when file
/// logging is active, so buffered lines are flushed on exit.
pub fn init() -> Option<WorkerGuard> {
    let filter = env::var("TURNLOG_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    if let Ok(dir) = env::var("TURNLOG_LOG_FILE") {
        let appender = tracing_appender::rolling::daily(dir, "turnlog.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        None
    }
}

//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with default settings
pub fn init_logger() -> Option<WorkerGuard> {
    init_logger_with_file(None, false, None)
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. When `log_dir` exists, logs
/// go to a daily rolling file `hotel-server.YYYY-MM-DD` and the returned
/// guard must be held until shutdown to flush them.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.map(Path::new).filter(|p| p.is_dir()) {
        let file_appender = tracing_appender::rolling::daily(dir, "hotel-server");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        let builder = builder.with_writer(writer).with_ansi(false);
        let result = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if let Err(e) = result {
            eprintln!("Logger already initialized: {}", e);
        }
        return Some(guard);
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
    None
}

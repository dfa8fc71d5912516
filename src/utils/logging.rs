//! Logging system initialization
//!
//! Sets up tracing-based logging to `eyefilter.log` in the home directory and
//! rotates the previous session logs on startup, keeping nine of them.

use crate::error::{EyeFilterError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "eyefilter.log";

/// Maximum number of historical log files to keep (eyefilter.log.1 through .9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system writing into `log_dir`
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("eyefilter")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| EyeFilterError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| EyeFilterError::ConfigError(Box::new(e)))?;

    tracing::info!("eyefilter v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `<log>.N` to `<log>.N+1` (dropping the oldest) and move `<log>` to `<log>.1`
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| EyeFilterError::ConfigError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| EyeFilterError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();
    let numbered = |i: u8| log_dir.join(format!("{log_name}.{i}"));

    let oldest = numbered(MAX_LOG_FILES);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current = numbered(i);
        if current.exists() {
            std::fs::rename(&current, numbered(i + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;

    Ok(())
}

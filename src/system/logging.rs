//! Logging system initialization
//!
//! Sets up `tracing` according to the `[logging]` section. TUI mode owns the
//! terminal, so console output is swallowed there unless a log file is set.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, ScissorsError};

/// Where console logs go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI: human-facing output goes to stdout, logs to stderr
    Stderr,
    /// TUI: drop console logs
    Silent,
}

fn build_writer(
    config: &LoggingConfig,
    target: LogTarget,
) -> Result<Box<dyn Write + Send + Sync>> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let Some(log_file) = log_file else {
        return Ok(match target {
            LogTarget::Stderr => Box::new(std::io::stderr()),
            LogTarget::Silent => Box::new(std::io::sink()),
        });
    };

    if config.enable_rotation {
        let path = Path::new(log_file);
        let dir = path.parent().unwrap_or(Path::new("."));
        let prefix = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("scissors.log")
            .trim_end_matches(".log")
            .to_string();
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .map_err(|e| {
                ScissorsError::file_operation(format!("Failed to create log appender: {}", e))
            })?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                ScissorsError::file_operation(format!(
                    "Failed to open log file {}: {}",
                    log_file, e
                ))
            })?;
        Ok(Box::new(file))
    }
}

/// Initialize logging
///
/// The returned `WorkerGuard` must be kept alive for the whole program so
/// buffered lines are flushed on exit. Call once; a second call returns a
/// `Config` error.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Result<WorkerGuard> {
    let writer = build_writer(config, target)?;
    let to_console = config.file.as_deref().is_none_or(str::is_empty);

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.clone()));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .with_ansi(to_console && target == LogTarget::Stderr);

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| ScissorsError::config(format!("Failed to init logging: {}", e)))?;

    Ok(guard)
}

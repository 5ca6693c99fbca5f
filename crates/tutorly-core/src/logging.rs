//! File-based tracing setup.
//!
//! The TUI owns stdout/stderr while running, so log output always goes to a
//! file. `TUTORLY_LOG` overrides the configured filter.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable holding a filter directive that wins over config.
pub const LOG_ENV: &str = "TUTORLY_LOG";

/// Installs the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let path = config.effective_file();
    let dir = path
        .parent()
        .context("Log file path has no parent directory")?;
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.filter)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn build_filter(env_directive: Option<&str>, configured: &str) -> Result<EnvFilter> {
    let directive = env_directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(configured);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{directive}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("debug"), "info").unwrap();
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn test_blank_env_directive_falls_back_to_config() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert!(filter.to_string().contains("warn"));
    }

    #[test]
    fn test_invalid_directive_is_error() {
        assert!(build_filter(None, "tutorly=notalevel").is_err());
    }
}

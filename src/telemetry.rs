use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, TelemetryConfig};

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "hemingway=info";

/// Initialize logging
///
/// Logs go to stderr unless telemetry is enabled, in which case they are
/// appended to the configured log file. `RUST_LOG` overrides the level.
///
/// # Errors
/// Returns error if the log file or its directory cannot be created
pub fn init(config: &TelemetryConfig) -> Result<()> {
    let filter = env_filter();

    if !config.enabled {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    let log_path = log_file_path(config)?;

    // Create parent directory if needed
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_target(false)
        .with_ansi(false)
        .init();

    tracing::info!("telemetry initialized: {}", log_path.display());

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_file_path(config: &TelemetryConfig) -> Result<PathBuf> {
    Config::expand_path(&config.log_path).context("failed to resolve log path")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_with_tilde() {
        let home = std::env::var("HOME").expect("HOME not set");
        let config = TelemetryConfig {
            enabled: true,
            log_path: "~/logs/hemingway.log".to_owned(),
        };
        assert_eq!(
            log_file_path(&config).unwrap(),
            PathBuf::from(home).join("logs/hemingway.log")
        );
    }

    #[test]
    fn test_log_file_path_absolute() {
        let config = TelemetryConfig {
            enabled: true,
            log_path: "/var/log/hemingway.log".to_owned(),
        };
        assert_eq!(
            log_file_path(&config).unwrap(),
            PathBuf::from("/var/log/hemingway.log")
        );
    }
}

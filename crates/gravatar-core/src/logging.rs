//! Logging init: append-only file under the XDG state dir.
//!
//! The CLI falls back to stderr when [`init_logging`] fails.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,gravatar=debug";

/// Filter from `RUST_LOG`, else `info,gravatar=debug`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log file location, `$XDG_STATE_HOME/gravatar/gravatar.log`. Creates the
/// parent directory.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gravatar")?;
    xdg_dirs
        .place_state_file("gravatar.log")
        .context("create log dir")
}

/// Install a subscriber writing to [`log_path`]. Returns the path on success.
pub fn init_logging() -> Result<PathBuf> {
    let log_file_path = log_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("open log file: {}", log_file_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!("gravatar logging initialized at {}", log_file_path.display());
    Ok(log_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_under_xdg_state_home() {
        let state = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_STATE_HOME", state.path());

        let path = log_path().unwrap();
        assert_eq!(path, state.path().join("gravatar").join("gravatar.log"));
        assert!(path.parent().unwrap().is_dir());
    }
}

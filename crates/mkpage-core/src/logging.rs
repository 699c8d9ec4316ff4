//! Logging init: file under the XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mkpage=debug"))
}

fn open_log_file() -> Result<fs::File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mkpage")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("mkpage.log"))?;
    Ok(file)
}

/// Initialize structured logging to `~/.local/state/mkpage/mkpage.log`. If
/// the log file cannot be opened (state dir unwritable), log to stderr
/// instead so the CLI still runs.
pub fn init() {
    match open_log_file() {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable, logging to stderr: {err:#}");
        }
    }
}

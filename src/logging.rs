//! File-based tracing setup.
//!
//! The TUI owns stdout, so diagnostics go to a log file under the platform
//! data directory. Filtering follows `RUST_LOG` when set, `info` otherwise.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::{fmt, EnvFilter};

/// Path of the log file: `{data_local_dir}/nexora/nexora.log`, falling
/// back to the working directory.
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nexora")
        .join("nexora.log")
}

/// Install the global tracing subscriber writing to the log file.
pub fn init() -> color_eyre::Result<()> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}

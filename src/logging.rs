use crate::storage::LocalStorage;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Sends `log` output to `ticklist.log` so it never mixes with the menu or window.
/// `RUST_LOG` controls the filter, defaulting to `info`.
pub fn init() -> Result<PathBuf> {
    let log_dir = LocalStorage::project_dirs()
        .map(|proj| proj.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("ticklist.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .try_init()
        .context("Logger already initialized")?;

    log::info!("Logging initialized, writing to: {}", log_file.display());
    Ok(log_file)
}

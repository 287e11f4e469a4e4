//! Path helpers for the stepview data directory.

use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set a custom data directory. Call once, early in `main()`, before any
/// other path function is used. `None` keeps the default `~/.stepview`.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path).is_err() {
        tracing::debug!("data directory already initialized");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".stepview"))
        .unwrap_or_else(|| PathBuf::from(".stepview"))
}

/// Base data directory (`~/.stepview` unless overridden).
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Logs directory (`~/.stepview/logs`).
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Log file path (`~/.stepview/logs/stepview.log`).
pub fn log_file_path() -> PathBuf {
    logs_dir().join("stepview.log")
}

/// Configuration file path (`~/.stepview/config.toml`).
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

mod config;

pub use config::{AnalyticsConfig, Config, HistoryConfig, ListConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/apologist[-dev]/` based on APOLOGIST_ENV.
///
/// Set APOLOGIST_ENV=dev to use the development data directory, or
/// APOLOGIST_DATA_DIR to use an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("APOLOGIST_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("APOLOGIST_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("apologist-dev")
            } else {
                base_dir.join("apologist")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

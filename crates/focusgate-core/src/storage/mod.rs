//! Persistence for the focus configuration and classifier credential.

mod api_key;
mod file;
mod store;

pub use api_key::ApiKeyStore;
pub use file::FileStore;
pub use store::{CredentialStore, FocusStateStore, MemoryStore};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/focusgate[-dev]/` based on FOCUSGATE_ENV.
///
/// Set FOCUSGATE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSGATE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusgate-dev")
    } else {
        base_dir.join("focusgate")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

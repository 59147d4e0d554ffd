//! TOML-backed focus state store.
//!
//! State lives at `~/.config/focusgate/state.toml`. A missing file is the
//! "nothing configured" state, not an error.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::data_dir;
use super::store::FocusStateStore;
use crate::error::StoreError;
use crate::state::FocusState;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under the default config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self {
            path: data_dir()?.join("state.toml"),
        })
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FocusStateStore for FileStore {
    async fn load(&self) -> Result<Option<FocusState>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let state = toml::from_str(&content).map_err(|e| StoreError::LoadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                })?;
                Ok(Some(state))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, state: &FocusState) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(state).map_err(|e| StoreError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

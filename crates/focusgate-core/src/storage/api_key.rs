//! OS keyring credential store.

use async_trait::async_trait;

use super::store::CredentialStore;
use crate::error::StoreError;

const SERVICE: &str = "focusgate";
const API_KEY_ENTRY: &str = "classifier_api_key";

/// Classifier API key kept in the OS keyring.
pub struct ApiKeyStore {
    service: String,
}

impl ApiKeyStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE)
    }

    /// Use a separate keyring service name (tests avoid the real entry).
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, StoreError> {
        keyring::Entry::new(&self.service, API_KEY_ENTRY).map_err(StoreError::from)
    }
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for ApiKeyStore {
    async fn api_key(&self) -> Result<Option<String>, StoreError> {
        match self.entry()?.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        self.entry()?.set_password(key)?;
        Ok(())
    }

    async fn clear_api_key(&self) -> Result<(), StoreError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

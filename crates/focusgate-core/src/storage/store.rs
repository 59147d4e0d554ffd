//! Persistence contracts for the session controller.
//!
//! The controller never assumes synchronous completion: both stores are
//! async so implementations may be backed by anything from a local file to a
//! remote sync service. Concurrent writers are resolved last-write-wins; no
//! compare-and-swap is offered or expected.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::state::FocusState;

/// Persisted focus configuration store.
#[async_trait]
pub trait FocusStateStore: Send + Sync {
    async fn load(&self) -> Result<Option<FocusState>, StoreError>;
    async fn save(&self, state: &FocusState) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Classifier credential store. An absent credential is `None`, not an error.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn api_key(&self) -> Result<Option<String>, StoreError>;
    async fn set_api_key(&self, key: &str) -> Result<(), StoreError>;
    async fn clear_api_key(&self) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: FocusStateStore + ?Sized> FocusStateStore for Arc<T> {
    async fn load(&self) -> Result<Option<FocusState>, StoreError> {
        (**self).load().await
    }

    async fn save(&self, state: &FocusState) -> Result<(), StoreError> {
        (**self).save(state).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        (**self).clear().await
    }
}

#[async_trait]
impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    async fn api_key(&self) -> Result<Option<String>, StoreError> {
        (**self).api_key().await
    }

    async fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        (**self).set_api_key(key).await
    }

    async fn clear_api_key(&self) -> Result<(), StoreError> {
        (**self).clear_api_key().await
    }
}

/// In-process store implementing both contracts. Used by tests and by
/// embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<Option<FocusState>>,
    api_key: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FocusState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
            api_key: Mutex::new(None),
        }
    }

    pub fn set_api_key_sync(&self, key: &str) {
        *lock(&self.api_key) = Some(key.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl FocusStateStore for MemoryStore {
    async fn load(&self) -> Result<Option<FocusState>, StoreError> {
        Ok(lock(&self.state).clone())
    }

    async fn save(&self, state: &FocusState) -> Result<(), StoreError> {
        *lock(&self.state) = Some(state.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *lock(&self.state) = None;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn api_key(&self) -> Result<Option<String>, StoreError> {
        Ok(lock(&self.api_key).clone())
    }

    async fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        *lock(&self.api_key) = Some(key.to_string());
        Ok(())
    }

    async fn clear_api_key(&self) -> Result<(), StoreError> {
        *lock(&self.api_key) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Role, Strictness};

    #[tokio::test]
    async fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let state = FocusState::new("write thesis", Role::Researcher, Strictness::High);
        store.save(&state).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(state));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_store_credential_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.api_key().await.unwrap().is_none());

        store.set_api_key("secret").await.unwrap();
        assert_eq!(store.api_key().await.unwrap().as_deref(), Some("secret"));

        store.clear_api_key().await.unwrap();
        assert!(store.api_key().await.unwrap().is_none());
    }
}

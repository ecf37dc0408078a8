//! Thread-safe wrapper around [`CredentialStore`]

use super::mode::{CacheMode, OverwritePolicy};
use super::store::CredentialStore;
use super::tuple::CredentialTuple;
use crate::config::CacheConfig;
use crate::error::{handle_lock_poison, CacheError, Result};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::warn;

/// A [`CredentialStore`] behind a single lock
///
/// Each call takes the lock once, so the mode read and the map write of a
/// `put` can never interleave with a concurrent `set_temp_mode`. Clones share
/// the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedCredentialStore {
    pub(crate) inner: Arc<RwLock<CredentialStore>>,
}

impl SharedCredentialStore {
    /// Create an empty shared store in persistent mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared store using the configured mode and policy
    #[must_use]
    pub fn with_config(config: &CacheConfig) -> Self {
        Self::from_store(CredentialStore::with_config(config))
    }

    /// Wrap an existing store
    #[must_use]
    pub fn from_store(store: CredentialStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CredentialStore> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("Credential store lock poisoned, recovering for read");
            poisoned.into_inner()
        })
    }

    /// Look up a credential, returning the empty tuple on miss
    #[must_use]
    pub fn get(&self, key: &str) -> CredentialTuple {
        self.read().get(key)
    }

    /// Check if the active set holds `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.read().contains(key)
    }

    /// Current routing mode
    #[must_use]
    pub fn mode(&self) -> CacheMode {
        self.read().mode()
    }

    /// Number of entries in the active set
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the active set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Store a credential, replacing any existing entry
    pub fn put(&self, key: impl Into<String>, tuple: CredentialTuple) -> Result<()> {
        self.put_with_policy(key, tuple, OverwritePolicy::Overwrite)
            .map(|_| ())
    }

    /// Store a credential using the configured default policy
    pub fn put_default(&self, key: impl Into<String>, tuple: CredentialTuple) -> Result<bool> {
        let mut store = self.inner.write().map_err(insertion_failed)?;
        Ok(store.put_default(key, tuple))
    }

    /// Store a credential under an explicit overwrite policy
    pub fn put_with_policy(
        &self,
        key: impl Into<String>,
        tuple: CredentialTuple,
        policy: OverwritePolicy,
    ) -> Result<bool> {
        let mut store = self.inner.write().map_err(insertion_failed)?;
        Ok(store.put_with_policy(key, tuple, policy))
    }

    /// Delete a credential from the active set
    pub fn remove(&self, key: &str) -> Result<()> {
        self.inner.write().map_err(handle_lock_poison)?.remove(key);
        Ok(())
    }

    /// Route subsequent operations to the temporary (`true`) or persistent set
    pub fn set_temp_mode(&self, temp: bool) -> Result<()> {
        self.set_mode(CacheMode::from_temp(temp))
    }

    /// Route subsequent operations to the given set
    pub fn set_mode(&self, mode: CacheMode) -> Result<()> {
        self.inner.write().map_err(handle_lock_poison)?.set_mode(mode);
        Ok(())
    }

    /// Drop every temporary credential
    pub fn clear_temporary(&self) -> Result<()> {
        self.inner
            .write()
            .map_err(handle_lock_poison)?
            .clear_temporary();
        Ok(())
    }
}

fn insertion_failed<T>(e: PoisonError<T>) -> CacheError {
    CacheError::InsertionFailed(e.to_string())
}

//! Credential store implementation

use super::mode::{CacheMode, OverwritePolicy};
use super::tuple::CredentialTuple;
use crate::config::CacheConfig;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, info};

/// Build the conventional `server\share` cache key
///
/// The store never normalizes keys, so callers that mix this helper with
/// hand-built keys must agree on case and separators themselves.
#[must_use]
pub fn share_key(server: &str, share: &str) -> String {
    format!("{}\\{}", server, share)
}

/// In-memory credential cache with a persistent and a temporary set
///
/// Exactly one set is active at a time. `get`, `put` and `remove` only ever
/// touch the active set; switching modes never copies or clears anything.
///
/// # Example
///
/// ```
/// use credcache_core::{CredentialStore, CredentialTuple};
///
/// let mut store = CredentialStore::new();
/// store.put("server1\\share", CredentialTuple::new("alice", "CORP", "pw1"));
///
/// assert_eq!(store.get("server1\\share").username, "alice");
/// assert!(store.get("server2\\share").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CredentialStore {
    persistent: HashMap<String, CredentialTuple>,
    temporary: HashMap<String, CredentialTuple>,
    mode: CacheMode,
    default_policy: OverwritePolicy,
}

impl CredentialStore {
    /// Create an empty store in persistent mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store using the configured mode and write policy
    #[must_use]
    pub fn with_config(config: &CacheConfig) -> Self {
        let mode = CacheMode::from_temp(config.start_in_temp_mode);
        info!(mode = %mode, policy = ?config.default_policy, "Initializing credential store");

        Self {
            mode,
            default_policy: config.default_policy,
            ..Self::default()
        }
    }

    fn active(&self) -> &HashMap<String, CredentialTuple> {
        match self.mode {
            CacheMode::Persistent => &self.persistent,
            CacheMode::Temporary => &self.temporary,
        }
    }

    fn active_mut(&mut self) -> &mut HashMap<String, CredentialTuple> {
        match self.mode {
            CacheMode::Persistent => &mut self.persistent,
            CacheMode::Temporary => &mut self.temporary,
        }
    }

    /// Look up a credential, returning the empty tuple on miss
    #[must_use]
    pub fn get(&self, key: &str) -> CredentialTuple {
        match self.active().get(key) {
            Some(tuple) => {
                debug!(key = %key, mode = %self.mode, "Credential found");
                tuple.clone()
            }
            None => {
                debug!(key = %key, mode = %self.mode, "No credential found");
                CredentialTuple::empty()
            }
        }
    }

    /// Look up a credential without falling back to the empty tuple
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&CredentialTuple> {
        self.active().get(key)
    }

    /// Store a credential, replacing any existing entry
    pub fn put(&mut self, key: impl Into<String>, tuple: CredentialTuple) {
        self.put_with_policy(key, tuple, OverwritePolicy::Overwrite);
    }

    /// Store a credential using the store's configured default policy
    pub fn put_default(&mut self, key: impl Into<String>, tuple: CredentialTuple) -> bool {
        let policy = self.default_policy;
        self.put_with_policy(key, tuple, policy)
    }

    /// Store a credential under an explicit overwrite policy
    ///
    /// Returns `false` when `InsertIfAbsent` found an existing entry and the
    /// new tuple was discarded.
    pub fn put_with_policy(
        &mut self,
        key: impl Into<String>,
        tuple: CredentialTuple,
        policy: OverwritePolicy,
    ) -> bool {
        let key = key.into();
        let mode = self.mode;
        debug!(key = %key, mode = %mode, policy = ?policy, "Storing credential");

        match policy {
            OverwritePolicy::Overwrite => {
                self.active_mut().insert(key, tuple);
                true
            }
            OverwritePolicy::InsertIfAbsent => match self.active_mut().entry(key) {
                Entry::Occupied(entry) => {
                    debug!(key = %entry.key(), mode = %mode, "Credential already present, keeping existing");
                    false
                }
                Entry::Vacant(entry) => {
                    entry.insert(tuple);
                    true
                }
            },
        }
    }

    /// Delete a credential from the active set; absent keys are ignored
    pub fn remove(&mut self, key: &str) {
        if self.active_mut().remove(key).is_some() {
            debug!(key = %key, mode = %self.mode, "Removed credential");
        }
    }

    /// Route subsequent operations to the temporary (`true`) or persistent set
    pub fn set_temp_mode(&mut self, temp: bool) {
        self.set_mode(CacheMode::from_temp(temp));
    }

    /// Route subsequent operations to the given set
    pub fn set_mode(&mut self, mode: CacheMode) {
        if self.mode != mode {
            info!(from = %self.mode, to = %mode, "Switching credential cache mode");
        }
        self.mode = mode;
    }

    /// Current routing mode
    #[must_use]
    pub fn mode(&self) -> CacheMode {
        self.mode
    }

    /// Whether operations currently target the temporary set
    #[must_use]
    pub fn is_temp_mode(&self) -> bool {
        self.mode.is_temporary()
    }

    /// Policy used by [`put_default`](Self::put_default)
    #[must_use]
    pub fn default_policy(&self) -> OverwritePolicy {
        self.default_policy
    }

    /// Check if the active set holds `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.active().contains_key(key)
    }

    /// Number of entries in the active set
    #[must_use]
    pub fn len(&self) -> usize {
        self.active().len()
    }

    /// Whether the active set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// Drop every temporary credential, whichever mode is active
    pub fn clear_temporary(&mut self) {
        let count = self.temporary.len();
        self.temporary.clear();
        info!(count, "Cleared temporary credentials");
    }
}

use crate::cache::{CredentialTuple, OverwritePolicy, SharedCredentialStore};
use crate::error::Result;

/// Write side of a credential cache
///
/// Implementations must apply each call atomically with respect to the
/// current mode.
pub trait CredentialCache: Send + Sync {
    /// Store a credential; returns whether it was written
    fn put_credential(
        &self,
        key: &str,
        tuple: CredentialTuple,
        policy: OverwritePolicy,
    ) -> Result<bool>;

    /// Remove a credential from the active set
    fn remove_credential(&self, key: &str) -> Result<()>;

    /// Switch between the temporary and persistent sets
    fn set_temp_mode(&self, temp: bool) -> Result<()>;

    /// Drop every temporary credential
    fn clear_temporary(&self) -> Result<()>;
}

impl CredentialCache for SharedCredentialStore {
    fn put_credential(
        &self,
        key: &str,
        tuple: CredentialTuple,
        policy: OverwritePolicy,
    ) -> Result<bool> {
        self.put_with_policy(key, tuple, policy)
    }

    fn remove_credential(&self, key: &str) -> Result<()> {
        self.remove(key)
    }

    fn set_temp_mode(&self, temp: bool) -> Result<()> {
        SharedCredentialStore::set_temp_mode(self, temp)
    }

    fn clear_temporary(&self) -> Result<()> {
        SharedCredentialStore::clear_temporary(self)
    }
}

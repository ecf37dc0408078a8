//! Error types for credcache-core
//!
//! The bare [`CredentialStore`](crate::CredentialStore) never fails. These
//! errors come from the wrappers that add locking, queuing and configuration.

use thiserror::Error;

/// Cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// A write could not be applied to the backing store
    #[error("Insertion failed: {0}")]
    InsertionFailed(String),

    /// The store lock was poisoned by a panicking writer
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    /// The client worker has shut down
    #[error("Credential cache client closed")]
    ClientClosed,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Handle RwLock poison errors consistently
pub fn handle_lock_poison<T>(e: std::sync::PoisonError<T>) -> CacheError {
    CacheError::LockPoisoned(e.to_string())
}

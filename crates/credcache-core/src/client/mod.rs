//! Client - queued writes into a credential cache
//!
//! Session code often learns credentials on one task and reads them on
//! another. [`CredentialCacheClient`] puts every write on a bounded queue so a
//! single worker applies them in order to any [`CredentialCache`].

/// Command and worker implementation.
mod worker;
/// Client handle implementation.
pub mod handle;
/// Cache trait implemented by stores the worker can drive.
pub mod traits;

pub use handle::CredentialCacheClient;
pub use traits::CredentialCache;

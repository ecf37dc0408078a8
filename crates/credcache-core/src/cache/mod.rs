//! Credential Cache - persistent and temporary credential sets
//!
//! A [`CredentialStore`] maps opaque keys (usually `server\share`) to
//! [`CredentialTuple`]s. It keeps two independent sets and a [`CacheMode`]
//! that decides which one `get`, `put` and `remove` act on:
//!
//! - **Persistent**: credentials the user chose to keep for the session
//! - **Temporary**: credentials that can be dropped as a group, e.g. on logout
//!
//! ## Security Features
//!
//! - **SecureString**: secrets sit in `zeroize::Zeroizing` and are wiped on drop
//! - **Debug Safety**: secrets are redacted in Debug output and never logged

mod mode;
mod secure_string;
mod shared;
mod store;
mod tuple;


pub use mode::{CacheMode, OverwritePolicy};
pub use secure_string::SecureString;
pub use shared::SharedCredentialStore;
pub use store::{share_key, CredentialStore};
pub use tuple::CredentialTuple;

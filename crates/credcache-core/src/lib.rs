//! Credcache Core - In-memory credential cache
//!
//! This crate holds the credentials a file-share client needs to reach its
//! servers, including:
//! - Cache: persistent and temporary credential sets with mode routing
//! - Client: queued asynchronous writer for session code
//! - Config: TOML and environment configuration
//! - Logging: tracing subscriber setup for host applications
//!
//! Nothing here touches the disk except reading configuration. Credentials
//! live until they are removed or the process ends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use cache::{
    share_key, CacheMode, CredentialStore, CredentialTuple, OverwritePolicy, SecureString,
    SharedCredentialStore,
};
pub use client::{CredentialCache, CredentialCacheClient};
pub use config::CacheConfig;
pub use error::{CacheError, Result};

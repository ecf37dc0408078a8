use super::traits::CredentialCache;
use super::worker::{self, CacheCommand};
use crate::cache::{CredentialTuple, OverwritePolicy};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Handle for queuing writes to a credential cache worker.
///
/// Clones share one queue. The worker stops once every clone is dropped.
#[derive(Debug, Clone)]
pub struct CredentialCacheClient {
    tx: mpsc::Sender<CacheCommand>,
}

impl CredentialCacheClient {
    /// Spawn a worker on the current tokio runtime that owns `cache`.
    pub fn spawn<C>(cache: C, capacity: usize) -> (Self, JoinHandle<()>)
    where
        C: CredentialCache + 'static,
    {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let handle = tokio::spawn(worker::run(cache, rx));
        (Self { tx }, handle)
    }

    /// Spawn a worker using the configured queue capacity.
    pub fn spawn_with_config<C>(cache: C, config: &CacheConfig) -> (Self, JoinHandle<()>)
    where
        C: CredentialCache + 'static,
    {
        Self::spawn(cache, config.client_queue_capacity)
    }

    async fn send(&self, command: CacheCommand) -> Result<()> {
        self.tx
            .send(command)
            .await
            .map_err(|_| CacheError::ClientClosed)
    }

    /// Queue a credential for a share URI.
    ///
    /// `overwrite = false` keeps any credential already cached for `uri`.
    pub async fn put_credential(
        &self,
        uri: &str,
        workgroup: &str,
        username: &str,
        password: &str,
        overwrite: bool,
    ) -> Result<()> {
        self.put(
            uri,
            CredentialTuple::new(username, workgroup, password),
            OverwritePolicy::from(overwrite),
        )
        .await
    }

    /// Queue a credential tuple with an explicit policy.
    pub async fn put(
        &self,
        key: impl Into<String>,
        tuple: CredentialTuple,
        policy: OverwritePolicy,
    ) -> Result<()> {
        self.send(CacheCommand::Put {
            key: key.into(),
            tuple,
            policy,
        })
        .await
    }

    /// Queue removal of the credential for `uri`.
    pub async fn remove_credential(&self, uri: &str) -> Result<()> {
        self.send(CacheCommand::Remove {
            key: uri.to_string(),
        })
        .await
    }

    /// Queue a mode switch.
    pub async fn set_temp_mode(&self, temp: bool) -> Result<()> {
        self.send(CacheCommand::SetTempMode(temp)).await
    }

    /// Queue discarding of all temporary credentials.
    pub async fn clear_temporary(&self) -> Result<()> {
        self.send(CacheCommand::ClearTemporary).await
    }

    /// Wait until every command queued before this call has been applied.
    pub async fn flush(&self) -> Result<()> {
        let (done_tx, done_rx) = oneshot::channel();
        self.send(CacheCommand::Flush(done_tx)).await?;
        done_rx.await.map_err(|_| CacheError::ClientClosed)
    }

    /// Whether the worker has stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

use super::traits::CredentialCache;
use crate::cache::{CredentialTuple, OverwritePolicy};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// A queued cache operation.
#[derive(Debug)]
pub(crate) enum CacheCommand {
    Put {
        key: String,
        tuple: CredentialTuple,
        policy: OverwritePolicy,
    },
    Remove {
        key: String,
    },
    SetTempMode(bool),
    ClearTemporary,
    /// Acknowledged once every earlier command has been applied.
    Flush(oneshot::Sender<()>),
}

/// Apply commands until every sender is dropped.
pub(crate) async fn run<C: CredentialCache>(cache: C, mut rx: mpsc::Receiver<CacheCommand>) {
    debug!("Credential cache worker started");
    while let Some(command) = rx.recv().await {
        apply(&cache, command);
    }
    debug!("Credential cache worker stopped");
}

fn apply<C: CredentialCache>(cache: &C, command: CacheCommand) {
    match command {
        CacheCommand::Put { key, tuple, policy } => {
            match cache.put_credential(&key, tuple, policy) {
                Ok(false) => debug!(key = %key, "Queued credential not stored, key present"),
                Ok(true) => {}
                Err(e) => warn!(key = %key, error = %e, "Failed to store queued credential"),
            }
        }
        CacheCommand::Remove { key } => {
            if let Err(e) = cache.remove_credential(&key) {
                warn!(key = %key, error = %e, "Failed to remove queued credential");
            }
        }
        CacheCommand::SetTempMode(temp) => {
            if let Err(e) = cache.set_temp_mode(temp) {
                warn!(temp, error = %e, "Failed to switch credential cache mode");
            }
        }
        CacheCommand::ClearTemporary => {
            if let Err(e) = cache.clear_temporary() {
                warn!(error = %e, "Failed to clear temporary credentials");
            }
        }
        CacheCommand::Flush(done) => {
            // Caller may have stopped waiting
            let _ = done.send(());
        }
    }
}

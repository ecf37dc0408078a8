//! End-to-end session flow through the public API

use credcache_core::{
    share_key, CacheConfig, CredentialCacheClient, CredentialStore, CredentialTuple,
    OverwritePolicy, SharedCredentialStore,
};

#[test]
fn test_share_lookup_scenario() {
    let mut store = CredentialStore::new();
    let key = share_key("server1", "share");
    store.put(key.as_str(), CredentialTuple::new("alice", "CORP", "pw1"));

    let found = store.get("server1\\share");
    assert_eq!(found, CredentialTuple::new("alice", "CORP", "pw1"));
    assert_eq!(store.get(&share_key("server2", "share")), CredentialTuple::empty());
}

#[test]
fn test_saved_shares_then_guest_session() {
    let mut store = CredentialStore::new();

    // Saved shares are loaded without clobbering anything entered earlier
    store.put("smb://nas/media", CredentialTuple::new("alice", "HOME", "typed"));
    for (uri, user) in [("smb://nas/media", "saved"), ("smb://nas/backup", "saved")] {
        store.put_with_policy(
            uri,
            CredentialTuple::new(user, "HOME", "pw"),
            OverwritePolicy::InsertIfAbsent,
        );
    }
    assert_eq!(store.get("smb://nas/media").username, "alice");
    assert_eq!(store.get("smb://nas/backup").username, "saved");

    // Trying a share with throwaway credentials
    store.set_temp_mode(true);
    store.put("smb://nas/media", CredentialTuple::new("guest", "", ""));
    assert_eq!(store.get("smb://nas/media").username, "guest");

    store.set_temp_mode(false);
    store.clear_temporary();
    assert_eq!(store.get("smb://nas/media").username, "alice");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_client_and_readers_share_store() {
    let config = CacheConfig::from_toml_str("start_in_temp_mode = false\nclient_queue_capacity = 4")
        .unwrap();
    let store = SharedCredentialStore::with_config(&config);
    let (client, worker) = CredentialCacheClient::spawn_with_config(store.clone(), &config);

    for i in 0..20 {
        client
            .put_credential(&format!("smb://server{}/share", i), "CORP", "alice", "pw", true)
            .await
            .unwrap();
    }
    client.remove_credential("smb://server0/share").await.unwrap();
    client.flush().await.unwrap();

    assert_eq!(store.len(), 19);
    assert!(store.get("smb://server0/share").is_empty());
    assert_eq!(store.get("smb://server19/share").secret(), "pw");

    drop(client);
    worker.await.unwrap();
}

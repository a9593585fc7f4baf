//! End-to-end tests for the session workflow: discovery, vault selection,
//! linking, and the recent-links history.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use vaultlink::Session;
use vaultlink_core::prelude::*;
use vaultlink_discovery::{VaultDiscovery, VAULT_MARKER};

fn scripted_session(dialogs: ScriptedDialogs) -> (Arc<MemoryStore>, Session) {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(store.clone(), Arc::new(dialogs));
    (store, session)
}

async fn make_vault(base: &Path, name: &str) -> PathBuf {
    let vault = base.join(name);
    tokio::fs::create_dir_all(vault.join(VAULT_MARKER))
        .await
        .unwrap();
    vault
}

#[tokio::test]
async fn test_choose_vault_with_marker_persists_path() {
    let dir = TempDir::new().unwrap();
    let vault = make_vault(dir.path(), "Main").await;

    let dialogs = ScriptedDialogs::new();
    dialogs.push_directory(Some(vault.clone()));
    let (_store, session) = scripted_session(dialogs);

    let chosen = session.choose_vault().await.unwrap();
    assert_eq!(chosen, Some(vault.clone()));
    assert_eq!(session.load_vault_path(), Some(vault));
}

#[tokio::test]
async fn test_choose_vault_without_marker_honors_use_anyway() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain");
    tokio::fs::create_dir(&plain).await.unwrap();

    let dialogs = ScriptedDialogs::new();
    dialogs.push_directory(Some(plain.clone()));
    dialogs.push_confirmation(0); // "Use Anyway"
    let (_store, session) = scripted_session(dialogs);

    let chosen = session.choose_vault().await.unwrap();
    assert_eq!(chosen, Some(plain.clone()));
    assert_eq!(session.load_vault_path(), Some(plain));
}

#[tokio::test]
async fn test_choose_vault_without_marker_cancel_is_noop() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain");
    tokio::fs::create_dir(&plain).await.unwrap();

    let dialogs = ScriptedDialogs::new();
    dialogs.push_directory(Some(plain));
    dialogs.push_confirmation(1); // "Cancel"
    let (_store, session) = scripted_session(dialogs);

    assert_eq!(session.choose_vault().await.unwrap(), None);
    assert_eq!(session.load_vault_path(), None);
}

#[tokio::test]
async fn test_choose_vault_dialog_cancel_is_noop() {
    let dialogs = ScriptedDialogs::new();
    dialogs.push_directory(None);
    let (_store, session) = scripted_session(dialogs);

    assert_eq!(session.choose_vault().await.unwrap(), None);
}

#[tokio::test]
async fn test_session_discovery_uses_injected_engine() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("Documents");
    tokio::fs::create_dir(&root).await.unwrap();
    make_vault(&root, "Notes").await;

    let discovery = VaultDiscovery::new()
        .with_config_path(dir.path().join("missing.json"))
        .with_scan_roots(vec![root]);
    let (_store, session) =
        scripted_session(ScriptedDialogs::new());
    let session = session.with_discovery(discovery);

    let vaults = session.discover_vaults().await;
    assert_eq!(vaults.len(), 1);
    assert_eq!(vaults[0].name, "Notes");
}

#[cfg(unix)]
#[tokio::test]
async fn test_link_files_records_only_successes() {
    let dir = TempDir::new().unwrap();
    let vault = make_vault(dir.path(), "Vault").await;
    let src = dir.path().join("src");
    tokio::fs::create_dir(&src).await.unwrap();

    let good = src.join("a.md");
    tokio::fs::write(&good, "# a").await.unwrap();

    // Destination for the second request is a populated directory, so the
    // pre-removal step fails and the request is reported as failed.
    let bad = src.join("b.md");
    tokio::fs::write(&bad, "# b").await.unwrap();
    let blocker = vault.join("b.md");
    tokio::fs::create_dir(&blocker).await.unwrap();
    tokio::fs::write(blocker.join("x"), "x").await.unwrap();

    let (_store, session) = scripted_session(ScriptedDialogs::new());
    let requests = vec![LinkRequest::new(&good), LinkRequest::new(&bad)];
    let results = session.link_files(&requests, &vault).await;

    assert_eq!(results.len(), 2);
    assert!(results[0].success);
    assert!(!results[1].success);

    let recent = session.recent_links();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].file_name, "a.md");
    assert_eq!(recent[0].symlink_path, vault.join("a.md"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_recent_links_capped_across_batches() {
    let dir = TempDir::new().unwrap();
    let vault = make_vault(dir.path(), "Vault").await;
    let src = dir.path().join("src");
    tokio::fs::create_dir(&src).await.unwrap();

    let (_store, session) = scripted_session(ScriptedDialogs::new());
    for i in 0..12 {
        let file = src.join(format!("{}.md", i));
        tokio::fs::write(&file, "x").await.unwrap();
        let results = session
            .link_files(&[LinkRequest::new(&file)], &vault)
            .await;
        assert!(results[0].success);
    }

    let recent = session.recent_links();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].file_name, "11.md");

    assert!(session.clear_recent_links().unwrap().is_empty());
    assert!(session.recent_links().is_empty());
}

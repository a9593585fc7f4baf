//! Fallback vault discovery by scanning conventional user directories.
//!
//! A directory is a vault iff it directly contains the `.obsidian` marker
//! subfolder. The scan is bounded to each root plus one level of its
//! subdirectories so worst-case latency stays predictable on large home
//! directories. Every probe soft-fails: an unreadable root or entry is
//! skipped, never fatal.

use std::path::{Path, PathBuf};
use vaultlink_core::VaultCandidate;

/// Reserved subfolder name that identifies an Obsidian vault.
pub const VAULT_MARKER: &str = ".obsidian";

/// Conventional home-relative folders where users keep vaults.
pub const COMMON_FOLDERS: &[&str] = &[
    "Documents",
    "Dropbox",
    "Google Drive",
    "OneDrive",
    "iCloud Drive",
    "Obsidian Vaults",
];

/// Default scan roots for the current user, or empty when the home directory
/// cannot be determined.
pub fn default_scan_roots() -> Vec<PathBuf> {
    match dirs::home_dir() {
        Some(home) => COMMON_FOLDERS.iter().map(|f| home.join(f)).collect(),
        None => Vec::new(),
    }
}

/// True when `dir` directly contains the marker subfolder.
pub async fn is_vault(dir: &Path) -> bool {
    match tokio::fs::metadata(dir.join(VAULT_MARKER)).await {
        Ok(metadata) => metadata.is_dir(),
        Err(_) => false,
    }
}

/// Scan the given roots for vaults. A root that is itself a vault is emitted
/// directly; otherwise its immediate subdirectories are checked (one level,
/// no recursive descent). Candidates get sequential `manual-<n>` ids and are
/// marked valid and accessible, since the marker probe and directory read
/// already succeeded.
pub async fn scan_for_vaults(roots: &[PathBuf]) -> Vec<VaultCandidate> {
    let mut found: Vec<VaultCandidate> = Vec::new();

    for root in roots {
        if tokio::fs::metadata(root).await.is_err() {
            continue;
        }

        if is_vault(root).await {
            let candidate = manual_candidate(found.len(), root);
            log::debug!("Found vault at scan root {}", root.display());
            found.push(candidate);
            continue;
        }

        let mut entries = match tokio::fs::read_dir(root).await {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Skipping unreadable directory {}: {}", root.display(), e);
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    log::debug!("Stopping scan of {}: {}", root.display(), e);
                    break;
                }
            };

            let path = entry.path();
            let is_dir = match entry.file_type().await {
                Ok(file_type) => file_type.is_dir(),
                // Races and permission failures skip the item, not the scan
                Err(_) => false,
            };
            if is_dir && is_vault(&path).await {
                found.push(manual_candidate(found.len(), &path));
            }
        }
    }

    log::info!("Found {} potential vaults by directory scanning", found.len());
    found
}

fn manual_candidate(index: usize, path: &Path) -> VaultCandidate {
    VaultCandidate {
        id: format!("manual-{}", index),
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        path: path.to_path_buf(),
        is_valid: true,
        is_accessible: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_vault(base: &Path, name: &str) -> PathBuf {
        let vault = base.join(name);
        tokio::fs::create_dir_all(vault.join(VAULT_MARKER))
            .await
            .unwrap();
        vault
    }

    #[tokio::test]
    async fn test_root_that_is_itself_a_vault() {
        let dir = tempfile::tempdir().unwrap();
        let root = make_vault(dir.path(), "MyVault").await;

        let found = scan_for_vaults(&[root.clone()]).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "manual-0");
        assert_eq!(found[0].name, "MyVault");
        assert_eq!(found[0].path, root);
        assert!(found[0].is_valid && found[0].is_accessible);
    }

    #[tokio::test]
    async fn test_one_level_scan_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Documents");
        tokio::fs::create_dir(&root).await.unwrap();

        make_vault(&root, "Notes").await;
        // Nested two levels deep: must not be found
        make_vault(&root.join("projects"), "Hidden").await;
        // A plain file at the top level is ignored
        tokio::fs::write(root.join("readme.txt"), "hi").await.unwrap();

        let found = scan_for_vaults(&[root]).await;
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Notes"));
        assert!(!names.contains(&"projects"));
        assert!(!names.contains(&"Hidden"));
    }

    #[tokio::test]
    async fn test_marker_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("fake");
        tokio::fs::create_dir(&fake).await.unwrap();
        tokio::fs::write(fake.join(VAULT_MARKER), "").await.unwrap();

        assert!(!is_vault(&fake).await);
    }

    #[tokio::test]
    async fn test_missing_roots_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let root = dir.path().join("Documents");
        tokio::fs::create_dir(&root).await.unwrap();
        make_vault(&root, "Vaulty").await;

        let found = scan_for_vaults(&[missing, root]).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Vaulty");
    }

    #[tokio::test]
    async fn test_sequential_manual_ids_across_roots() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("A");
        let b = dir.path().join("B");
        tokio::fs::create_dir_all(&a).await.unwrap();
        tokio::fs::create_dir_all(&b).await.unwrap();
        make_vault(&a, "one").await;
        make_vault(&b, "two").await;

        let found = scan_for_vaults(&[a, b]).await;
        let mut ids: Vec<_> = found.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, vec!["manual-0", "manual-1"]);
    }
}

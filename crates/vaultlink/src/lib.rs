//! # VaultLink
//!
//! Session wiring for the VaultLink symlinker: owns the two external
//! collaborators (settings store, dialog provider) plus the discovery engine,
//! link executor, and recent-links ledger, and exposes the caller-facing
//! workflow. The components themselves stay stateless; persistent state lives
//! in the settings store.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vaultlink::Session;
//! use vaultlink_core::{LinkRequest, MemoryStore, ScriptedDialogs};
//!
//! # async fn run() {
//! let session = Session::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(ScriptedDialogs::new()),
//! );
//! let vaults = session.discover_vaults().await;
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use vaultlink_core::prelude::*;
use vaultlink_core::settings::{self, KEY_VAULT_PATH};
use vaultlink_discovery::{scan, VaultDiscovery};
use vaultlink_linker::{LinkExecutor, RecentLinks};

/// Confirm-dialog option index meaning "keep going with this folder".
const CONFIRM_USE_ANYWAY: usize = 0;

/// One caller session: collaborators plus the stateless engines.
pub struct Session {
    store: Arc<dyn SettingsStore>,
    dialogs: Arc<dyn DialogProvider>,
    discovery: VaultDiscovery,
    executor: LinkExecutor,
    ledger: RecentLinks,
}

impl Session {
    /// Session with platform-default discovery and link semantics.
    pub fn new(store: Arc<dyn SettingsStore>, dialogs: Arc<dyn DialogProvider>) -> Self {
        let ledger = RecentLinks::new(store.clone());
        Self {
            store,
            dialogs,
            discovery: VaultDiscovery::new(),
            executor: LinkExecutor::new(),
            ledger,
        }
    }

    /// Replace the discovery engine (tests point it at temp directories).
    pub fn with_discovery(mut self, discovery: VaultDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Current list of valid vault candidates. Never fails.
    pub async fn discover_vaults(&self) -> Vec<VaultCandidate> {
        self.discovery.discover_vaults().await
    }

    /// Interactive vault selection: directory picker, a confirmation when the
    /// chosen folder lacks the `.obsidian` marker, then persistence of the
    /// choice. `None` means the user cancelled at either prompt.
    pub async fn choose_vault(&self) -> Result<Option<PathBuf>> {
        let vault_path = match self
            .dialogs
            .choose_directory("Select Obsidian Vault Folder")
            .await?
        {
            Some(path) => path,
            None => return Ok(None),
        };

        if !scan::is_vault(&vault_path).await {
            let response = self
                .dialogs
                .confirm(
                    "The selected folder does not appear to be an Obsidian vault.",
                    "No .obsidian folder was found. You can still use this folder, \
                     but symlinks may not work as expected in Obsidian.",
                    &["Use Anyway", "Cancel"],
                )
                .await?;
            if response != CONFIRM_USE_ANYWAY {
                return Ok(None);
            }
        }

        self.save_vault_path(&vault_path)?;
        Ok(Some(vault_path))
    }

    /// The persisted vault path, if any.
    pub fn load_vault_path(&self) -> Option<PathBuf> {
        settings::get_as(self.store.as_ref(), KEY_VAULT_PATH)
    }

    /// Persist the selected vault path.
    pub fn save_vault_path(&self, path: &Path) -> Result<()> {
        settings::set_as(self.store.as_ref(), KEY_VAULT_PATH, &path)
    }

    /// Interactive markdown file selection. Empty means cancelled.
    pub async fn choose_markdown_files(&self) -> Result<Vec<PathBuf>> {
        self.dialogs
            .choose_files("Select Markdown Files to Symlink", &["md", "markdown"])
            .await
    }

    /// Execute a link batch against a vault and record each success in the
    /// recent-links ledger. Ledger write failures are logged, not propagated;
    /// the links themselves were already created.
    pub async fn link_files(
        &self,
        requests: &[LinkRequest],
        vault_path: &Path,
    ) -> Vec<LinkResult> {
        let results = self.executor.create_links(requests, vault_path).await;
        for result in &results {
            if let Some(record) = RecentLinkRecord::from_result(result) {
                if let Err(e) = self.ledger.record(record) {
                    log::warn!("Failed to record recent link {}: {}", result.file, e);
                }
            }
        }
        results
    }

    /// The recent-links history, most recent first.
    pub fn recent_links(&self) -> Vec<RecentLinkRecord> {
        self.ledger.list()
    }

    /// Clear the recent-links history.
    pub fn clear_recent_links(&self) -> Result<Vec<RecentLinkRecord>> {
        self.ledger.clear()
    }
}

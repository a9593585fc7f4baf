//! # VaultLink Discovery
//!
//! Locates candidate Obsidian vault directories in two steps:
//!
//! 1. **Configuration file** — parse Obsidian's `obsidian.json` vault mapping,
//!    normalizing `file://` paths and validating each entry on disk.
//! 2. **Directory scan** — only when step 1 yields nothing usable, scan
//!    conventional user folders (one level deep) for the `.obsidian` marker.
//!
//! Configuration hits take precedence and suppress the scan entirely; the
//! authoritative source is trusted first. Discovery never raises to its
//! caller: malformed configuration, unreadable directories, and I/O races all
//! degrade to smaller (possibly empty) result sets.

pub mod config_file;
pub mod scan;

pub use config_file::{candidate_config_paths, parse_vault_mapping, resolve_config_path, VaultMapping};
pub use scan::{default_scan_roots, is_vault, scan_for_vaults, VAULT_MARKER};

use std::path::{Path, PathBuf};
use tracing::instrument;
use vaultlink_core::prelude::*;

/// Vault discovery engine.
///
/// Stateless over its inputs; results are recomputed fresh on every call.
/// The configuration path and scan roots can be overridden, which tests use
/// to point discovery at temporary directories.
#[derive(Debug, Default)]
pub struct VaultDiscovery {
    config_path: Option<PathBuf>,
    scan_roots: Option<Vec<PathBuf>>,
}

impl VaultDiscovery {
    /// Discovery with platform defaults for the configuration file location
    /// and scan roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the configuration file location.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Override the directory-scan roots.
    pub fn with_scan_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.scan_roots = Some(roots);
        self
    }

    /// Produce the current list of valid vault candidates. Never fails;
    /// callers needing live updates re-invoke.
    #[instrument(skip(self), name = "discover_vaults")]
    pub async fn discover_vaults(&self) -> Vec<VaultCandidate> {
        match self.vaults_from_config().await {
            Ok(vaults) if !vaults.is_empty() => {
                log::info!("Found {} Obsidian vaults from config", vaults.len());
                return vaults;
            }
            Ok(_) => {
                log::info!("No usable vaults in Obsidian config, scanning common directories");
            }
            Err(e) => {
                log::warn!("Error reading Obsidian config: {}", e);
            }
        }
        self.scan_directories().await
    }

    /// Step 1: read and validate the configuration file's vault mapping.
    /// A missing file is `Ok(empty)`; unreadable or malformed content is an
    /// error — both fall through to the directory scan.
    async fn vaults_from_config(&self) -> Result<Vec<VaultCandidate>> {
        let config_path = match &self.config_path {
            Some(path) => path.clone(),
            None => match config_file::resolve_config_path().await {
                Some(path) => path,
                None => return Ok(Vec::new()),
            },
        };

        if tokio::fs::metadata(&config_path).await.is_err() {
            log::debug!("Obsidian config file not found at {}", config_path.display());
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&config_path).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to read {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let entries = match config_file::parse_vault_mapping(&content)? {
            VaultMapping::Entries(entries) => entries,
            VaultMapping::Empty => return Ok(Vec::new()),
        };

        let mut vaults = Vec::with_capacity(entries.len());
        for (id, entry) in entries {
            // Some Obsidian versions store uri-encoded file:// paths
            let vault_path = PathBuf::from(normalize_path(&entry.path));
            let status = validate_path(&vault_path).await;
            if !status.is_valid {
                log::debug!("Skipping nonexistent vault {}", vault_path.display());
                continue;
            }
            vaults.push(VaultCandidate {
                id,
                name: display_name(entry.name.as_deref(), &vault_path),
                path: vault_path,
                is_valid: status.is_valid,
                is_accessible: status.is_accessible,
            });
        }

        let inaccessible = vaults.iter().filter(|v| !v.is_accessible).count();
        if inaccessible > 0 {
            log::warn!(
                "{} vault(s) may require elevated privileges to access",
                inaccessible
            );
        }

        Ok(vaults)
    }

    /// Step 2: marker-folder scan of conventional directories.
    async fn scan_directories(&self) -> Vec<VaultCandidate> {
        let roots = match &self.scan_roots {
            Some(roots) => roots.clone(),
            None => scan::default_scan_roots(),
        };
        scan::scan_for_vaults(&roots).await
    }
}

fn display_name(declared: Option<&str>, path: &Path) -> String {
    match declared {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

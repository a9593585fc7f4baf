//! Obsidian configuration file location and schema.
//!
//! Obsidian records its known vaults in `obsidian.json`. Where that file lives
//! depends on the platform and installation flavor (standard, portable,
//! Flatpak, Snap). The vault mapping key also drifted across versions:
//! current builds write `vaults`, older ones `vaultList`. Both are accepted
//! here, in that priority order.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use vaultlink_core::{Error, Result};

/// A single vault entry as Obsidian records it. `path` may be a
/// percent-encoded `file://` URI.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigVaultEntry {
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Top-level shape of `obsidian.json`. Only the vault mapping is of interest;
/// everything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    vaults: Option<HashMap<String, ConfigVaultEntry>>,
    #[serde(default, rename = "vaultList")]
    vault_list: Option<HashMap<String, ConfigVaultEntry>>,
}

/// Outcome of parsing the configuration file: a vault mapping, or nothing
/// usable. Malformed JSON is an `Err`, which callers treat as "no usable
/// vaults from configuration".
#[derive(Debug)]
pub enum VaultMapping {
    Entries(HashMap<String, ConfigVaultEntry>),
    Empty,
}

/// Parse configuration file content. Tries `vaults`, then legacy `vaultList`,
/// in that fixed order; an absent mapping is [`VaultMapping::Empty`].
pub fn parse_vault_mapping(content: &str) -> Result<VaultMapping> {
    let document: ConfigDocument = serde_json::from_str(content)
        .map_err(|e| Error::config_error(format!("Malformed Obsidian configuration: {}", e)))?;

    let mapping = document.vaults.or(document.vault_list);
    Ok(match mapping {
        Some(entries) if !entries.is_empty() => VaultMapping::Entries(entries),
        _ => VaultMapping::Empty,
    })
}

/// Candidate locations of `obsidian.json` for the current platform, in
/// priority order. Environment variables and the working directory cover
/// portable installations.
pub fn candidate_config_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let config_tail: PathBuf = ["obsidian", "obsidian.json"].iter().collect();

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            candidates.push(PathBuf::from(appdata).join(&config_tail));
        }
        if let Ok(portable) = std::env::var("PORTABLE_EXECUTABLE_DIR") {
            candidates.push(PathBuf::from(portable).join("Data").join(&config_tail));
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            candidates.push(
                home.join("Library")
                    .join("Application Support")
                    .join(&config_tail),
            );
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".config").join(&config_tail));
            // Flatpak installation
            candidates.push(
                home.join(".var")
                    .join("app")
                    .join("md.obsidian.Obsidian")
                    .join("config")
                    .join(&config_tail),
            );
            // Snap installation
            candidates.push(
                home.join("snap")
                    .join("obsidian")
                    .join("current")
                    .join(".config")
                    .join(&config_tail),
            );
        }
    }

    // Portable installations keep a Data directory next to the working dir
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("Data").join(&config_tail));
    }

    candidates
}

/// Resolve the configuration file to use: the first candidate that exists,
/// else the first candidate (even if missing), else `None` on platforms with
/// no candidates at all.
pub async fn resolve_config_path() -> Option<PathBuf> {
    let candidates = candidate_config_paths();
    for candidate in &candidates {
        if tokio::fs::metadata(candidate).await.is_ok() {
            log::debug!("Found Obsidian config at {}", candidate.display());
            return Some(candidate.clone());
        }
    }
    log::debug!("No Obsidian config found, using default path");
    candidates.into_iter().next()
}

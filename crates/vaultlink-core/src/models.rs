//! Core data models for vault discovery and link creation.
//!
//! Wire names stay camelCase so persisted settings remain compatible with the
//! layout the desktop application used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A candidate vault directory produced by discovery.
///
/// Constructed fresh on every discovery call and never persisted. Discovery
/// returns only candidates with `is_valid == true`; `is_accessible` is
/// informational so callers can render "found but locked" vaults distinctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaultCandidate {
    /// Stable identifier. Values prefixed `manual-` denote directory-scan
    /// discoveries; all other values are configuration-file vault ids.
    pub id: String,
    /// Display name: the vault's declared name, or the directory basename.
    pub name: String,
    /// Absolute path, already normalized (no `file://` prefix, no encoding).
    pub path: PathBuf,
    /// The path exists on disk.
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    /// The path exists and its readability was confirmed.
    #[serde(rename = "isAccessible")]
    pub is_accessible: bool,
}

impl VaultCandidate {
    /// True for candidates found by scanning directories rather than read from
    /// the external application's configuration file.
    pub fn is_manual(&self) -> bool {
        self.id.starts_with("manual-")
    }
}

/// One file to link into a vault, with an optional rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRequest {
    /// Absolute path to the source file. Existence is not pre-validated;
    /// failures surface as link-creation errors.
    #[serde(rename = "filePath")]
    pub source_path: PathBuf,
    /// Override for the link's filename inside the vault. When absent or
    /// empty, the source file's basename is used.
    #[serde(rename = "customName", skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

impl LinkRequest {
    /// Request linking a file under its own basename.
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            custom_name: None,
        }
    }

    /// Request linking a file under a custom name.
    pub fn renamed(source_path: impl Into<PathBuf>, custom_name: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            custom_name: Some(custom_name.into()),
        }
    }

    /// The filename the link will use: the custom name if provided and
    /// non-empty, else the source basename. Applies even when the request
    /// later fails, so results always carry the resolved name.
    pub fn final_name(&self) -> String {
        match self.custom_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// Per-request outcome of a link batch. Exactly one per [`LinkRequest`], in
/// input order; no request is silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResult {
    pub success: bool,
    /// The filename used (custom name if provided, else original basename).
    pub file: String,
    /// On success: the original source file.
    #[serde(rename = "targetPath", skip_serializing_if = "Option::is_none")]
    pub target_path: Option<PathBuf>,
    /// On success: full path of the created link.
    #[serde(rename = "symlinkPath", skip_serializing_if = "Option::is_none")]
    pub symlink_path: Option<PathBuf>,
    /// On failure: human-readable message from the underlying failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkResult {
    /// Successful link creation.
    pub fn created(
        file: impl Into<String>,
        target_path: impl Into<PathBuf>,
        symlink_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            success: true,
            file: file.into(),
            target_path: Some(target_path.into()),
            symlink_path: Some(symlink_path.into()),
            error: None,
        }
    }

    /// Failed link creation.
    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            file: file.into(),
            target_path: None,
            symlink_path: None,
            error: Some(error.into()),
        }
    }
}

/// One entry in the bounded history of created links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentLinkRecord {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "targetPath")]
    pub target_path: PathBuf,
    #[serde(rename = "symlinkPath")]
    pub symlink_path: PathBuf,
    pub date: DateTime<Utc>,
}

impl RecentLinkRecord {
    /// Build a record from a successful [`LinkResult`], stamped now.
    /// Returns `None` for failure results.
    pub fn from_result(result: &LinkResult) -> Option<Self> {
        if !result.success {
            return None;
        }
        Some(Self {
            file_name: result.file.clone(),
            target_path: result.target_path.clone()?,
            symlink_path: result.symlink_path.clone()?,
            date: Utc::now(),
        })
    }
}

/// Result of probing a path for existence and readability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathStatus {
    /// The path exists.
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    /// The path exists and a read probe succeeded.
    #[serde(rename = "isAccessible")]
    pub is_accessible: bool,
}

impl PathStatus {
    pub fn is_usable(&self) -> bool {
        self.is_valid && self.is_accessible
    }
}

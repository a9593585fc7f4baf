//! # VaultLink Core
//!
//! Core data models, error types, and path utilities for the VaultLink symlinker.
//! This crate defines the canonical types that all other crates depend on.
//!
//! ## Architecture Principles
//!
//! - **Stateless Components**: Discovery and linking are pure functions over their
//!   inputs plus two external collaborators (settings store, dialog provider)
//! - **Zero Panic in Libraries**: All fallible operations return `Result<T, Error>`
//!   or soft boolean flags; `unwrap`/`expect` is confined to tests
//! - **Soft-Fail Probes**: Filesystem probes convert I/O failures into structured
//!   data (`PathStatus`, per-item results) rather than propagating them
//!
//! ## Core Modules
//!
//! - [`models`] - Vault candidates, link requests/results, recent-link records
//! - [`error`] - Error types and Result alias
//! - [`paths`] - Path normalization and validation
//! - [`settings`] - Persistent settings store trait and implementations
//! - [`dialog`] - Native dialog provider trait
//!
//! ## Usage
//!
//! ```
//! use vaultlink_core::prelude::*;
//!
//! let status = PathStatus { is_valid: true, is_accessible: true };
//! assert!(status.is_usable());
//!
//! let plain = vaultlink_core::paths::normalize_path("file:///a/b%20c");
//! assert_eq!(plain, "/a/b c");
//! ```

pub mod dialog;
pub mod error;
pub mod models;
pub mod paths;
pub mod settings;

pub use dialog::{DialogProvider, ScriptedDialogs};
pub use error::{Error, Result};
pub use models::{LinkRequest, LinkResult, PathStatus, RecentLinkRecord, VaultCandidate};
pub use paths::{normalize_path, validate_path};
pub use settings::{JsonFileStore, MemoryStore, SettingsStore, KEY_RECENT_LINKS, KEY_VAULT_PATH};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::dialog::{DialogProvider, ScriptedDialogs};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        LinkRequest, LinkResult, PathStatus, RecentLinkRecord, VaultCandidate,
    };
    pub use crate::paths::{normalize_path, validate_path};
    pub use crate::settings::{
        JsonFileStore, MemoryStore, SettingsStore, KEY_RECENT_LINKS, KEY_VAULT_PATH,
    };
}

//! Link batch execution with per-request failure isolation.

use crate::creator::{platform_link_creator, LinkCreator};
use std::path::Path;
use tracing::instrument;
use vaultlink_core::prelude::*;

/// Executes batches of link requests against a vault directory.
///
/// Requests are processed sequentially in input order and independently: one
/// failure never aborts the rest, and every request yields exactly one
/// [`LinkResult`]. The check-remove-create sequence per destination is not
/// atomic; callers must serialize concurrent batches against the same vault.
pub struct LinkExecutor {
    creator: Box<dyn LinkCreator>,
}

impl LinkExecutor {
    /// Executor using the platform's link semantics.
    pub fn new() -> Self {
        Self {
            creator: platform_link_creator(),
        }
    }

    /// Executor with explicit link semantics (used by tests to inject
    /// failing creators).
    pub fn with_creator(creator: Box<dyn LinkCreator>) -> Self {
        Self { creator }
    }

    /// Link every requested file into `vault_path`. The result vector has the
    /// same length and order as `requests`.
    #[instrument(skip(self, requests), name = "create_links", fields(count = requests.len()))]
    pub async fn create_links(
        &self,
        requests: &[LinkRequest],
        vault_path: &Path,
    ) -> Vec<LinkResult> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let result = self.create_one(request, vault_path).await;
            match &result.error {
                Some(error) => log::warn!("Failed to link {}: {}", result.file, error),
                None => log::info!(
                    "Created link {} -> {}",
                    request.source_path.display(),
                    result
                        .symlink_path
                        .as_deref()
                        .unwrap_or(Path::new(""))
                        .display()
                ),
            }
            results.push(result);
        }
        results
    }

    async fn create_one(&self, request: &LinkRequest, vault_path: &Path) -> LinkResult {
        let final_name = request.final_name();
        if final_name.is_empty() {
            return LinkResult::failed(
                final_name,
                format!(
                    "Source path has no filename: {}",
                    request.source_path.display()
                ),
            );
        }

        let destination = vault_path.join(&final_name);

        // A prior link, a stale file, or a leftover from a previous run may
        // already occupy the destination. symlink_metadata also catches
        // dangling links, which a plain existence check would follow and miss.
        if let Ok(metadata) = tokio::fs::symlink_metadata(&destination).await {
            log::debug!("Removing existing entry at {}", destination.display());
            let removal = if metadata.is_dir() {
                // Covers junctions on Windows and empty directories; a
                // populated directory fails here and is reported, never
                // recursively deleted.
                tokio::fs::remove_dir(&destination).await
            } else {
                tokio::fs::remove_file(&destination).await
            };
            if let Err(e) = removal {
                return LinkResult::failed(
                    final_name,
                    format!("Could not remove existing file: {}", e),
                );
            }
        }

        match self.creator.create_link(&request.source_path, &destination) {
            Ok(()) => LinkResult::created(final_name, request.source_path.clone(), destination),
            Err(e) => LinkResult::failed(final_name, e.to_string()),
        }
    }
}

impl Default for LinkExecutor {
    fn default() -> Self {
        Self::new()
    }
}

//! Path normalization and validation.
//!
//! Obsidian's configuration file sometimes records vault paths as
//! percent-encoded `file://` URIs; [`normalize_path`] turns those back into
//! plain filesystem paths. [`validate_path`] is the soft-fail probe behind the
//! `isValid`/`isAccessible` flags: it never returns an error, only flags.

use crate::models::PathStatus;
use std::path::Path;

/// Scheme prefix some configuration files put in front of vault paths.
const FILE_SCHEME: &str = "file://";

/// Convert a `file://`-prefixed, percent-encoded path into a plain filesystem
/// path. Any other input is returned unchanged. Never fails; idempotent.
pub fn normalize_path(path: &str) -> String {
    match path.strip_prefix(FILE_SCHEME) {
        Some(rest) => match urlencoding::decode(rest) {
            Ok(decoded) => decoded.into_owned(),
            // Undecodable bytes: keep the raw remainder rather than erroring
            Err(_) => rest.to_string(),
        },
        None => path.to_string(),
    }
}

/// Probe a path for existence and readability.
///
/// `is_valid` is plain existence. When the path exists, accessibility is
/// confirmed by listing a directory's entries or opening a file for read.
/// Probe failures (permission denied, I/O errors) yield
/// `is_accessible = false` without propagating, so callers can still show
/// "found but locked" entries distinctly from "not found".
pub async fn validate_path(path: &Path) -> PathStatus {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) => m,
        Err(_) => {
            return PathStatus {
                is_valid: false,
                is_accessible: false,
            }
        }
    };

    let is_accessible = if metadata.is_dir() {
        tokio::fs::read_dir(path).await.is_ok()
    } else {
        tokio::fs::File::open(path).await.is_ok()
    };

    if !is_accessible {
        log::debug!(
            "Path {} exists but may require elevated privileges",
            path.display()
        );
    }

    PathStatus {
        is_valid: true,
        is_accessible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_strips_scheme_and_decodes() {
        assert_eq!(normalize_path("file:///a/b%20c"), "/a/b c");
        assert_eq!(
            normalize_path("file:///Users/me/Obsidian%20Vault"),
            "/Users/me/Obsidian Vault"
        );
    }

    #[test]
    fn test_normalize_leaves_plain_paths_alone() {
        assert_eq!(normalize_path("/already/plain"), "/already/plain");
        assert_eq!(normalize_path("relative/path"), "relative/path");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["file:///a/b%20c", "/already/plain", "", "file://x"] {
            let once = normalize_path(input);
            assert_eq!(normalize_path(&once), once);
        }
    }

    #[tokio::test]
    async fn test_validate_missing_path() {
        let status = validate_path(Path::new("/definitely/not/here")).await;
        assert!(!status.is_valid);
        assert!(!status.is_accessible);
    }

    #[tokio::test]
    async fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let status = validate_path(dir.path()).await;
        assert!(status.is_valid);
        assert!(status.is_accessible);
        assert!(status.is_usable());
    }

    #[tokio::test]
    async fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.md");
        tokio::fs::write(&file, "# hi").await.unwrap();

        let status = validate_path(&file).await;
        assert!(status.is_valid);
        assert!(status.is_accessible);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_validate_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        tokio::fs::create_dir(&locked).await.unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let status = validate_path(&locked).await;

        // Restore so the tempdir can be cleaned up
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        // Root bypasses permission bits; only assert the distinction when the
        // probe actually failed.
        if !status.is_accessible {
            assert!(status.is_valid);
            assert!(!status.is_usable());
        }
    }

    #[tokio::test]
    async fn test_normalized_path_round_trips_to_pathbuf() {
        let normalized = normalize_path("file:///tmp/my%20vault");
        assert_eq!(PathBuf::from(&normalized), PathBuf::from("/tmp/my vault"));
    }
}

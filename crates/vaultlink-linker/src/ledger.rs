//! Bounded history of successfully created links.
//!
//! A pure prepend/cap/clear utility over the settings store; entry contents
//! are not validated here.

use std::sync::Arc;
use vaultlink_core::settings::{self, SettingsStore, KEY_RECENT_LINKS};
use vaultlink_core::{RecentLinkRecord, Result};

/// Maximum number of records kept.
pub const MAX_RECENT_LINKS: usize = 10;

/// Most-recent-first ledger of created links, backed by the settings store.
pub struct RecentLinks {
    store: Arc<dyn SettingsStore>,
}

impl RecentLinks {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Prepend an entry, truncate to [`MAX_RECENT_LINKS`], persist, and
    /// return the new list.
    pub fn record(&self, entry: RecentLinkRecord) -> Result<Vec<RecentLinkRecord>> {
        let mut links = self.list();
        links.insert(0, entry);
        links.truncate(MAX_RECENT_LINKS);
        settings::set_as(self.store.as_ref(), KEY_RECENT_LINKS, &links)?;
        Ok(links)
    }

    /// The stored list, or empty when nothing was recorded yet.
    pub fn list(&self) -> Vec<RecentLinkRecord> {
        settings::get_as(self.store.as_ref(), KEY_RECENT_LINKS).unwrap_or_default()
    }

    /// Overwrite the stored list with empty and return it.
    pub fn clear(&self) -> Result<Vec<RecentLinkRecord>> {
        let empty: Vec<RecentLinkRecord> = Vec::new();
        settings::set_as(self.store.as_ref(), KEY_RECENT_LINKS, &empty)?;
        Ok(empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;
    use vaultlink_core::MemoryStore;

    fn record_named(name: &str) -> RecentLinkRecord {
        RecentLinkRecord {
            file_name: name.to_string(),
            target_path: PathBuf::from("/src").join(name),
            symlink_path: PathBuf::from("/vault").join(name),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_record_prepends() {
        let ledger = RecentLinks::new(Arc::new(MemoryStore::new()));
        ledger.record(record_named("first.md")).unwrap();
        let list = ledger.record(record_named("second.md")).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].file_name, "second.md");
        assert_eq!(list[1].file_name, "first.md");
        assert_eq!(ledger.list(), list);
    }

    #[test]
    fn test_cap_at_ten_entries() {
        let ledger = RecentLinks::new(Arc::new(MemoryStore::new()));
        for i in 0..25 {
            let list = ledger.record(record_named(&format!("{}.md", i))).unwrap();
            assert!(list.len() <= MAX_RECENT_LINKS);
        }

        let list = ledger.list();
        assert_eq!(list.len(), MAX_RECENT_LINKS);
        // Most recent first; the oldest fifteen were evicted
        assert_eq!(list[0].file_name, "24.md");
        assert_eq!(list[9].file_name, "15.md");
    }

    #[test]
    fn test_list_empty_when_unset() {
        let ledger = RecentLinks::new(Arc::new(MemoryStore::new()));
        assert!(ledger.list().is_empty());
    }

    #[test]
    fn test_clear() {
        let ledger = RecentLinks::new(Arc::new(MemoryStore::new()));
        ledger.record(record_named("a.md")).unwrap();
        assert_eq!(ledger.clear().unwrap(), Vec::new());
        assert!(ledger.list().is_empty());
    }
}

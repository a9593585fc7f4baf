//! # VaultLink Linker
//!
//! Plans and executes filesystem links from a vault directory to external
//! files, and keeps the bounded recent-links history.
//!
//! - [`LinkExecutor`] resolves each request's final name, clears any
//!   pre-existing entry at the destination, and creates the link, reporting a
//!   structured per-file [`vaultlink_core::LinkResult`] with partial-failure
//!   isolation.
//! - [`LinkCreator`] is the platform seam: plain symlinks on unix, junctions
//!   for directories on Windows where unprivileged symlinks are unavailable.
//! - [`RecentLinks`] is the append-and-cap history over the settings store.

pub mod creator;
pub mod executor;
pub mod ledger;

pub use creator::{platform_link_creator, LinkCreator};
pub use executor::LinkExecutor;
pub use ledger::{RecentLinks, MAX_RECENT_LINKS};

#[cfg(unix)]
pub use creator::SymlinkCreator;
#[cfg(windows)]
pub use creator::JunctionCreator;

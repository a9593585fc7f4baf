//! Platform-specific link creation.
//!
//! Unix allows unprivileged symbolic links, so [`SymlinkCreator`] always makes
//! a standard symlink. Windows requires elevation for arbitrary symlinks but
//! permits directory junctions without it, so [`JunctionCreator`] makes a
//! junction when the source is a directory and a file symlink otherwise. The
//! right implementation is selected once via [`platform_link_creator`], not
//! re-branched on every call.

use std::io;
use std::path::Path;

/// Creates one filesystem link from `destination` to `source`.
///
/// Implementations assume the destination does not exist; the executor clears
/// pre-existing entries first.
pub trait LinkCreator: Send + Sync {
    fn create_link(&self, source: &Path, destination: &Path) -> io::Result<()>;
}

/// Standard symbolic links (unix).
#[cfg(unix)]
pub struct SymlinkCreator;

#[cfg(unix)]
impl LinkCreator for SymlinkCreator {
    fn create_link(&self, source: &Path, destination: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(source, destination)
    }
}

/// Junctions for directories, file symlinks otherwise (windows).
#[cfg(windows)]
pub struct JunctionCreator;

#[cfg(windows)]
impl LinkCreator for JunctionCreator {
    fn create_link(&self, source: &Path, destination: &Path) -> io::Result<()> {
        let is_dir = std::fs::metadata(source).map(|m| m.is_dir()).unwrap_or(false);
        if is_dir {
            junction::create(source, destination)
        } else {
            std::os::windows::fs::symlink_file(source, destination)
        }
    }
}

/// The link creator for the current platform.
pub fn platform_link_creator() -> Box<dyn LinkCreator> {
    #[cfg(unix)]
    {
        Box::new(SymlinkCreator)
    }
    #[cfg(windows)]
    {
        Box::new(JunctionCreator)
    }
}

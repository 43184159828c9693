//! Filesystem listing for kittyfs.
//!
//! Provides the [Entry] struct which is shown by the entry list, the [ListingProvider]
//! boundary the navigation state machine lists directories through, and root (drive /
//! mount point) enumeration used for the drive selection screen.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal length of a root path. Anything at or below it is treated as the top of a drive.
#[cfg(windows)]
pub const MIN_ROOT_PATH_LEN: usize = 3;
#[cfg(not(windows))]
pub const MIN_ROOT_PATH_LEN: usize = 1;

/// A single filesystem object shown in the list.
///
/// Immutable once built. Entry sets are replaced wholesale on every directory change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    is_dir: bool,
    path: PathBuf,
}

impl Entry {
    pub fn new(name: impl Into<String>, is_dir: bool, path: impl Into<PathBuf>) -> Self {
        Entry {
            name: name.into(),
            is_dir,
            path: path.into(),
        }
    }

    /// Builds a root entry, whose display name is its own path.
    pub fn root(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Entry {
            name: path.to_string_lossy().into_owned(),
            is_dir: true,
            path,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name as shown in the list, directories carry a trailing separator.
    pub fn display_name(&self) -> Cow<'_, str> {
        if self.is_dir && !self.name.ends_with(['/', '\\']) {
            Cow::Owned(format!("{}/", self.name))
        } else {
            Cow::Borrowed(&self.name)
        }
    }
}

/// Source of directory listings for the navigation state machine.
///
/// Never fails: an inaccessible path lists as empty.
pub trait ListingProvider {
    fn list_entries(&self, path: &Path) -> Vec<Entry>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsListing;

impl ListingProvider for FsListing {
    fn list_entries(&self, path: &Path) -> Vec<Entry> {
        browse_dir(path).unwrap_or_default()
    }
}

/// Reads the contents of the provided directory, sorted by name.
///
/// Symlinks to directories are reported as directories so they can be entered.
/// Individual entries that cannot be read are skipped.
pub fn browse_dir(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let entry_path = entry.path();
        let is_dir = if ft.is_symlink() {
            fs::metadata(&entry_path).is_ok_and(|md| md.is_dir())
        } else {
            ft.is_dir()
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(Entry::new(name, is_dir, entry_path));
    }

    entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Enumerates the roots presented on the drive selection screen.
#[cfg(windows)]
pub fn list_roots() -> Vec<Entry> {
    ('C'..='Z')
        .map(|letter| format!("{letter}:\\"))
        .filter(|drive| fs::metadata(drive).is_ok())
        .map(Entry::root)
        .collect()
}

/// Enumerates the roots presented on the drive selection screen.
///
/// `/` always comes first, followed by whatever is mounted under the usual mount parents.
#[cfg(not(windows))]
pub fn list_roots() -> Vec<Entry> {
    let mut roots = vec![Entry::root("/")];
    let mut mounts: Vec<PathBuf> = mount_parents()
        .iter()
        .filter_map(|parent| fs::read_dir(parent).ok())
        .flatten()
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    mounts.sort();
    mounts.dedup();

    roots.extend(mounts.into_iter().map(Entry::root));
    roots
}

#[cfg(target_os = "macos")]
fn mount_parents() -> Vec<PathBuf> {
    vec![PathBuf::from("/Volumes")]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn mount_parents() -> Vec<PathBuf> {
    let mut parents = Vec::with_capacity(3);
    if let Ok(user) = std::env::var("USER")
        && !user.is_empty()
    {
        parents.push(Path::new("/media").join(&user));
        parents.push(Path::new("/run/media").join(&user));
    }
    parents.push(PathBuf::from("/mnt"));
    parents
}

#[cfg(not(any(unix, windows)))]
fn mount_parents() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn entry_accessors() {
        let file = Entry::new("notes.txt", false, "/tmp/notes.txt");
        assert_eq!(file.name(), "notes.txt");
        assert!(!file.is_dir());
        assert_eq!(file.display_name(), "notes.txt");

        let dir = Entry::new("Docs", true, "/tmp/Docs");
        assert!(dir.is_dir());
        assert_eq!(dir.display_name(), "Docs/");

        let root = Entry::root("/");
        assert_eq!(root.name(), "/");
        assert_eq!(root.display_name(), "/");
    }

    #[test]
    fn browse_dir_sorted_with_dir_flags() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("b.txt"))?;
        fs::create_dir(tmp.path().join("a_dir"))?;
        File::create(tmp.path().join("c.md"))?;

        let entries = browse_dir(tmp.path())?;
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a_dir", "b.txt", "c.md"]);
        assert!(entries[0].is_dir());
        assert!(!entries[1].is_dir());
        assert_eq!(entries[1].path(), tmp.path().join("b.txt"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_dir_is_enterable() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("real"))?;
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link"))?;
        std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("broken"))?;

        let entries = browse_dir(tmp.path())?;
        let link = entries.iter().find(|e| e.name() == "link").ok_or("no link")?;
        let broken = entries.iter().find(|e| e.name() == "broken").ok_or("no broken")?;
        assert!(link.is_dir());
        assert!(!broken.is_dir());
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let result = browse_dir(Path::new("/path/does/not/exist"));
        assert!(result.is_err());
    }

    #[test]
    fn fs_listing_degrades_to_empty() {
        assert!(FsListing.list_entries(Path::new("/path/does/not/exist")).is_empty());
    }

    #[cfg(not(windows))]
    #[test]
    fn roots_start_with_filesystem_root() {
        let roots = list_roots();
        assert_eq!(roots.first().map(|r| r.path()), Some(Path::new("/")));
        assert!(roots.iter().all(|r| r.is_dir()));
    }
}

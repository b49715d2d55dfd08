//! File entry representation.

use std::path::{Path, PathBuf};

/// A single file or directory entry in a listing.
///
/// `FileEntry` is immutable — entries are regenerated wholesale on every
/// directory load rather than patched in place. Directory sizes are
/// reported as `None`.
///
/// # Examples
///
/// ```no_run
/// use sandfm_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    size: Option<u64>,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// Names are NFC-normalised (macOS stores them decomposed).
    /// Directories carry no size.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        Self {
            name: crate::fs::path::basename(&path),
            is_dir: metadata.is_dir(),
            size: if metadata.is_dir() {
                None
            } else {
                Some(metadata.len())
            },
            path,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns the file size in bytes. Always `None` for directories.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        crate::fs::path::is_hidden(&self.name)
    }
}

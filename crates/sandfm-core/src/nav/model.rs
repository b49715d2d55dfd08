//! The authoritative in-memory snapshot of one directory and its selection.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::fs::path::{is_hidden, parent_of};

/// One directory's listing plus the current selection.
///
/// Both the platform dispatcher and the view mutate their shared state
/// through this type, so it is the single source of truth. `entries` is
/// replaced wholesale on every load — there is no incremental patching.
///
/// Invariant: `selected`, if present, equals the path of some entry in
/// `entries` or `current_path` itself immediately after any load; a load
/// always clears the selection. `select` performs no filesystem
/// validation, so a selection may go stale until the next reload.
#[derive(Debug, Clone)]
pub struct DirectoryModel {
    current_path: PathBuf,
    entries: Vec<FileEntry>,
    selected: Option<PathBuf>,
}

impl DirectoryModel {
    /// Creates a model rooted at `path`, loading its listing immediately.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryModel::load`].
    pub fn from_dir(path: &Path) -> CoreResult<Self> {
        let mut model = Self {
            current_path: PathBuf::new(),
            entries: Vec::new(),
            selected: None,
        };
        model.load(path)?;
        Ok(model)
    }

    /// Replaces the listing with the non-hidden children of `path`.
    ///
    /// Entries are sorted by name (case-sensitive ordinal). Children
    /// whose metadata cannot be read are silently skipped. Sets
    /// `current_path` and clears the selection.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] — the path does not exist.
    /// - [`CoreError::NotADirectory`] — the path is not a directory.
    /// - [`CoreError::PermissionDenied`] — read access is denied.
    /// - [`CoreError::Io`] — any other I/O error.
    pub fn load(&mut self, path: &Path) -> CoreResult<()> {
        if !path.exists() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(CoreError::NotADirectory(path.to_path_buf()));
        }

        let read_dir = std::fs::read_dir(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                CoreError::PermissionDenied(path.to_path_buf())
            } else {
                CoreError::Io(e)
            }
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            if is_hidden(&dir_entry.file_name().to_string_lossy()) {
                continue;
            }
            let metadata = match dir_entry.metadata() {
                Ok(m) => m,
                Err(_) => continue,
            };
            entries.push(FileEntry::new(dir_entry.path(), &metadata));
        }
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        self.current_path = path.to_path_buf();
        self.entries = entries;
        self.selected = None;
        Ok(())
    }

    /// Re-reads the current directory. Idempotent; clears the selection.
    pub fn refresh(&mut self) -> CoreResult<()> {
        let path = self.current_path.clone();
        self.load(&path)
    }

    /// Navigates to the parent of the current directory.
    ///
    /// A no-op (not an error) when already at the filesystem root.
    pub fn navigate_up(&mut self) -> CoreResult<()> {
        match parent_of(&self.current_path) {
            Some(parent) => self.load(&parent),
            None => Ok(()),
        }
    }

    /// Sets the selection. No filesystem validation is performed.
    pub fn select(&mut self, path: Option<PathBuf>) {
        self.selected = path;
    }

    /// Returns the directory currently being displayed.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Returns the current listing, sorted by name.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns the selected path, if any.
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Returns the entry matching the selected path, if the selection
    /// still refers to a listed entry.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        let selected = self.selected.as_deref()?;
        self.entries.iter().find(|e| e.path() == selected)
    }
}

//! Pure path and formatting helpers.

use std::path::{Path, PathBuf};

/// Returns `true` if the name starts with `.`.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Returns the last component of `path`, NFC-normalised, or an empty
/// string when the path has no file name (e.g. `/`).
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| crate::nfc_string(&n.to_string_lossy()))
        .unwrap_or_default()
}

/// Returns the parent directory of `path`, or `None` at the filesystem root.
pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent().map(Path::to_path_buf)
}

/// Joins `name` onto `dir` verbatim.
///
/// No traversal sanitisation is performed; `name` may contain `..`
/// segments and they are kept as-is.
pub fn join_name(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Formats a byte count as a human-readable size (B / KB / MB / GB).
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

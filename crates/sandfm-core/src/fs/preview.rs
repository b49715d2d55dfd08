//! Preview classification for selected files.
//!
//! Maps a file path to a preview intent — image, bounded text, or
//! unsupported — without ever touching the directory model. Each call
//! opens its own handle, so classification is safe to run concurrently
//! with directory mutation.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Default cap on loaded text content, in bytes.
pub const MAX_TEXT_PREVIEW_BYTES: usize = 10_000;

/// Image file extensions recognised by [`classify`].
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Text file extensions recognised by [`classify`].
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "json", "xml", "html", "css", "rs", "py", "js", "ts", "c", "h", "cpp", "hpp",
    "java", "go", "rb", "sh", "toml", "yaml", "yml",
];

/// How (or whether) a file's content can be shown in the preview pane.
///
/// Ephemeral — recomputed on every preview request, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// The file is a displayable image. Dimensions are best-effort:
    /// `None` when the format has no enabled decoder or the file is
    /// undecodable.
    Image {
        path: PathBuf,
        dimensions: Option<(u32, u32)>,
    },
    /// The file is text, loaded up to the byte cap as strict UTF-8.
    Text {
        path: PathBuf,
        content: String,
        truncated: bool,
    },
    /// The extension is not previewable (`None` when there is no extension).
    Unsupported { extension: Option<String> },
}

/// Classifies the file at `path` into a [`Preview`] intent.
///
/// Extensions are matched case-insensitively. Text content is loaded up
/// to `max_text_bytes` and must be valid UTF-8 — invalid bytes are a
/// [`CoreError::Decode`], never silently substituted.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if `path` is not a regular file,
/// [`CoreError::Decode`] for non-UTF-8 text content, and
/// [`CoreError::Io`] on read failures.
pub fn classify(path: &Path, max_text_bytes: usize) -> CoreResult<Preview> {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return Ok(Preview::Unsupported { extension: None }),
    };

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        if !path.is_file() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }
        let dimensions = image::image_dimensions(path).ok();
        return Ok(Preview::Image {
            path: path.to_path_buf(),
            dimensions,
        });
    }

    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        return load_text(path, max_text_bytes);
    }

    Ok(Preview::Unsupported {
        extension: Some(ext),
    })
}

fn load_text(path: &Path, max_text_bytes: usize) -> CoreResult<Preview> {
    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreError::NotFound(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;
    if metadata.is_dir() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }

    let file = fs::File::open(path)?;
    let mut buf = Vec::with_capacity(max_text_bytes.min(8192));
    file.take(max_text_bytes as u64).read_to_end(&mut buf)?;

    let content = String::from_utf8(buf)
        .map_err(|e| CoreError::Decode(format!("{}: {e}", path.display())))?;

    Ok(Preview::Text {
        path: path.to_path_buf(),
        content,
        truncated: metadata.len() > max_text_bytes as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    #[test]
    fn classify_text_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.txt");
        stdfs::write(&file, "line1\nline2\n").unwrap();

        match classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap() {
            Preview::Text {
                content, truncated, ..
            } => {
                assert_eq!(content, "line1\nline2\n");
                assert!(!truncated);
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn classify_text_truncates_at_cap() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("big.md");
        stdfs::write(&file, "x".repeat(12_000)).unwrap();

        match classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap() {
            Preview::Text {
                content, truncated, ..
            } => {
                assert_eq!(content.len(), MAX_TEXT_PREVIEW_BYTES);
                assert!(truncated);
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn classify_text_exactly_at_cap_not_truncated() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("edge.txt");
        stdfs::write(&file, "y".repeat(MAX_TEXT_PREVIEW_BYTES)).unwrap();

        match classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap() {
            Preview::Text { truncated, .. } => assert!(!truncated),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn classify_non_utf8_text_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bad.txt");
        stdfs::write(&file, [0xff, 0xfe, 0x41]).unwrap();

        let result = classify(&file, MAX_TEXT_PREVIEW_BYTES);
        assert!(matches!(result, Err(CoreError::Decode(_))));
    }

    #[test]
    fn classify_image_extension_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("photo.JPG");
        stdfs::write(&file, "not really a jpeg").unwrap();

        match classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap() {
            Preview::Image { dimensions, .. } => assert!(dimensions.is_none()),
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn classify_png_reads_dimensions() {
        // Minimal valid 1x1 PNG.
        const PNG_1X1: &[u8] = &[
            0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9c, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00,
            0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
        ];
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("dot.png");
        stdfs::write(&file, PNG_1X1).unwrap();

        match classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap() {
            Preview::Image { dimensions, .. } => assert_eq!(dimensions, Some((1, 1))),
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn classify_unknown_extension_unsupported() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("archive.zip");
        stdfs::write(&file, "zzz").unwrap();

        assert_eq!(
            classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap(),
            Preview::Unsupported {
                extension: Some("zip".to_string())
            }
        );
    }

    #[test]
    fn classify_no_extension_unsupported() {
        assert_eq!(
            classify(Path::new("/tmp/Makefile-less"), MAX_TEXT_PREVIEW_BYTES).unwrap(),
            Preview::Unsupported { extension: None }
        );
    }

    #[test]
    fn classify_missing_text_file_is_error() {
        let result = classify(Path::new("/nonexistent/file.txt"), MAX_TEXT_PREVIEW_BYTES);
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn classify_missing_image_file_is_error() {
        let result = classify(Path::new("/nonexistent/pic.png"), MAX_TEXT_PREVIEW_BYTES);
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn classify_unicode_text_content() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("hangul.txt");
        stdfs::write(&file, "안녕하세요").unwrap();

        match classify(&file, MAX_TEXT_PREVIEW_BYTES).unwrap() {
            Preview::Text { content, .. } => assert_eq!(content, "안녕하세요"),
            other => panic!("expected Text, got {other:?}"),
        }
    }
}

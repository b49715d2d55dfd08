//! Platform command dispatch.
//!
//! [`Explorer`] is the single owner of the directory model. The session
//! loop feeds it parsed commands one at a time; the view layer calls
//! its navigation methods on user gestures. Each command is a complete
//! transaction — nothing is carried between dispatches.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::CoreResult;
use crate::fs::path::join_name;
use crate::fs::preview::{classify, Preview};
use crate::nav::model::DirectoryModel;
use crate::protocol::{Command, OutboundMessage};
use crate::report::build_state;

/// Owns the directory model and executes platform commands against it.
pub struct Explorer {
    model: DirectoryModel,
    max_text_bytes: usize,
}

impl Explorer {
    /// Creates an explorer rooted at `start_dir`.
    ///
    /// # Errors
    ///
    /// Fails when `start_dir` cannot be listed.
    pub fn new(start_dir: &Path, config: &Config) -> CoreResult<Self> {
        Ok(Self {
            model: DirectoryModel::from_dir(start_dir)?,
            max_text_bytes: config.preview.max_text_bytes,
        })
    }

    /// Returns the current model snapshot.
    pub fn model(&self) -> &DirectoryModel {
        &self.model
    }

    /// Loads `path` as the new current directory.
    pub fn navigate(&mut self, path: &Path) -> CoreResult<()> {
        self.model.load(path)
    }

    /// Navigates to the parent directory; no-op at the root.
    pub fn navigate_up(&mut self) -> CoreResult<()> {
        self.model.navigate_up()
    }

    /// Sets the selection.
    pub fn select(&mut self, path: Option<PathBuf>) {
        self.model.select(path);
    }

    /// Classifies `path` for the preview pane, bounded by the configured
    /// text cap.
    pub fn classify_for_preview(&self, path: &Path) -> CoreResult<Preview> {
        classify(path, self.max_text_bytes)
    }

    /// Builds the current state snapshot.
    pub fn state(&self) -> OutboundMessage {
        build_state(&self.model)
    }

    /// Executes one platform command.
    ///
    /// Returns the terminal message for the command, or `None` when the
    /// command does not apply to the current selection (no reply at
    /// all). Failures are reported as `error` messages, never
    /// propagated — the session must survive anything the platform
    /// sends.
    pub fn dispatch(&mut self, command: Command) -> Option<OutboundMessage> {
        match command {
            Command::Upload { filename, data } => Some(self.handle_upload(filename, data)),
            Command::DownloadRequest => self.handle_download(),
            Command::Delete => self.handle_delete(),
        }
    }

    fn handle_upload(
        &mut self,
        filename: Option<String>,
        data: Option<String>,
    ) -> OutboundMessage {
        let (filename, data) = match (filename, data) {
            (Some(f), Some(d)) => (f, d),
            _ => {
                return OutboundMessage::Error {
                    message: "upload requires filename and data".to_string(),
                }
            }
        };

        let bytes = match STANDARD.decode(&data) {
            Ok(b) => b,
            Err(e) => {
                return OutboundMessage::Error {
                    message: format!("invalid upload payload: {e}"),
                }
            }
        };

        let target = join_name(self.model.current_path(), &filename);
        if let Err(e) = std::fs::write(&target, &bytes) {
            return OutboundMessage::Error {
                message: format!("failed to write {}: {e}", target.display()),
            };
        }
        debug!(path = %target.display(), bytes = bytes.len(), "upload written");

        if let Err(e) = self.model.refresh() {
            warn!(error = %e, "reload after upload failed");
            return OutboundMessage::Error {
                message: format!("failed to reload after upload: {e}"),
            };
        }
        OutboundMessage::UploadComplete { filename }
    }

    fn handle_download(&self) -> Option<OutboundMessage> {
        let entry = self.model.selected_entry()?;
        if entry.is_dir() {
            return None;
        }
        match std::fs::read(entry.path()) {
            Ok(data) => {
                debug!(path = %entry.path().display(), bytes = data.len(), "download read");
                Some(OutboundMessage::DownloadData {
                    filename: entry.name().to_string(),
                    data,
                })
            }
            Err(e) => Some(OutboundMessage::Error {
                message: format!("failed to read {}: {e}", entry.path().display()),
            }),
        }
    }

    fn handle_delete(&mut self) -> Option<OutboundMessage> {
        let path = self.model.selected_path()?.to_path_buf();

        // remove_dir refuses non-empty directories; that refusal is
        // reported, not worked around.
        let result = if path.is_dir() {
            std::fs::remove_dir(&path)
        } else {
            std::fs::remove_file(&path)
        };
        if let Err(e) = result {
            return Some(OutboundMessage::Error {
                message: format!("failed to delete {}: {e}", path.display()),
            });
        }
        debug!(path = %path.display(), "deleted");

        if let Err(e) = self.model.refresh() {
            warn!(error = %e, "reload after delete failed");
            return Some(OutboundMessage::Error {
                message: format!("failed to reload after delete: {e}"),
            });
        }
        Some(OutboundMessage::DeleteComplete)
    }
}

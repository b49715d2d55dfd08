//! Remote action policy.
//!
//! The platform is told, with every state message, which actions it may
//! issue against the current selection. The rule set is a pure function
//! of selection state and is re-derived on every emission — nothing here
//! is cached across mutations.

use serde::{Deserialize, Serialize};

use crate::fs::entry::FileEntry;

/// An action the platform is permitted to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteAction {
    Upload,
    Download,
    Delete,
}

impl RemoteAction {
    /// Wire identifier for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Delete => "delete",
        }
    }
}

/// Derives the permitted actions for the given selection.
///
/// `upload` is always available. A selected file adds `download` and
/// `delete`; a selected directory adds `delete` only. A dangling or
/// absent selection permits nothing beyond `upload`.
pub fn available_actions(selected: Option<&FileEntry>) -> Vec<RemoteAction> {
    let mut actions = vec![RemoteAction::Upload];
    match selected {
        Some(entry) if entry.is_dir() => {
            actions.push(RemoteAction::Delete);
        }
        Some(_) => {
            actions.push(RemoteAction::Download);
            actions.push(RemoteAction::Delete);
        }
        None => {}
    }
    actions
}

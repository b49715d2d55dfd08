//! SandFM core library — UI-agnostic sandboxed file browser logic.
//!
//! `sandfm-core` implements the platform protocol and directory state
//! machine behind SandFM. It is intentionally decoupled from any UI
//! framework: the binary frontend (`sandfm-app`) wires it to stdin and
//! stdout, and a view layer drives the same [`Explorer`] methods on
//! user gestures.
//!
//! # Modules
//!
//! - [`fs`] — File system abstractions: [`FileEntry`], path helpers, preview classification.
//! - [`nav`] — Navigation state: the [`DirectoryModel`] listing-plus-selection snapshot.
//! - [`action`] — Remote action policy derived from the selection.
//! - [`protocol`] — Wire types for the line-delimited JSON platform protocol.
//! - [`dispatch`] — The [`Explorer`] command dispatcher.
//! - [`report`] — State snapshot construction.
//! - [`ipc`] — Background reader task, message writer, and session loop.
//! - [`config`] — User-facing configuration (TOML-based settings).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fs;
pub mod ipc;
pub mod nav;
pub mod protocol;
pub mod report;

pub use action::{available_actions, RemoteAction};
pub use config::settings::Config;
pub use dispatch::Explorer;
pub use error::{CoreError, CoreResult};
pub use fs::entry::FileEntry;
pub use fs::preview::{classify, Preview, MAX_TEXT_PREVIEW_BYTES};
pub use ipc::{run_session, spawn_reader, MessageWriter};
pub use nav::model::DirectoryModel;
pub use protocol::{parse_line, Command, OutboundMessage};
pub use report::build_state;

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which causes Korean Hangul
/// characters to appear as individual Jamo. This helper re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}

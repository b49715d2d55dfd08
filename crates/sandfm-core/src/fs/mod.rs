//! File system abstractions for SandFM.
//!
//! This module provides the listing entry type ([`entry::FileEntry`]),
//! pure path helpers ([`path`]), and preview classification
//! ([`preview::classify`]).

pub mod entry;
pub mod path;
pub mod preview;

pub use preview::{Preview, MAX_TEXT_PREVIEW_BYTES};

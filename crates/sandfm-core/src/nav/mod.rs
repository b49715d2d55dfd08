//! Navigation state for SandFM.
//!
//! This module contains [`model::DirectoryModel`], the single source of
//! truth for "current directory + current selection" shared by the
//! platform dispatcher and the view layer.

pub mod model;

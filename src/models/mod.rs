//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileNode`], [`ContentIndex`], [`EntryContent`], [`FileType`] - Archive tree and content
//! - [`Selection`], [`ViewPhase`] - View management

mod explorer;
mod filesystem;

pub use explorer::{Selection, ViewPhase};
pub use filesystem::{ContentIndex, EntryContent, FileNode, FileType};

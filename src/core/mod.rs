//! Core business logic for the archive viewer.
//!
//! This module provides:
//! - [`process_archive`] - archive bytes to file tree and content index
//! - [`AppState`] and [`Action`] - view state, its transitions and the
//!   search-filtered tree

mod archive;
pub mod classify;
mod content;
pub mod error;
mod pipeline;
mod search;
mod state;
mod tree;

pub use archive::ZipDecoder;
pub use pipeline::process_archive;
pub use state::{Action, AppState};

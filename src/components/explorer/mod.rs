//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Search box above the file tree
//! - [`TreeNodes`] - Recursive, collapsible tree of folders and files

#[allow(clippy::module_inception)]
mod explorer;
mod tree;

pub use explorer::Explorer;
pub use tree::TreeNodes;

//! Content viewer components.
//!
//! - [`Viewer`] - Shows the selected entry by its file type
//! - [`MarkdownView`] - Rendered Markdown with inline diagrams
//! - [`DiagramBlock`] - One asynchronously rendered diagram

mod diagram;
mod markdown;
#[allow(clippy::module_inception)]
mod viewer;

pub use diagram::DiagramBlock;
pub use markdown::MarkdownView;
pub use viewer::Viewer;

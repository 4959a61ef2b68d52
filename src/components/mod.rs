//! UI components built with Leptos.
//!
//! - [`FileUpload`] - Archive picker with loading and error display
//! - [`Explorer`] - Searchable file tree
//! - [`Viewer`] - Content viewer for markdown, images and text
//! - [`Lightbox`] - Modal view of a rendered diagram
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;
mod lightbox;
mod upload;
pub mod viewer;

pub use explorer::Explorer;
pub use lightbox::Lightbox;
pub use upload::FileUpload;
pub use viewer::Viewer;

//! Utility modules for rendering and browser access.
//!
//! Provides:
//! - [`render_blocks`] - Markdown rendering with XSS sanitization
//! - [`split_matches`], [`highlight_matches`] - search-query marking
//! - [`PrismHighlighter`] and [`MermaidRenderer`] - Prism.js and Mermaid.js bindings

pub mod diagram;
pub mod dom;
mod highlight;
mod markdown;
mod syntax;

pub use diagram::{DiagramState, MermaidRenderer};
pub use highlight::{highlight_matches, split_matches};
pub use markdown::{DocumentBlock, RenderOptions, render_blocks};
pub use syntax::PrismHighlighter;

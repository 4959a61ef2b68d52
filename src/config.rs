//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar and upload screen.
pub const APP_NAME: &str = "Documentation";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Archive Classification
// =============================================================================

/// Entry path prefixes that are never shown (macOS resource forks).
pub const IGNORED_PREFIXES: &[&str] = &["__MACOSX/"];

/// Final path segments that are never shown, wherever they appear.
pub const IGNORED_FILENAMES: &[&str] = &[".DS_Store"];

/// Extensions rendered as Markdown (compared lowercased, with the dot).
pub const MARKUP_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// Image extensions and the MIME type used for their data URIs.
pub const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
];

/// MIME type for anything that is not a recognized image.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

// =============================================================================
// Upload
// =============================================================================

/// `accept` attribute of the archive file picker.
pub const ACCEPTED_ARCHIVE_TYPES: &str = ".zip,application/zip,application/x-zip-compressed";

/// The one message shown for any archive that cannot be processed.
pub const ARCHIVE_ERROR_MESSAGE: &str =
    "Failed to process ZIP file. Please ensure it is a valid and uncorrupted file.";

// =============================================================================
// Rendering
// =============================================================================

/// Diagram rendering configuration.
pub mod diagram {
    /// Fenced code block language tag holding a diagram definition.
    pub const LANGUAGE: &str = "mermaid";
    /// Prefix for the element ids handed to `mermaid.render`.
    pub const ID_PREFIX: &str = "mermaid-svg-";
    /// Mermaid theme.
    pub const THEME: &str = "dark";
    /// Mermaid security level.
    pub const SECURITY_LEVEL: &str = "loose";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Horizontal indentation per explorer tree level, in pixels.
pub const TREE_INDENT_PX: usize = 20;

/// Base left padding of an explorer row, in pixels.
pub const TREE_BASE_PADDING_PX: usize = 8;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

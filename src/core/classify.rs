//! Archive entry classification.
//!
//! Pure functions deciding whether an entry is shown at all and how its
//! content is decoded and presented.

use crate::config::{
    DEFAULT_MIME_TYPE, IGNORED_FILENAMES, IGNORED_PREFIXES, IMAGE_TYPES, MARKUP_EXTENSIONS,
};

/// Check if an entry is archive metadata that never reaches the tree.
pub fn is_ignored_entry(path: &str) -> bool {
    if IGNORED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return true;
    }
    let file_name = path.rsplit('/').next().unwrap_or(path);
    IGNORED_FILENAMES.contains(&file_name)
}

/// Check if an entry is Markdown.
pub fn is_markup_entry(path: &str) -> bool {
    let lower = path.to_lowercase();
    MARKUP_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Check if an entry is a recognized image.
pub fn is_image_entry(path: &str) -> bool {
    image_mime_type(path).is_some()
}

/// MIME type used when embedding an entry as a data URI.
pub fn mime_type_for(path: &str) -> &'static str {
    image_mime_type(path).unwrap_or(DEFAULT_MIME_TYPE)
}

fn image_mime_type(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;
    // "dir.png/readme" has no image extension
    if ext.contains('/') {
        return None;
    }
    let ext = ext.to_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

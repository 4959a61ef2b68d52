//! Explorer-related data types for the file browser UI.

use super::{ContentIndex, EntryContent};

/// The entry currently shown in the viewer.
///
/// Holds only the path; content is always looked up in the
/// [`ContentIndex`] so the index stays the single source of truth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub path: String,
}

impl Selection {
    /// Select `path` if the index holds content for it.
    pub fn lookup(index: &ContentIndex, path: &str) -> Option<Self> {
        index.contains(path).then(|| Self {
            path: path.to_string(),
        })
    }

    /// Content of the selected entry.
    pub fn content<'a>(&self, index: &'a ContentIndex) -> Option<&'a EntryContent> {
        index.get(&self.path)
    }
}

/// Lifecycle of the main view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing loaded, upload screen shown
    #[default]
    Empty,
    /// An archive is being processed
    Loading,
    /// Tree and content index are available
    Ready,
    /// The last upload failed
    Failed,
}

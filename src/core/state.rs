//! Application state and its transitions.
//!
//! [`AppState`] is a plain value changed only through [`AppState::apply`].
//! The UI keeps it in a single signal; everything here is synchronous and
//! testable without a browser.

use super::error::ProcessingError;
use super::pipeline::ProcessedArchive;
use super::search::filter_tree;
use crate::models::{ContentIndex, EntryContent, FileNode, Selection, ViewPhase};

/// Identifies one upload. Results tagged with an older generation are stale.
pub type Generation = u64;

/// State transitions.
#[derive(Debug)]
pub enum Action {
    /// A new archive was picked; clears everything and starts loading
    BeginUpload,
    /// Processing of the upload started at `generation` finished
    UploadFinished {
        generation: Generation,
        result: Result<ProcessedArchive, ProcessingError>,
    },
    /// Show a file; ignored if the content index has no such path
    SelectFile(String),
    /// Back to the upload screen
    Reset,
    /// Show a rendered diagram (SVG markup) in the lightbox
    OpenLightbox(String),
    CloseLightbox,
    SetSidebarOpen(bool),
    SetSearchQuery(String),
}

/// Everything the viewer displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub tree: Vec<FileNode>,
    pub contents: ContentIndex,
    pub selection: Option<Selection>,
    pub loading: bool,
    pub error: Option<String>,
    pub lightbox_svg: Option<String>,
    pub sidebar_open: bool,
    pub search_query: String,
    pub phase: ViewPhase,
    /// Generation of the most recently started upload
    pub generation: Generation,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition.
    ///
    /// Returns `false` when the action was dropped (stale upload result,
    /// selection of an unknown path).
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::BeginUpload => {
                let generation = self.generation + 1;
                *self = Self {
                    loading: true,
                    phase: ViewPhase::Loading,
                    generation,
                    ..Self::default()
                };
                true
            }
            Action::UploadFinished { generation, result } => {
                if generation != self.generation || !self.loading {
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(archive) => {
                        self.tree = archive.tree;
                        self.contents = archive.contents;
                        self.phase = ViewPhase::Ready;
                    }
                    Err(e) => {
                        self.error = Some(e.to_string());
                        self.phase = ViewPhase::Failed;
                    }
                }
                true
            }
            Action::SelectFile(path) => match Selection::lookup(&self.contents, &path) {
                Some(selection) => {
                    self.selection = Some(selection);
                    self.sidebar_open = false;
                    true
                }
                None => false,
            },
            Action::Reset => {
                // Keep counting so an upload still in flight stays stale
                let generation = self.generation + 1;
                *self = Self {
                    generation,
                    ..Self::default()
                };
                true
            }
            Action::OpenLightbox(svg) => {
                self.lightbox_svg = Some(svg);
                true
            }
            Action::CloseLightbox => {
                self.lightbox_svg = None;
                true
            }
            Action::SetSidebarOpen(open) => {
                self.sidebar_open = open;
                true
            }
            Action::SetSearchQuery(query) => {
                self.search_query = query;
                true
            }
        }
    }

    /// The tree as shown in the explorer, filtered by the search query.
    pub fn visible_tree(&self) -> Vec<FileNode> {
        filter_tree(&self.tree, &self.contents, &self.search_query)
    }

    /// Path and content of the selected entry.
    pub fn selected(&self) -> Option<(&str, &EntryContent)> {
        let selection = self.selection.as_ref()?;
        let content = selection.content(&self.contents)?;
        Some((selection.path.as_str(), content))
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::classify::{is_image_entry, is_markup_entry};

// =============================================================================
// File Tree
// =============================================================================

/// A node in the archive's file tree.
///
/// `path` is the full slash-delimited path from the archive root. Folder
/// paths end with `/`, so a folder never shares a key with a file of the
/// same name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    Folder {
        name: String,
        path: String,
        children: Vec<FileNode>,
    },
    File {
        name: String,
        path: String,
    },
}

impl FileNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        FileNode::File {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::Folder { name, .. } | FileNode::File { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FileNode::Folder { path, .. } | FileNode::File { path, .. } => path,
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, FileNode::Folder { .. })
    }

    /// Children of a folder (files have none).
    pub fn children(&self) -> &[FileNode] {
        match self {
            FileNode::Folder { children, .. } => children,
            FileNode::File { .. } => &[],
        }
    }
}

// =============================================================================
// Content Index
// =============================================================================

/// Decoded content of one archive entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryContent {
    /// UTF-8 text of a non-image entry.
    Text(String),
    /// `data:` URI carrying a base64-encoded image.
    DataUri(String),
}

impl EntryContent {
    pub fn as_str(&self) -> &str {
        match self {
            EntryContent::Text(s) | EntryContent::DataUri(s) => s,
        }
    }

    /// Text content, `None` for images.
    pub fn text(&self) -> Option<&str> {
        match self {
            EntryContent::Text(s) => Some(s),
            EntryContent::DataUri(_) => None,
        }
    }
}

/// Path-keyed content of every file in the current archive.
///
/// Keys are exactly the `path` values of the tree's [`FileNode::File`]
/// nodes. Built once per upload and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentIndex {
    entries: HashMap<String, EntryContent>,
}

impl ContentIndex {
    pub fn get(&self, path: &str) -> Option<&EntryContent> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, EntryContent)> for ContentIndex {
    fn from_iter<I: IntoIterator<Item = (String, EntryContent)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// File Types
// =============================================================================

/// How the viewer presents an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    Image,
    Text,
}

impl FileType {
    /// Detect file type from path extension
    pub fn from_path(path: &str) -> Self {
        if is_markup_entry(path) {
            Self::Markdown
        } else if is_image_entry(path) {
            Self::Image
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_path("docs/hello.md"), FileType::Markdown);
        assert_eq!(FileType::from_path("docs/GUIDE.Markdown"), FileType::Markdown);
        assert_eq!(FileType::from_path("images/photo.png"), FileType::Image);
        assert_eq!(FileType::from_path("images/photo.JPG"), FileType::Image);
        assert_eq!(FileType::from_path("src/main.rs"), FileType::Text);
        assert_eq!(FileType::from_path("Makefile"), FileType::Text);
    }

    #[test]
    fn test_node_accessors() {
        let folder = FileNode::Folder {
            name: "docs".to_string(),
            path: "docs/".to_string(),
            children: vec![FileNode::file("a.md", "docs/a.md")],
        };

        assert!(folder.is_folder());
        assert_eq!(folder.name(), "docs");
        assert_eq!(folder.path(), "docs/");
        assert_eq!(folder.children().len(), 1);
        assert!(folder.children()[0].children().is_empty());
    }

    #[test]
    fn test_node_serializes_with_type_tag() {
        let node = FileNode::Folder {
            name: "docs".to_string(),
            path: "docs/".to_string(),
            children: vec![FileNode::file("a.md", "docs/a.md")],
        };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "folder");
        assert_eq!(json["children"][0]["type"], "file");
        assert_eq!(json["children"][0]["path"], "docs/a.md");

        let back: FileNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_content_index_lookup() {
        let index: ContentIndex = [
            ("a.md".to_string(), EntryContent::Text("# A".to_string())),
            (
                "b.png".to_string(),
                EntryContent::DataUri("data:image/png;base64,AA==".to_string()),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 2);
        assert!(index.contains("a.md"));
        assert_eq!(index.get("a.md").and_then(|c| c.text()), Some("# A"));
        assert_eq!(index.get("b.png").and_then(|c| c.text()), None);
        assert!(index.get("missing").is_none());
    }
}

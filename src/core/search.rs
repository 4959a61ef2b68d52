//! Tree search.
//!
//! Prunes the file tree to entries whose name, or text content, contains
//! the query. Folders survive when they match or contain a match. A
//! folder that matches by name but holds no matching entry keeps its
//! original children, so no folder is ever left empty.

use super::classify::is_image_entry;
use crate::models::{ContentIndex, FileNode};

/// Filter `tree` by a case-insensitive substring query.
///
/// An empty query returns the tree unchanged. Inputs are never mutated.
pub fn filter_tree(tree: &[FileNode], contents: &ContentIndex, query: &str) -> Vec<FileNode> {
    if query.is_empty() {
        return tree.to_vec();
    }
    let needle = query.to_lowercase();
    filter_nodes(tree, contents, &needle)
}

fn filter_nodes(nodes: &[FileNode], contents: &ContentIndex, needle: &str) -> Vec<FileNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, contents, needle))
        .collect()
}

fn filter_node(node: &FileNode, contents: &ContentIndex, needle: &str) -> Option<FileNode> {
    match node {
        FileNode::Folder {
            name,
            path,
            children,
        } => {
            let matching = filter_nodes(children, contents, needle);
            let children = if !matching.is_empty() {
                matching
            } else if name_matches(name, needle) {
                children.clone()
            } else {
                return None;
            };
            Some(FileNode::Folder {
                name: name.clone(),
                path: path.clone(),
                children,
            })
        }
        FileNode::File { name, path } => {
            (name_matches(name, needle) || content_matches(path, contents, needle))
                .then(|| node.clone())
        }
    }
}

fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

fn content_matches(path: &str, contents: &ContentIndex, needle: &str) -> bool {
    if is_image_entry(path) {
        return false;
    }
    contents
        .get(path)
        .and_then(|content| content.text())
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

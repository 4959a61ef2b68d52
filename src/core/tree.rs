//! File tree construction.
//!
//! Builds the ordered [`FileNode`] hierarchy from the flat entry map.
//! Folders are never taken from directory entries; they are created from
//! the prefixes of file paths, once per distinct prefix.

use std::cmp::Ordering;
use std::collections::HashMap;

use icu_collator::{Collator, CollatorOptions, Strength};

use super::archive::{ArchiveEntry, EntryMap, file_entries};
use crate::models::FileNode;

/// Build the sorted file tree for every file entry.
pub fn build_tree<E: ArchiveEntry>(entries: &EntryMap<E>) -> Vec<FileNode> {
    let mut root = Level::default();
    for (path, _) in file_entries(entries) {
        root.insert(path);
    }

    let mut tree = root.into_nodes();
    sort_tree(&mut tree);
    tree
}

/// Sort every level: folders first, then files, each by name.
pub fn sort_tree(nodes: &mut [FileNode]) {
    for node in nodes.iter_mut() {
        if let FileNode::Folder { children, .. } = node {
            sort_tree(children);
        }
    }
    nodes.sort_by(compare_nodes);
}

fn compare_nodes(a: &FileNode, b: &FileNode) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    }
}

thread_local! {
    /// Root-locale collator, built once per thread from compiled data.
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Locale-aware comparison: accents and case are secondary to the base
/// letters, and names differing only in case put lowercase first.
/// Names the collator considers equal fall back to code point order.
fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        })
        .then_with(|| a.cmp(b))
}

/// One level of the tree under construction.
#[derive(Default)]
struct Level {
    folders: Vec<PendingFolder>,
    /// Folder path (with trailing `/`) to its position in `folders`
    by_path: HashMap<String, usize>,
    files: Vec<FileNode>,
}

struct PendingFolder {
    name: String,
    path: String,
    level: Level,
}

impl Level {
    fn insert(&mut self, full_path: &str) {
        let trimmed = full_path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();
        let Some((file_name, folders)) = segments.split_last() else {
            return;
        };

        let mut current = self;
        let mut prefix = String::new();
        for segment in folders.iter().filter(|segment| !segment.is_empty()) {
            prefix.push_str(segment);
            prefix.push('/');
            current = current.folder(segment, &prefix);
        }

        current.files.push(FileNode::file(*file_name, full_path));
    }

    /// Get the child folder at `path`, creating it on first use.
    fn folder(&mut self, name: &str, path: &str) -> &mut Level {
        let index = match self.by_path.get(path) {
            Some(&index) => index,
            None => {
                self.folders.push(PendingFolder {
                    name: name.to_string(),
                    path: path.to_string(),
                    level: Level::default(),
                });
                let index = self.folders.len() - 1;
                self.by_path.insert(path.to_string(), index);
                index
            }
        };
        &mut self.folders[index].level
    }

    fn into_nodes(self) -> Vec<FileNode> {
        self.folders
            .into_iter()
            .map(|folder| FileNode::Folder {
                name: folder.name,
                path: folder.path,
                children: folder.level.into_nodes(),
            })
            .chain(self.files)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::archive::test_support::MockEntry;

    fn entries(paths: &[&str]) -> EntryMap<MockEntry> {
        paths
            .iter()
            .map(|p| {
                let entry = if p.ends_with('/') {
                    MockEntry::dir()
                } else {
                    MockEntry::file(b"")
                };
                (p.to_string(), entry)
            })
            .collect()
    }

    fn names(nodes: &[FileNode]) -> Vec<&str> {
        nodes.iter().map(FileNode::name).collect()
    }

    fn collect_file_paths(nodes: &[FileNode], out: &mut Vec<String>) {
        for node in nodes {
            match node {
                FileNode::Folder { children, .. } => collect_file_paths(children, out),
                FileNode::File { path, .. } => out.push(path.clone()),
            }
        }
    }

    #[test]
    fn test_build_nested_tree() {
        let tree = build_tree(&entries(&["docs/readme.md", "docs/img/logo.png"]));

        assert_eq!(
            tree,
            vec![FileNode::Folder {
                name: "docs".to_string(),
                path: "docs/".to_string(),
                children: vec![
                    FileNode::Folder {
                        name: "img".to_string(),
                        path: "docs/img/".to_string(),
                        children: vec![FileNode::file("logo.png", "docs/img/logo.png")],
                    },
                    FileNode::file("readme.md", "docs/readme.md"),
                ],
            }]
        );
    }

    #[test]
    fn test_folder_prefixes_created_once() {
        let tree = build_tree(&entries(&["a/b/1.md", "a/b/2.md", "a/c.md", "a/b/d/3.md"]));

        assert_eq!(tree.len(), 1);
        let a = &tree[0];
        assert_eq!(names(a.children()), ["b", "c.md"]);
        let b = &a.children()[0];
        assert_eq!(names(b.children()), ["d", "1.md", "2.md"]);
        assert_eq!(b.children()[0].path(), "a/b/d/");
    }

    #[test]
    fn test_folders_before_files_and_case_order() {
        let tree = build_tree(&entries(&[
            "zeta.md", "Alpha.md", "alpha.md", "beta/x.md", "Gamma/y.md", "_notes.md",
        ]));

        assert_eq!(
            names(&tree),
            ["beta", "Gamma", "_notes.md", "alpha.md", "Alpha.md", "zeta.md"]
        );
    }

    #[test]
    fn test_names_use_locale_order() {
        let tree = build_tree(&entries(&[
            "1.md", "_notes.md", "Zebra.md", "Éclair.md", "~tmp.md", "alpha.md",
        ]));

        assert_eq!(
            names(&tree),
            ["_notes.md", "~tmp.md", "1.md", "alpha.md", "Éclair.md", "Zebra.md"]
        );
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        assert_eq!(compare_names("éclair", "eclair"), Ordering::Greater);
        assert_eq!(compare_names("éclair", "fig"), Ordering::Less);
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_empty_segments_do_not_create_folders() {
        let tree = build_tree(&entries(&["a//b.md", "a/c.md"]));

        assert_eq!(names(&tree), ["a"]);
        assert_eq!(tree[0].path(), "a/");
        assert_eq!(names(tree[0].children()), ["b.md", "c.md"]);
        assert_eq!(tree[0].children()[0].path(), "a//b.md");
    }

    #[test]
    fn test_every_file_appears_once() {
        let paths = ["x/1.md", "x/y/2.md", "3.md", "x/y/z/4.png", "x/y/5.txt"];
        let tree = build_tree(&entries(&paths));

        let mut found = Vec::new();
        collect_file_paths(&tree, &mut found);
        found.sort();
        let mut expected: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_directory_entries_and_empty_paths_skipped() {
        let tree = build_tree(&entries(&["empty/", "docs/", "docs/a.md", ""]));

        assert_eq!(names(&tree), ["docs"]);
        assert_eq!(names(tree[0].children()), ["a.md"]);
    }

    #[test]
    fn test_empty_archive_gives_empty_tree() {
        assert!(build_tree(&entries(&[])).is_empty());
        assert!(build_tree(&entries(&["only/", "dirs/"])).is_empty());
    }

    #[test]
    fn test_file_and_folder_with_same_name() {
        let tree = build_tree(&entries(&["notes", "notes/today.md"]));

        assert_eq!(tree.len(), 2);
        assert!(tree[0].is_folder());
        assert_eq!(tree[0].path(), "notes/");
        assert!(!tree[1].is_folder());
        assert_eq!(tree[1].path(), "notes");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut tree = build_tree(&entries(&["b/a.md", "B.md", "a/z.md", "a/A.md", "c.txt"]));
        let once = tree.clone();
        sort_tree(&mut tree);
        assert_eq!(tree, once);
    }

    #[test]
    fn test_order_independent_of_insertion() {
        let forward = ["m/1.md", "a.md", "m/0.md", "b/", "z/q.md"];
        let mut shuffled = forward;
        shuffled.reverse();

        let mut left = Level::default();
        for p in forward {
            left.insert(p);
        }
        let mut right = Level::default();
        for p in shuffled {
            right.insert(p);
        }
        let mut left = left.into_nodes();
        let mut right = right.into_nodes();
        sort_tree(&mut left);
        sort_tree(&mut right);
        assert_eq!(left, right);
    }
}

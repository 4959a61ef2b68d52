//! Archive processing pipeline.
//!
//! Decode, drop ignored entries, then build the tree and the content
//! index side by side. Either both come back or nothing does.

use super::archive::ArchiveDecoder;
use super::classify::is_ignored_entry;
use super::content::materialize;
use super::error::ProcessingError;
use super::tree::build_tree;
use crate::models::{ContentIndex, FileNode};

/// Result of processing one uploaded archive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessedArchive {
    pub tree: Vec<FileNode>,
    pub contents: ContentIndex,
}

/// Turn raw archive bytes into a file tree and content index.
///
/// Any failure (unreadable container, a single undecodable entry) is
/// reported as one [`ProcessingError`].
pub async fn process_archive<D: ArchiveDecoder>(
    decoder: &D,
    bytes: Vec<u8>,
) -> Result<ProcessedArchive, ProcessingError> {
    let result = run(decoder, bytes).await;

    #[cfg(target_arch = "wasm32")]
    if let Err(ref e) = result {
        web_sys::console::error_1(&format!("Archive processing failed: {}", e.cause()).into());
    }

    result
}

async fn run<D: ArchiveDecoder>(
    decoder: &D,
    bytes: Vec<u8>,
) -> Result<ProcessedArchive, ProcessingError> {
    let mut entries = decoder.decode(bytes).await?;
    entries.retain(|path, _| !is_ignored_entry(path));

    let (tree, contents) =
        futures::join!(async { build_tree(&entries) }, materialize(&entries));

    Ok(ProcessedArchive {
        tree,
        contents: contents?,
    })
}

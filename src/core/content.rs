//! Content materialization.
//!
//! Decodes every file entry into the [`ContentIndex`]: images become
//! base64 data URIs, everything else UTF-8 text.

use futures::future::try_join_all;

use super::archive::{ArchiveEntry, EntryMap, file_entries};
use super::classify::{is_image_entry, mime_type_for};
use super::error::ArchiveError;
use crate::models::{ContentIndex, EntryContent};

/// Decode all file entries concurrently.
///
/// Every decode is started before any is awaited. The first failure
/// fails the whole call; no partial index is returned.
pub async fn materialize<E: ArchiveEntry>(
    entries: &EntryMap<E>,
) -> Result<ContentIndex, ArchiveError> {
    let decodes = file_entries(entries).map(|(path, entry)| decode_entry(path, entry));
    let decoded = try_join_all(decodes).await?;
    Ok(decoded.into_iter().collect())
}

async fn decode_entry<E: ArchiveEntry>(
    path: &str,
    entry: &E,
) -> Result<(String, EntryContent), ArchiveError> {
    let content = if is_image_entry(path) {
        let payload = entry.read_base64().await?;
        EntryContent::DataUri(data_uri(mime_type_for(path), &payload))
    } else {
        EntryContent::Text(entry.read_text().await?)
    };
    Ok((path.to_string(), content))
}

fn data_uri(mime: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime, base64_payload)
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    use super::*;
    use crate::core::archive::test_support::MockEntry;

    fn map(items: Vec<(&str, MockEntry)>) -> EntryMap<MockEntry> {
        items
            .into_iter()
            .map(|(path, entry)| (path.to_string(), entry))
            .collect()
    }

    #[tokio::test]
    async fn test_text_and_images() {
        let png = [0x89, b'P', b'N', b'G', 0, 255];
        let entries = map(vec![
            ("docs/", MockEntry::dir()),
            ("docs/readme.md", MockEntry::file(b"# Hello")),
            ("docs/logo.png", MockEntry::file(&png)),
        ]);

        let index = materialize(&entries).await.unwrap();

        assert_eq!(index.len(), 2);
        assert!(!index.contains("docs/"));
        assert_eq!(
            index.get("docs/readme.md"),
            Some(&EntryContent::Text("# Hello".to_string()))
        );

        let uri = index.get("docs/logo.png").unwrap().as_str();
        let payload = uri
            .strip_prefix("data:image/png;base64,")
            .expect("png data uri prefix");
        assert_eq!(STANDARD.decode(payload).unwrap(), png);
    }

    #[tokio::test]
    async fn test_svg_uses_svg_mime() {
        let entries = map(vec![("icon.SVG", MockEntry::file(b"<svg/>"))]);
        let index = materialize(&entries).await.unwrap();

        assert!(
            index
                .get("icon.SVG")
                .unwrap()
                .as_str()
                .starts_with("data:image/svg+xml;base64,")
        );
    }

    #[tokio::test]
    async fn test_single_failure_fails_everything() {
        let entries = map(vec![
            ("a.md", MockEntry::file(b"a")),
            ("b.md", MockEntry::broken("crc mismatch")),
            ("c.png", MockEntry::file(b"c")),
        ]);

        let result = materialize(&entries).await;
        assert!(matches!(result, Err(ArchiveError::EntryDecode { .. })));
    }

    #[tokio::test]
    async fn test_empty_map() {
        let index = materialize(&EntryMap::<MockEntry>::new()).await.unwrap();
        assert!(index.is_empty());
    }
}

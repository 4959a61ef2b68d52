//! Archive decoding.
//!
//! An [`ArchiveDecoder`] turns the raw bytes of an upload into a flat map
//! of entry path to [`ArchiveEntry`] handle. Handles decode lazily, one
//! entry at a time, so nothing is decompressed until it is asked for.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zip::ZipArchive;

use super::error::ArchiveError;

/// Flat mapping of normalized entry path to entry handle.
pub type EntryMap<E> = BTreeMap<String, E>;

/// Decode-on-demand handle to one archive entry.
#[allow(async_fn_in_trait)]
pub trait ArchiveEntry {
    /// Check if this entry is a directory marker.
    fn is_dir(&self) -> bool;

    /// Decode the entry as UTF-8 text (invalid sequences are replaced).
    async fn read_text(&self) -> Result<String, ArchiveError>;

    /// Decode the entry as standard base64.
    async fn read_base64(&self) -> Result<String, ArchiveError>;
}

/// Decompression engine producing entry handles from raw archive bytes.
#[allow(async_fn_in_trait)]
pub trait ArchiveDecoder {
    type Entry: ArchiveEntry;

    async fn decode(&self, bytes: Vec<u8>) -> Result<EntryMap<Self::Entry>, ArchiveError>;
}

/// Normalize an entry name to a relative, slash-delimited path.
///
/// Backslashes become `/`; leading `./` and `/` are removed. A trailing
/// `/` (directory marker) is kept.
pub fn normalize_entry_path(raw: &str) -> String {
    let path = raw.replace('\\', "/");
    let mut rest = path.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.to_string()
}

/// Entries that become files in the tree and keys in the content index.
///
/// Directory markers and entries whose path is empty once the trailing
/// separator is trimmed are skipped.
pub fn file_entries<E: ArchiveEntry>(entries: &EntryMap<E>) -> impl Iterator<Item = (&str, &E)> {
    entries
        .iter()
        .filter(|(path, entry)| !entry.is_dir() && !path.trim_end_matches('/').is_empty())
        .map(|(path, entry)| (path.as_str(), entry))
}

// =============================================================================
// ZIP
// =============================================================================

type SharedReader = Cursor<Arc<[u8]>>;

/// ZIP decoder backed by the `zip` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipDecoder;

impl ArchiveDecoder for ZipDecoder {
    type Entry = ZipEntry;

    async fn decode(&self, bytes: Vec<u8>) -> Result<EntryMap<ZipEntry>, ArchiveError> {
        let reader = Cursor::new(Arc::<[u8]>::from(bytes));
        let mut archive =
            ZipArchive::new(reader).map_err(|e| ArchiveError::Malformed(e.to_string()))?;

        let mut entries = EntryMap::new();
        for index in 0..archive.len() {
            // Raw access reads the header only, nothing is decompressed here
            let (name, is_dir) = {
                let file = archive
                    .by_index_raw(index)
                    .map_err(|e| ArchiveError::Malformed(e.to_string()))?;
                (file.name().to_string(), file.is_dir())
            };
            let path = normalize_entry_path(&name);
            // Names that normalise to the same path keep the first entry
            if entries.contains_key(&path) {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Skipping duplicate archive entry {:?} ({})", name, path).into(),
                );
                continue;
            }
            entries.insert(
                path.clone(),
                ZipEntry {
                    archive: archive.clone(),
                    index,
                    path,
                    is_dir,
                },
            );
        }

        Ok(entries)
    }
}

/// Handle to one entry of a ZIP archive.
///
/// Every handle shares the uploaded buffer and the parsed central
/// directory; reading an entry decompresses only that entry.
#[derive(Clone)]
pub struct ZipEntry {
    archive: ZipArchive<SharedReader>,
    index: usize,
    path: String,
    is_dir: bool,
}

impl ZipEntry {
    fn read_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        let mut archive = self.archive.clone();
        let mut file = archive
            .by_index(self.index)
            .map_err(|e| ArchiveError::entry(&self.path, e))?;

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| ArchiveError::entry(&self.path, e))?;
        Ok(buf)
    }
}

impl ArchiveEntry for ZipEntry {
    fn is_dir(&self) -> bool {
        self.is_dir
    }

    async fn read_text(&self) -> Result<String, ArchiveError> {
        let bytes = self.read_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn read_base64(&self) -> Result<String, ArchiveError> {
        let bytes = self.read_bytes()?;
        Ok(STANDARD.encode(bytes))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{Cursor, Write};

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use zip::CompressionMethod;
    use zip::write::{SimpleFileOptions, ZipWriter};

    use super::ArchiveEntry;
    use crate::core::error::ArchiveError;

    /// Build an in-memory ZIP. Names ending in `/` become directory entries.
    pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        build_zip(entries, CompressionMethod::Deflated)
    }

    /// Same as [`zip_bytes`] but stores entries uncompressed.
    pub fn stored_zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        build_zip(entries, CompressionMethod::Stored)
    }

    fn build_zip(entries: &[(&str, &[u8])], method: CompressionMethod) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(method);
        for (name, data) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    /// In-memory entry whose reads succeed or fail as configured.
    #[derive(Clone, Debug)]
    pub struct MockEntry {
        pub data: Result<Vec<u8>, String>,
        pub is_dir: bool,
    }

    impl MockEntry {
        pub fn file(data: &[u8]) -> Self {
            Self {
                data: Ok(data.to_vec()),
                is_dir: false,
            }
        }

        pub fn dir() -> Self {
            Self {
                data: Ok(Vec::new()),
                is_dir: true,
            }
        }

        pub fn broken(reason: &str) -> Self {
            Self {
                data: Err(reason.to_string()),
                is_dir: false,
            }
        }

        fn bytes(&self) -> Result<&[u8], ArchiveError> {
            self.data
                .as_deref()
                .map_err(|reason| ArchiveError::entry("mock", reason))
        }
    }

    impl ArchiveEntry for MockEntry {
        fn is_dir(&self) -> bool {
            self.is_dir
        }

        async fn read_text(&self) -> Result<String, ArchiveError> {
            Ok(String::from_utf8_lossy(self.bytes()?).into_owned())
        }

        async fn read_base64(&self) -> Result<String, ArchiveError> {
            Ok(STANDARD.encode(self.bytes()?))
        }
    }
}

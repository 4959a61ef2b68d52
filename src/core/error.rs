//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ArchiveError`] - Archive container and per-entry decoding failures
//! - [`ProcessingError`] - The single user-facing failure of an upload
//! - [`DiagramError`] - A diagram definition that could not be rendered

use thiserror::Error;

use crate::config::ARCHIVE_ERROR_MESSAGE;

/// Archive decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// The bytes are not a readable archive (bad container, bad central directory)
    #[error("malformed archive: {0}")]
    Malformed(String),
    /// A single entry could not be decompressed or read
    #[error("failed to decode entry '{path}': {reason}")]
    EntryDecode { path: String, reason: String },
}

impl ArchiveError {
    pub fn entry(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::EntryDecode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failure of the archive processing pipeline.
///
/// Displays the same message whatever went wrong; the cause is kept as
/// the error source for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", ARCHIVE_ERROR_MESSAGE)]
pub struct ProcessingError {
    #[source]
    cause: ArchiveError,
}

impl ProcessingError {
    pub fn cause(&self) -> &ArchiveError {
        &self.cause
    }
}

impl From<ArchiveError> for ProcessingError {
    fn from(cause: ArchiveError) -> Self {
        Self { cause }
    }
}

/// Diagram rendering errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// Diagram library not loaded on the page
    #[error("diagram renderer not available")]
    Unavailable,
    /// The definition has a syntax error or the render call failed
    #[error("{0}")]
    Render(String),
    /// The renderer returned something without SVG markup
    #[error("diagram renderer returned no SVG")]
    InvalidOutput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_processing_error_message_hides_cause() {
        let err = ProcessingError::from(ArchiveError::Malformed("bad EOCD".to_string()));
        assert_eq!(err.to_string(), ARCHIVE_ERROR_MESSAGE);
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("malformed archive: bad EOCD".to_string())
        );
    }

    #[test]
    fn test_entry_error_display() {
        let err = ArchiveError::entry("docs/a.md", "invalid checksum");
        assert_eq!(
            err.to_string(),
            "failed to decode entry 'docs/a.md': invalid checksum"
        );
    }
}

//! Report Sink Port - Output Sink interface.
//!
//! The sink receives a fully built `Report` and persists its documents. It is
//! only invoked after rendering finished, so a failure here never leaves a
//! partially rendered report behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::report::Report;

/// Port for persisting rendered reports.
///
/// # Contract
///
/// Implementations must:
/// - Persist the narrative, structured and summary documents of one report
/// - Write atomically (no partial content on failure)
/// - Report the size and SHA-256 checksum of every persisted document
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Persist all documents of `report`.
    async fn persist(&self, report: &Report) -> Result<PersistedReport, StorageError>;
}

/// Which rendering a persisted file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Narrative,
    Structured,
    Summary,
}

/// One persisted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedFile {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the written content.
    pub checksum: String,
}

impl PersistedFile {
    pub fn new(
        kind: DocumentKind,
        path: impl Into<PathBuf>,
        size_bytes: u64,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            size_bytes,
            checksum: checksum.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of persisting one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedReport {
    pub files: Vec<PersistedFile>,
}

impl PersistedReport {
    /// Returns the file holding the given rendering, if it was persisted.
    pub fn file(&self, kind: DocumentKind) -> Option<&PersistedFile> {
        self.files.iter().find(|f| f.kind == kind)
    }
}

/// Errors that can occur while persisting a report.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A document could not be serialized for writing.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Stable error code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::PermissionDenied { .. } => "PERMISSION_DENIED",
            StorageError::Io { .. } => "IO_ERROR",
            StorageError::Serialization(_) => "SERIALIZATION_FAILED",
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_by_kind() {
        let err: StorageError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, StorageError::PermissionDenied { .. }));

        let err: StorageError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn persisted_report_finds_file_by_kind() {
        let report = PersistedReport {
            files: vec![
                PersistedFile::new(DocumentKind::Narrative, "a.md", 3, "abc"),
                PersistedFile::new(DocumentKind::Summary, "s.md", 1, "def"),
            ],
        };
        assert_eq!(
            report.file(DocumentKind::Summary).map(|f| f.path()),
            Some(Path::new("s.md"))
        );
        assert!(report.file(DocumentKind::Structured).is_none());
    }
}

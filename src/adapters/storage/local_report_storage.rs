//! Local Filesystem Report Storage - Implementation of ReportSink.
//!
//! Writes rendered reports into the outputs directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::report::Report;
use crate::ports::{DocumentKind, PersistedFile, PersistedReport, ReportSink, StorageError};

/// Fixed name of the issue body handed to the notification step.
pub const SUMMARY_FILE_NAME: &str = "ai_insights_summary.md";

/// Local filesystem storage for rendered reports.
///
/// # Directory Structure
///
/// ```text
/// {output_dir}/
/// ├── regima_full_analysis_20240115_103000.md
/// ├── regima_ai_analysis_20240115_103000.json
/// └── ai_insights_summary.md
/// ```
///
/// # Atomic Writes
///
/// Every file is first written to `{name}.tmp` and synced. Only when all
/// three are staged are they renamed into place; a failed stage removes the
/// temp files already written and leaves no report file behind.
#[derive(Debug, Clone)]
pub struct LocalReportStorage {
    output_dir: PathBuf,
}

impl LocalReportStorage {
    /// Creates a storage writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn narrative_name(report: &Report) -> String {
        format!(
            "regima_{}_analysis_{}.md",
            report.metadata.analysis_type.token(),
            report.metadata.generated_at.file_stamp()
        )
    }

    fn structured_name(report: &Report) -> String {
        format!(
            "regima_ai_analysis_{}.json",
            report.metadata.generated_at.file_stamp()
        )
    }

    /// Computes SHA-256 checksum of the given content.
    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Ensures the output directory exists.
    async fn ensure_output_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }

    /// Removes a temp file, logging instead of failing.
    async fn remove_temp(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove temp file");
        }
    }

    /// Writes and syncs one document to its temp path.
    async fn stage(
        &self,
        kind: DocumentKind,
        file_name: &str,
        content: &str,
    ) -> Result<StagedFile, StorageError> {
        let final_path = self.output_dir.join(file_name);
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        let written = async {
            file.write_all(content.as_bytes()).await.map_err(|e| {
                StorageError::io(format!(
                    "Failed to write to temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
            file.sync_all().await.map_err(|e| {
                StorageError::io(format!(
                    "Failed to sync temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })
        }
        .await;
        if let Err(e) = written {
            Self::remove_temp(&temp_path).await;
            return Err(e);
        }

        Ok(StagedFile {
            kind,
            temp_path,
            final_path,
            size_bytes: content.len() as u64,
            checksum: Self::compute_checksum(content),
        })
    }

    /// Renames a staged document into place.
    async fn commit(staged: StagedFile) -> Result<PersistedFile, StorageError> {
        fs::rename(&staged.temp_path, &staged.final_path)
            .await
            .map_err(|e| {
                StorageError::io(format!(
                    "Failed to rename {} to {}: {}",
                    staged.temp_path.display(),
                    staged.final_path.display(),
                    e
                ))
            })?;

        let persisted = PersistedFile::new(
            staged.kind,
            staged.final_path,
            staged.size_bytes,
            staged.checksum,
        );
        tracing::debug!(
            path = %persisted.path.display(),
            size_bytes = persisted.size_bytes,
            checksum = %persisted.checksum,
            "Report file written"
        );
        Ok(persisted)
    }
}

/// A document written to its temp path, waiting to be renamed.
struct StagedFile {
    kind: DocumentKind,
    temp_path: PathBuf,
    final_path: PathBuf,
    size_bytes: u64,
    checksum: String,
}

#[async_trait]
impl ReportSink for LocalReportStorage {
    async fn persist(&self, report: &Report) -> Result<PersistedReport, StorageError> {
        let structured = report.structured.to_json_pretty()?;

        self.ensure_output_dir().await?;

        let narrative_name = Self::narrative_name(report);
        let structured_name = Self::structured_name(report);
        let narrative = report.narrative.to_markdown();
        let documents = [
            (DocumentKind::Narrative, narrative_name.as_str(), narrative.as_str()),
            (DocumentKind::Structured, structured_name.as_str(), structured.as_str()),
            (DocumentKind::Summary, SUMMARY_FILE_NAME, report.summary_markdown.as_str()),
        ];

        let mut staged = Vec::with_capacity(documents.len());
        for (kind, file_name, content) in documents {
            match self.stage(kind, file_name, content).await {
                Ok(file) => staged.push(file),
                Err(e) => {
                    for file in &staged {
                        Self::remove_temp(&file.temp_path).await;
                    }
                    return Err(e);
                }
            }
        }

        let mut files = Vec::with_capacity(staged.len());
        for file in staged {
            files.push(Self::commit(file).await?);
        }

        Ok(PersistedReport { files })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::TextLimits;
    use crate::domain::foundation::{AnalysisMode, Timestamp};
    use crate::domain::report::{
        NarrativeDocument, ReportContent, ReportMetadata, StructuredDocument,
    };
    use crate::domain::tracking::TrackingRecord;
    use chrono::{DateTime, Utc};
    use serde_json::json;
    use tempfile::TempDir;

    fn test_report() -> Report {
        let generated_at = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut metadata = ReportMetadata::new(AnalysisMode::GuidanceOnly);
        metadata.generated_at = Timestamp::from_datetime(generated_at);

        Report {
            metadata,
            content: ReportContent::assemble(
                AnalysisMode::GuidanceOnly,
                &TrackingRecord::default(),
                vec![],
                vec![],
                &TextLimits::default(),
                5,
            ),
            narrative: NarrativeDocument {
                front_matter: "runId: x\n".to_string(),
                body: "# RegimA Guidance Analysis\n".to_string(),
            },
            structured: StructuredDocument {
                document: json!({ "metadata": {}, "content": {} }),
            },
            summary_markdown: "# Summary\n".to_string(),
        }
    }

    #[tokio::test]
    async fn persist_writes_all_three_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp_dir.path().join("outputs"));

        let persisted = storage.persist(&test_report()).await.unwrap();
        assert_eq!(persisted.files.len(), 3);

        let narrative = persisted.file(DocumentKind::Narrative).unwrap();
        assert_eq!(
            narrative.path(),
            temp_dir
                .path()
                .join("outputs/regima_guidance_only_analysis_20240115_103000.md")
        );
        let structured = persisted.file(DocumentKind::Structured).unwrap();
        assert!(structured
            .path()
            .ends_with("regima_ai_analysis_20240115_103000.json"));
        let summary = persisted.file(DocumentKind::Summary).unwrap();
        assert!(summary.path().ends_with(SUMMARY_FILE_NAME));
    }

    #[tokio::test]
    async fn persisted_content_matches_report() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp_dir.path());
        let report = test_report();

        let persisted = storage.persist(&report).await.unwrap();
        let narrative = persisted.file(DocumentKind::Narrative).unwrap();
        let written = std::fs::read_to_string(narrative.path()).unwrap();
        assert_eq!(written, report.narrative.to_markdown());
        assert_eq!(narrative.size_bytes, written.len() as u64);
    }

    #[tokio::test]
    async fn checksum_is_sha256_hex() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp_dir.path());

        let persisted = storage.persist(&test_report()).await.unwrap();
        let summary = persisted.file(DocumentKind::Summary).unwrap();
        assert_eq!(summary.checksum.len(), 64);
        assert_eq!(
            summary.checksum,
            LocalReportStorage::compute_checksum("# Summary\n")
        );
    }

    #[tokio::test]
    async fn no_temp_files_remain() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp_dir.path());
        storage.persist(&test_report()).await.unwrap();

        let leftovers = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn failed_stage_leaves_no_report_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp_dir.path());
        // A directory in the way makes the structured temp file uncreatable.
        std::fs::create_dir(
            temp_dir
                .path()
                .join("regima_ai_analysis_20240115_103000.json.tmp"),
        )
        .unwrap();

        assert!(storage.persist(&test_report()).await.is_err());

        let names: Vec<String> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["regima_ai_analysis_20240115_103000.json.tmp".to_string()]);
    }

    #[tokio::test]
    async fn unwritable_output_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let storage = LocalReportStorage::new(blocker.join("outputs"));

        assert!(storage.persist(&test_report()).await.is_err());
    }
}

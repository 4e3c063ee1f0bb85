//! In-Memory Report Sink Adapter
//!
//! Keeps persisted reports in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::report::Report;
use crate::ports::{DocumentKind, PersistedFile, PersistedReport, ReportSink, StorageError};

/// In-memory sink for rendered reports
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportSink {
    reports: Arc<RwLock<Vec<Report>>>,
    fail_with: Option<String>,
}

impl InMemoryReportSink {
    /// Create a new in-memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose every persist fails with an IO error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reports: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    /// All reports persisted so far, oldest first
    pub async fn reports(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    /// Get the number of persisted reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl ReportSink for InMemoryReportSink {
    async fn persist(&self, report: &Report) -> Result<PersistedReport, StorageError> {
        if let Some(message) = &self.fail_with {
            return Err(StorageError::io(message.clone()));
        }

        let run = report.metadata.run_id;
        let narrative = report.narrative.to_markdown();
        let structured = report.structured.to_json_pretty()?;

        self.reports.write().await.push(report.clone());

        Ok(PersistedReport {
            files: vec![
                PersistedFile::new(
                    DocumentKind::Narrative,
                    format!("memory/{}.md", run),
                    narrative.len() as u64,
                    "",
                ),
                PersistedFile::new(
                    DocumentKind::Structured,
                    format!("memory/{}.json", run),
                    structured.len() as u64,
                    "",
                ),
                PersistedFile::new(
                    DocumentKind::Summary,
                    format!("memory/{}_summary.md", run),
                    report.summary_markdown.len() as u64,
                    "",
                ),
            ],
        })
    }
}

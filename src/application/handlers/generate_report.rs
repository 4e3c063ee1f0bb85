//! GenerateReportHandler - Command handler for one report generation run.
//!
//! Resolves the analysis mode, loads the tracking data, runs the selected
//! section analyzers, renders the report and hands it to the output sink.
//! The mode is resolved before any loading so an unsupported token fails
//! without touching the data sources.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::analysis::AnalyzerRegistry;
use crate::domain::foundation::{AnalysisMode, ErrorKind, ReportError};
use crate::domain::report::{Report, ReportContent, ReportMetadata};
use crate::ports::{
    PersistedReport, RenderError, ReportRenderer, ReportSink, StorageError, TrackingSource,
};

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for unsupported modes and configuration errors.
pub const EXIT_CONFIGURATION: i32 = 2;
/// Exit status for malformed input and data format errors.
pub const EXIT_INPUT: i32 = 3;
/// Exit status for render integrity errors.
pub const EXIT_RENDER: i32 = 4;
/// Exit status for output sink failures.
pub const EXIT_SINK: i32 = 5;

/// Command to generate one report.
#[derive(Debug, Clone, Default)]
pub struct GenerateReportCommand {
    /// Raw analysis-mode token; `None` or blank selects `full`.
    pub mode_token: Option<String>,
}

impl GenerateReportCommand {
    pub fn new(mode_token: Option<impl Into<String>>) -> Self {
        Self {
            mode_token: mode_token.map(Into::into),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    pub report: Report,
    pub persisted: PersistedReport,
}

/// Error type for report generation.
#[derive(Debug, Clone, Error)]
pub enum GenerateReportError {
    /// Mode, loading, selection or analysis failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Rendering failed.
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    /// The output sink failed after the report was fully built.
    #[error("Output sink failed: {0}")]
    Sink(#[from] StorageError),
}

impl GenerateReportError {
    /// Stable error code for logs.
    pub fn code(&self) -> String {
        match self {
            GenerateReportError::Report(e) => e.kind().to_string(),
            GenerateReportError::Render(RenderError::Integrity(e)) => e.kind().to_string(),
            GenerateReportError::Render(RenderError::Serialization(_)) => {
                "RENDER_SERIALIZATION".to_string()
            }
            GenerateReportError::Sink(e) => format!("SINK_{}", e.code()),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateReportError::Report(e)
            | GenerateReportError::Render(RenderError::Integrity(e)) => match e.kind() {
                kind if kind.is_configuration() => EXIT_CONFIGURATION,
                ErrorKind::MalformedInput | ErrorKind::DataFormat => EXIT_INPUT,
                _ => EXIT_RENDER,
            },
            GenerateReportError::Render(RenderError::Serialization(_)) => EXIT_RENDER,
            GenerateReportError::Sink(_) => EXIT_SINK,
        }
    }
}

/// Handler for generating reports.
///
/// # Dependencies
///
/// - `TrackingSource`: Load tracking data and model configuration
/// - `AnalyzerRegistry`: Domain-to-analyzer lookup
/// - `ReportRenderer`: Render narrative, structured and summary documents
/// - `ReportSink`: Persist the rendered report
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateReportHandler::new(source, registry, renderer, sink);
/// let cmd = GenerateReportCommand::new(Some("consciousness_only"));
/// let result = handler.handle(cmd).await?;
/// println!("{}", result.report.summary().headline);
/// ```
pub struct GenerateReportHandler {
    source: Arc<dyn TrackingSource>,
    registry: Arc<AnalyzerRegistry>,
    renderer: Arc<dyn ReportRenderer>,
    sink: Arc<dyn ReportSink>,
}

impl GenerateReportHandler {
    pub fn new(
        source: Arc<dyn TrackingSource>,
        registry: Arc<AnalyzerRegistry>,
        renderer: Arc<dyn ReportRenderer>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            source,
            registry,
            renderer,
            sink,
        }
    }

    /// Builds the report and persists it.
    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<GenerateReportResult, GenerateReportError> {
        let report = self.build_report(&cmd).await?;

        let persisted = self.sink.persist(&report).await?;
        tracing::info!(
            run_id = %report.metadata.run_id,
            files = persisted.files.len(),
            "Report persisted"
        );

        Ok(GenerateReportResult { report, persisted })
    }

    /// Builds the report without handing it to the sink.
    pub async fn build_report(
        &self,
        cmd: &GenerateReportCommand,
    ) -> Result<Report, GenerateReportError> {
        // 1. Resolve the mode before any loading
        let mode = AnalysisMode::from_token(cmd.mode_token.as_deref())?;
        tracing::info!(analysis_type = %mode, "Starting report generation");

        // 2. Load tracking data and settings
        let loaded = self.source.load().await?;
        for warning in &loaded.warnings {
            tracing::warn!(warning = %warning.message(), "Tracking data warning");
        }

        // 3. Select domains
        let domains = loaded.settings.restrict(mode.domains());
        if domains.is_empty() {
            return Err(ReportError::empty_selection(mode.token()).into());
        }
        tracing::debug!(?domains, "Domains selected");

        // 4. Analyze the selected domains only
        let limits = loaded.settings.text_limits();
        let records = self.registry.analyze(&domains, &loaded.record, &limits)?;

        // 5. Assemble and render
        let content = ReportContent::assemble(
            mode,
            &loaded.record,
            records,
            loaded.warnings,
            &limits,
            loaded.settings.summary_cap,
        );
        let metadata = ReportMetadata::new(mode);

        let narrative = self.renderer.render_narrative(&metadata, &content)?;
        let structured = self.renderer.render_structured(&metadata, &content)?;
        let summary_markdown = self.renderer.render_summary(&content)?;

        tracing::info!(
            run_id = %metadata.run_id,
            status = %content.summary.status,
            domains = content.domains.len(),
            "Report rendered"
        );

        Ok(Report {
            metadata,
            content,
            narrative,
            structured,
            summary_markdown,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

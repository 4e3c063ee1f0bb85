//! Report Renderer Port - Narrative, structured and summary rendering.
//!
//! This port defines the contract for turning assembled report content into
//! its output documents. Adapters (like TemplateReportRenderer) provide the
//! implementation.

use thiserror::Error;

use crate::domain::foundation::ReportError;
use crate::domain::report::{
    NarrativeDocument, ReportContent, ReportMetadata, StructuredDocument,
};

/// Port for rendering report documents.
///
/// # Contract
///
/// Implementations must:
/// - Render sections in `ReportContent::domains` order (domain priority)
/// - Keep every metadata value (timestamp, run id) out of the comparable part
/// - Render the same insight strings in the narrative and structured outputs
/// - Produce byte-identical comparable output for identical content
pub trait ReportRenderer: Send + Sync {
    /// Render the human-facing Markdown document.
    fn render_narrative(
        &self,
        metadata: &ReportMetadata,
        content: &ReportContent,
    ) -> Result<NarrativeDocument, RenderError>;

    /// Render the machine-facing `{metadata, content}` document.
    fn render_structured(
        &self,
        metadata: &ReportMetadata,
        content: &ReportContent,
    ) -> Result<StructuredDocument, RenderError>;

    /// Render the Markdown issue body handed to the notification step.
    fn render_summary(&self, content: &ReportContent) -> Result<String, RenderError>;
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Content broke the analyzer/renderer contract.
    #[error(transparent)]
    Integrity(#[from] ReportError),

    /// A document could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl RenderError {
    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

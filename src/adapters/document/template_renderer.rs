//! Template-based report renderer adapter.
//!
//! Renders report content into a Markdown narrative, a JSON structured
//! document and a Markdown issue body using a fixed template structure.
//! This is the primary implementation of the ReportRenderer port.

use serde::Serialize;
use serde_json::json;

use crate::domain::analysis::{InsightRecord, InsightStatus};
use crate::domain::foundation::{AnalysisMode, ReportError};
use crate::domain::report::{
    NarrativeDocument, ReportContent, ReportMetadata, StructuredDocument, Summary,
};
use crate::ports::{RenderError, ReportRenderer};

/// Template-based implementation of ReportRenderer.
///
/// Insight strings keep their (possibly truncated) text in both documents;
/// the narrative only flattens them onto one line.
#[derive(Debug, Clone, Default)]
pub struct TemplateReportRenderer;

/// Metadata block written as YAML front matter.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter<'a> {
    generated_at: String,
    run_id: String,
    analysis_type: &'a str,
}

/// Flattens free text onto one Markdown line.
///
/// Line breaks become single spaces and a leading `#` is escaped.
fn inline(text: &str) -> String {
    let flat = text
        .split(|c| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    match flat.strip_prefix('#') {
        Some(rest) => format!("\\#{}", rest),
        None => flat,
    }
}

impl TemplateReportRenderer {
    /// Creates a new template report renderer.
    pub fn new() -> Self {
        Self
    }

    fn mode_title(mode: AnalysisMode) -> &'static str {
        match mode {
            AnalysisMode::Full => "Full",
            AnalysisMode::ZoneConceptOnly => "Zone Concept",
            AnalysisMode::ConsciousnessOnly => "Consciousness",
            AnalysisMode::GuidanceOnly => "Guidance",
        }
    }

    /// Records must arrive in strictly increasing domain priority.
    fn check_order(content: &ReportContent) -> Result<(), ReportError> {
        for pair in content.domains.windows(2) {
            if pair[0].domain.priority() >= pair[1].domain.priority() {
                return Err(ReportError::render_integrity(
                    pair[1].domain,
                    format!("record follows {} out of priority order", pair[0].domain),
                ));
            }
        }
        Ok(())
    }

    /// Generates the title, cycle facts, warnings and cycle insights.
    fn generate_header(&self, content: &ReportContent) -> String {
        let mut header = format!(
            "# RegimA {} Analysis\n\n",
            Self::mode_title(content.analysis_type)
        );

        header.push_str(&format!(
            "> **Analysis Type:** `{}`\n",
            content.analysis_type.token()
        ));
        if let Some(status) = &content.cycle_status {
            header.push_str(&format!("> **Cycle Status:** {}\n", inline(status)));
        }
        if let Some(version) = &content.framework_version {
            header.push_str(&format!("> **Framework Version:** {}\n", inline(version)));
        }
        header.push('\n');

        for warning in &content.warnings {
            header.push_str(&format!("> **Warning:** {}\n", inline(&warning.message())));
        }
        if !content.warnings.is_empty() {
            header.push('\n');
        }

        if !content.cycle_insights.is_empty() {
            header.push_str("### Current Cycle Insights\n\n");
            for insight in &content.cycle_insights {
                header.push_str(&format!("- {}\n", inline(insight)));
            }
            header.push('\n');
        }

        header
    }

    /// Generates one domain section.
    fn generate_section(&self, record: &InsightRecord) -> String {
        let mut section = format!("## {}\n\n", record.domain.display_name());

        section.push_str(&format!("**Status:** {}", record.status));
        if let Some(score) = &record.score {
            section.push_str(&format!(" | **Score:** {}", inline(&score.to_string())));
        }
        section.push_str("\n\n");

        match record.status {
            InsightStatus::NoData => section.push_str("*No data*\n\n"),
            InsightStatus::Analyzed => {
                for insight in &record.insights {
                    section.push_str(&format!("- {}\n", inline(insight)));
                }
                section.push('\n');
            }
        }

        section
    }

    fn generate_highlights(summary: &Summary) -> String {
        if summary.highlights.is_empty() {
            return "*No highlights*\n".to_string();
        }
        summary
            .highlights
            .iter()
            .map(|h| format!("- {}\n", inline(h)))
            .collect()
    }

    /// Generates the closing summary section.
    fn generate_summary_section(&self, summary: &Summary) -> String {
        let mut section = String::from("## Summary\n\n");
        section.push_str(&format!("**Overall Status:** {}\n\n", summary.status));
        section.push_str(&format!("{}\n\n", summary.headline));
        section.push_str(&Self::generate_highlights(summary));
        section
    }
}

impl ReportRenderer for TemplateReportRenderer {
    fn render_narrative(
        &self,
        metadata: &ReportMetadata,
        content: &ReportContent,
    ) -> Result<NarrativeDocument, RenderError> {
        Self::check_order(content)?;

        let front_matter = serde_yaml::to_string(&FrontMatter {
            generated_at: metadata.generated_at.to_rfc3339(),
            run_id: metadata.run_id.to_string(),
            analysis_type: metadata.analysis_type.token(),
        })?;

        let mut body = self.generate_header(content);
        for record in &content.domains {
            body.push_str(&self.generate_section(record));
            body.push_str("---\n\n");
        }
        body.push_str(&self.generate_summary_section(&content.summary));

        Ok(NarrativeDocument { front_matter, body })
    }

    fn render_structured(
        &self,
        metadata: &ReportMetadata,
        content: &ReportContent,
    ) -> Result<StructuredDocument, RenderError> {
        Self::check_order(content)?;

        let document = json!({
            "metadata": serde_json::to_value(metadata)?,
            "content": serde_json::to_value(content)?,
        });

        Ok(StructuredDocument { document })
    }

    fn render_summary(&self, content: &ReportContent) -> Result<String, RenderError> {
        let summary = &content.summary;
        let mut issue = String::from("# RegimA AI Analysis Summary\n\n");

        issue.push_str(&format!(
            "**Analysis Type:** `{}` | **Status:** {}\n\n",
            content.analysis_type.token(),
            summary.status
        ));
        issue.push_str(&format!("{}\n\n", summary.headline));

        issue.push_str("## Highlights\n\n");
        issue.push_str(&Self::generate_highlights(summary));
        issue.push('\n');

        issue.push_str("## Domains\n\n");
        for record in &content.domains {
            issue.push_str(&format!(
                "- {}: {} ({} insight(s))\n",
                record.domain.display_name(),
                record.status,
                record.insights.len()
            ));
        }

        Ok(issue)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

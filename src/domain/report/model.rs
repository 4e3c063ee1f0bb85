//! Report - the final artifact of one run.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::Summary;
use crate::domain::analysis::{InsightRecord, TextLimits};
use crate::domain::foundation::{AnalysisMode, DomainTag, Timestamp};
use crate::domain::tracking::{LoadWarning, TrackingRecord};

/// Non-comparable facts about a run. Kept apart from content so that
/// equality checks on rendered content can ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: Timestamp,
    pub run_id: Uuid,
    pub analysis_type: AnalysisMode,
}

impl ReportMetadata {
    pub fn new(analysis_type: AnalysisMode) -> Self {
        Self {
            generated_at: Timestamp::now(),
            run_id: Uuid::new_v4(),
            analysis_type,
        }
    }
}

/// Comparable content of a report: identical inputs give identical content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContent {
    pub analysis_type: AnalysisMode,
    pub cycle_status: Option<String>,
    /// Learning-cycle insights, shown in the header.
    pub cycle_insights: Vec<String>,
    /// Zone-concept framework version; only set when that domain is selected.
    pub framework_version: Option<String>,
    pub warnings: Vec<LoadWarning>,
    /// Insight records in domain priority order.
    pub domains: Vec<InsightRecord>,
    pub summary: Summary,
}

impl ReportContent {
    /// Orders the records by domain priority and compiles the summary.
    ///
    /// Header text taken from the record is bounded by `limits` like any
    /// other free text; blank values are dropped.
    pub fn assemble(
        analysis_type: AnalysisMode,
        record: &TrackingRecord,
        mut domains: Vec<InsightRecord>,
        warnings: Vec<LoadWarning>,
        limits: &TextLimits,
        summary_cap: usize,
    ) -> Self {
        domains.sort_by_key(|r| r.domain.priority());
        let summary = Summary::compile(&domains, &warnings, summary_cap);

        let cycle = record.cycle_completion.as_ref();
        let cycle_status = cycle
            .and_then(|c| c.status.as_deref())
            .and_then(|status| limits.truncate_non_blank(status));
        let cycle_insights = cycle
            .map(|c| {
                c.insights
                    .iter()
                    .filter_map(|insight| limits.truncate_non_blank(insight))
                    .collect()
            })
            .unwrap_or_default();

        let zone_selected = domains
            .iter()
            .any(|r| r.domain == DomainTag::ZoneConceptFramework);
        let framework_version = record
            .zone_concept_framework
            .as_ref()
            .filter(|_| zone_selected)
            .and_then(|z| z.version.as_deref())
            .and_then(|version| limits.truncate_non_blank(version));

        Self {
            analysis_type,
            cycle_status,
            cycle_insights,
            framework_version,
            warnings,
            domains,
            summary,
        }
    }
}

/// Human-facing Markdown rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeDocument {
    /// YAML front matter carrying the metadata, without delimiters.
    pub front_matter: String,
    /// Comparable Markdown body.
    pub body: String,
}

impl NarrativeDocument {
    /// The complete Markdown document.
    pub fn to_markdown(&self) -> String {
        format!("---\n{}---\n\n{}", self.front_matter, self.body)
    }
}

/// Machine-facing JSON rendering: `{ "metadata": ..., "content": ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredDocument {
    pub document: Value,
}

impl StructuredDocument {
    /// The comparable part of the document.
    pub fn content(&self) -> &Value {
        &self.document["content"]
    }

    pub fn metadata(&self) -> &Value {
        &self.document["metadata"]
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.document).map(|mut s| {
            s.push('\n');
            s
        })
    }
}

/// Everything one run hands to the output sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub content: ReportContent,
    pub narrative: NarrativeDocument,
    pub structured: StructuredDocument,
    /// Markdown issue body derived from the summary.
    pub summary_markdown: String,
}

impl Report {
    pub fn summary(&self) -> &Summary {
        &self.content.summary
    }
}

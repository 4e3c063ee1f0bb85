//! Summary - condensed cross-domain highlights plus an overall status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analysis::InsightRecord;
use crate::domain::tracking::LoadWarning;

/// Default number of highlight strings carried in a summary.
pub const DEFAULT_SUMMARY_CAP: usize = 5;

/// Overall status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every included domain produced at least one insight.
    Nominal,
    /// At least one included domain reported no data.
    AttentionNeeded,
    /// The sources carried no tracked domains at all.
    NoTrackedData,
}

impl OverallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OverallStatus::Nominal => "nominal",
            OverallStatus::AttentionNeeded => "attention needed",
            OverallStatus::NoTrackedData => "no tracked data available",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub status: OverallStatus,
    /// One-line overall status.
    pub headline: String,
    /// First insight of each included domain, in priority order, capped.
    pub highlights: Vec<String>,
}

impl Summary {
    /// Compiles the summary from records already in priority order.
    pub fn compile(records: &[InsightRecord], warnings: &[LoadWarning], cap: usize) -> Self {
        let highlights: Vec<String> = records
            .iter()
            .filter_map(InsightRecord::headline)
            .take(cap)
            .map(str::to_string)
            .collect();

        let empty_domains: Vec<&str> = records
            .iter()
            .filter(|r| r.is_empty())
            .map(|r| r.domain.display_name())
            .collect();

        let status = if warnings.iter().any(LoadWarning::is_empty_tracking_data) {
            OverallStatus::NoTrackedData
        } else if !empty_domains.is_empty() {
            OverallStatus::AttentionNeeded
        } else {
            OverallStatus::Nominal
        };

        let headline = match status {
            OverallStatus::NoTrackedData => "No tracked data available.".to_string(),
            OverallStatus::AttentionNeeded => {
                format!("Attention needed: no data for {}.", empty_domains.join(", "))
            }
            OverallStatus::Nominal => {
                let insight_count: usize = records.iter().map(|r| r.insights.len()).sum();
                format!(
                    "Nominal: {} domain(s) analyzed, {} insight(s) derived.",
                    records.len(),
                    insight_count
                )
            }
        };

        Self {
            status,
            headline,
            highlights,
        }
    }
}

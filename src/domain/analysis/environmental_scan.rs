//! Environmental Scan Analyzer - lists external trends.

use super::{InsightRecord, SectionAnalyzer, TextLimits};
use crate::domain::foundation::DomainTag;
use crate::domain::tracking::{EnvironmentalScan, TrackingRecord, Trend};

pub struct EnvironmentalScanAnalyzer;

impl EnvironmentalScanAnalyzer {
    pub fn summarize(scan: Option<&EnvironmentalScan>, limits: &TextLimits) -> InsightRecord {
        let Some(scan) = scan else {
            return InsightRecord::no_data(DomainTag::EnvironmentalScan);
        };

        let insights = scan
            .trends
            .iter()
            .filter_map(|trend| Self::describe(trend, limits))
            .collect();

        InsightRecord::new(DomainTag::EnvironmentalScan, insights, None)
    }

    /// `None` for a trend whose name is blank.
    fn describe(trend: &Trend, limits: &TextLimits) -> Option<String> {
        let mut line = limits.truncate_non_blank(&trend.name)?;
        if let Some(description) = trend
            .description
            .as_deref()
            .and_then(|d| limits.truncate_non_blank(d))
        {
            line.push_str(": ");
            line.push_str(&description);
        }
        if let Some(impact) = trend
            .impact
            .as_deref()
            .and_then(|i| limits.truncate_non_blank(i))
        {
            line.push_str(&format!(" (impact: {})", impact));
        }
        Some(line)
    }
}

impl SectionAnalyzer for EnvironmentalScanAnalyzer {
    fn domain(&self) -> DomainTag {
        DomainTag::EnvironmentalScan
    }

    fn analyze(&self, record: &TrackingRecord, limits: &TextLimits) -> InsightRecord {
        Self::summarize(record.environmental_scan.as_ref(), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::InsightStatus;

    #[test]
    fn trends_drop_absent_parts() {
        let scan = EnvironmentalScan {
            trends: vec![
                Trend {
                    name: "AI diagnostics".into(),
                    description: Some("Predictive skin analysis".into()),
                    impact: Some("high".into()),
                },
                Trend {
                    name: "Clean beauty".into(),
                    description: None,
                    impact: None,
                },
            ],
        };
        let record = EnvironmentalScanAnalyzer::summarize(Some(&scan), &TextLimits::default());
        assert_eq!(
            record.insights,
            vec![
                "AI diagnostics: Predictive skin analysis (impact: high)".to_string(),
                "Clean beauty".to_string(),
            ]
        );
    }

    #[test]
    fn unnamed_trends_are_skipped() {
        let scan = EnvironmentalScan {
            trends: vec![
                Trend {
                    name: "".into(),
                    description: Some("orphan".into()),
                    impact: None,
                },
                Trend {
                    name: "Clean beauty".into(),
                    description: Some(" ".into()),
                    impact: Some("".into()),
                },
            ],
        };
        let record = EnvironmentalScanAnalyzer::summarize(Some(&scan), &TextLimits::default());
        assert_eq!(record.insights, vec!["Clean beauty".to_string()]);
        assert!(record
            .verify(DomainTag::EnvironmentalScan, &TextLimits::default())
            .is_ok());
    }

    #[test]
    fn empty_trend_list_is_no_data() {
        let record = EnvironmentalScanAnalyzer::summarize(
            Some(&EnvironmentalScan::default()),
            &TextLimits::default(),
        );
        assert_eq!(record.status, InsightStatus::NoData);
    }
}

//! Guidance Analyzer - flattens professional-guidance focus areas.

use super::{InsightRecord, SectionAnalyzer, TextLimits};
use crate::domain::foundation::DomainTag;
use crate::domain::tracking::{ProfessionalGuidance, TrackingRecord};

/// Analyzer for professional guidance.
pub struct GuidanceAnalyzer;

impl GuidanceAnalyzer {
    /// One insight per actionable insight, prefixed by its focus-area title;
    /// focus areas without actionable insights are listed by title alone.
    /// Blank titles and insights are skipped.
    pub fn summarize(guidance: Option<&ProfessionalGuidance>, limits: &TextLimits) -> InsightRecord {
        let Some(guidance) = guidance else {
            return InsightRecord::no_data(DomainTag::ProfessionalGuidance);
        };

        let mut insights = Vec::new();
        for area in &guidance.focus_areas {
            let title = limits.truncate_non_blank(&area.title);
            let actionable: Vec<String> = area
                .actionable_insights
                .iter()
                .filter_map(|insight| limits.truncate_non_blank(insight))
                .collect();

            match (title, actionable.is_empty()) {
                (Some(title), true) => insights.push(format!("Focus area: {}", title)),
                (Some(title), false) => insights.extend(
                    actionable
                        .into_iter()
                        .map(|insight| format!("{}: {}", title, insight)),
                ),
                (None, _) => insights.extend(actionable),
            }
        }

        InsightRecord::new(DomainTag::ProfessionalGuidance, insights, None)
    }
}

impl SectionAnalyzer for GuidanceAnalyzer {
    fn domain(&self) -> DomainTag {
        DomainTag::ProfessionalGuidance
    }

    fn analyze(&self, record: &TrackingRecord, limits: &TextLimits) -> InsightRecord {
        Self::summarize(record.professional_guidance.as_ref(), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::InsightStatus;
    use crate::domain::tracking::FocusArea;

    #[test]
    fn absent_guidance_is_no_data() {
        let record = GuidanceAnalyzer::summarize(None, &TextLimits::default());
        assert_eq!(record.status, InsightStatus::NoData);
        assert!(record.insights.is_empty());
    }

    #[test]
    fn focus_areas_flatten_in_order() {
        let guidance = ProfessionalGuidance {
            focus_areas: vec![
                FocusArea {
                    title: "Education".into(),
                    actionable_insights: vec!["Run workshops".into(), "Certify trainers".into()],
                },
                FocusArea {
                    title: "Client outcomes".into(),
                    actionable_insights: vec![],
                },
            ],
        };
        let record = GuidanceAnalyzer::summarize(Some(&guidance), &TextLimits::default());
        assert_eq!(
            record.insights,
            vec![
                "Education: Run workshops".to_string(),
                "Education: Certify trainers".to_string(),
                "Focus area: Client outcomes".to_string(),
            ]
        );
        assert_eq!(record.score, None);
    }

    #[test]
    fn blank_titles_and_insights_are_skipped() {
        let guidance = ProfessionalGuidance {
            focus_areas: vec![
                FocusArea {
                    title: "".into(),
                    actionable_insights: vec!["Run workshops".into(), " ".into()],
                },
                FocusArea {
                    title: "Education".into(),
                    actionable_insights: vec!["".into()],
                },
                FocusArea {
                    title: "\t".into(),
                    actionable_insights: vec![],
                },
            ],
        };
        let record = GuidanceAnalyzer::summarize(Some(&guidance), &TextLimits::default());
        assert_eq!(
            record.insights,
            vec!["Run workshops".to_string(), "Focus area: Education".to_string()]
        );
        assert!(record
            .verify(DomainTag::ProfessionalGuidance, &TextLimits::default())
            .is_ok());
    }
}

//! Zone Concept Analyzer - summarizes the named protocols of the framework.

use super::{InsightRecord, Score, SectionAnalyzer, TextLimits};
use crate::domain::foundation::DomainTag;
use crate::domain::tracking::{Protocol, TrackingRecord, ZoneConceptFramework};

/// Analyzer for the zone-concept framework.
pub struct ZoneConceptAnalyzer;

impl ZoneConceptAnalyzer {
    /// Summarizes the framework slice.
    ///
    /// Per protocol, in declared order: an overview line, one line per
    /// insight, and a key-technologies line. The score is the mean declared
    /// relevance, rounded to one decimal.
    pub fn summarize(framework: Option<&ZoneConceptFramework>, limits: &TextLimits) -> InsightRecord {
        let Some(framework) = framework else {
            return InsightRecord::no_data(DomainTag::ZoneConceptFramework);
        };

        let mut insights = Vec::new();
        for protocol in &framework.protocols {
            Self::summarize_protocol(protocol, limits, &mut insights);
        }

        InsightRecord::new(
            DomainTag::ZoneConceptFramework,
            insights,
            Self::mean_relevance(&framework.protocols).map(Score::Numeric),
        )
    }

    fn summarize_protocol(protocol: &Protocol, limits: &TextLimits, out: &mut Vec<String>) {
        let name = limits.truncate(&protocol.name);

        let focus = protocol
            .focus
            .as_deref()
            .and_then(|focus| limits.truncate_non_blank(focus));
        let overview = match (protocol.relevance, focus) {
            (Some(r), Some(focus)) => Some(format!("{} (relevance {}/10): {}", name, r, focus)),
            (Some(r), None) => Some(format!("{} (relevance {}/10)", name, r)),
            (None, Some(focus)) => Some(format!("{}: {}", name, focus)),
            (None, None) => None,
        };
        out.extend(overview);

        out.extend(
            protocol
                .insights
                .iter()
                .filter_map(|insight| limits.truncate_non_blank(insight))
                .map(|insight| format!("{}: {}", name, insight)),
        );

        let technologies: Vec<String> = protocol
            .key_technologies
            .iter()
            .filter_map(|t| limits.truncate_non_blank(t))
            .collect();
        if !technologies.is_empty() {
            out.push(format!("{} key technologies: {}", name, technologies.join(", ")));
        }
    }

    /// Mean of the declared relevances, rounded to one decimal.
    ///
    /// Finite relevances always yield a finite mean.
    fn mean_relevance(protocols: &[Protocol]) -> Option<f64> {
        let scores: Vec<f64> = protocols.iter().filter_map(|p| p.relevance).collect();
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let mean = scores.iter().map(|r| r / n).sum::<f64>();
        let scaled = mean * 10.0;
        if scaled.is_finite() {
            Some(scaled.round() / 10.0)
        } else {
            Some(mean)
        }
    }
}

impl SectionAnalyzer for ZoneConceptAnalyzer {
    fn domain(&self) -> DomainTag {
        DomainTag::ZoneConceptFramework
    }

    fn analyze(&self, record: &TrackingRecord, limits: &TextLimits) -> InsightRecord {
        Self::summarize(record.zone_concept_framework.as_ref(), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{InsightStatus, TRUNCATION_MARKER};

    fn protocol(name: &str) -> Protocol {
        Protocol {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn absent_framework_is_no_data() {
        let record = ZoneConceptAnalyzer::summarize(None, &TextLimits::default());
        assert_eq!(record.status, InsightStatus::NoData);
        assert!(record.insights.is_empty());
        assert_eq!(record.score, None);
    }

    #[test]
    fn framework_without_protocols_is_no_data() {
        let framework = ZoneConceptFramework::default();
        let record = ZoneConceptAnalyzer::summarize(Some(&framework), &TextLimits::default());
        assert_eq!(record.status, InsightStatus::NoData);
    }

    #[test]
    fn protocols_render_in_declared_order() {
        let framework = ZoneConceptFramework {
            version: None,
            protocols: vec![
                Protocol {
                    relevance: Some(9.0),
                    focus: Some("Calm inflammation".into()),
                    insights: vec!["Beta-endorphin stimulation".into()],
                    ..protocol("antiInflammatory")
                },
                Protocol {
                    key_technologies: vec!["Vitamin C".into(), "Ferulic acid".into()],
                    ..protocol("antiOxidant")
                },
            ],
        };

        let record = ZoneConceptAnalyzer::summarize(Some(&framework), &TextLimits::default());

        assert_eq!(
            record.insights,
            vec![
                "antiInflammatory (relevance 9/10): Calm inflammation".to_string(),
                "antiInflammatory: Beta-endorphin stimulation".to_string(),
                "antiOxidant key technologies: Vitamin C, Ferulic acid".to_string(),
            ]
        );
    }

    #[test]
    fn score_is_mean_relevance_rounded() {
        let framework = ZoneConceptFramework {
            version: None,
            protocols: vec![
                Protocol { relevance: Some(9.0), ..protocol("a") },
                Protocol { relevance: Some(10.0), ..protocol("b") },
                Protocol { relevance: Some(10.0), ..protocol("c") },
                protocol("d"),
            ],
        };
        let record = ZoneConceptAnalyzer::summarize(Some(&framework), &TextLimits::default());
        assert_eq!(record.score, Some(Score::Numeric(9.7)));
    }

    #[test]
    fn huge_relevance_keeps_a_finite_score() {
        let framework = ZoneConceptFramework {
            version: None,
            protocols: vec![
                Protocol { relevance: Some(1e308), ..protocol("a") },
                Protocol { relevance: Some(1e308), ..protocol("b") },
            ],
        };
        let record = ZoneConceptAnalyzer::summarize(Some(&framework), &TextLimits::default());
        assert_eq!(record.score, Some(Score::Numeric(1e308)));
        assert!(record
            .verify(DomainTag::ZoneConceptFramework, &TextLimits::default())
            .is_ok());
    }

    #[test]
    fn blank_focus_insights_and_technologies_are_skipped() {
        let framework = ZoneConceptFramework {
            version: None,
            protocols: vec![Protocol {
                focus: Some(" ".into()),
                insights: vec!["".into(), "Calm first".into()],
                key_technologies: vec!["\n".into()],
                ..protocol("antiInflammatory")
            }],
        };
        let record = ZoneConceptAnalyzer::summarize(Some(&framework), &TextLimits::default());
        assert_eq!(record.insights, vec!["antiInflammatory: Calm first".to_string()]);
    }

    #[test]
    fn long_insight_is_truncated() {
        let framework = ZoneConceptFramework {
            version: None,
            protocols: vec![Protocol {
                insights: vec!["abcdefghij".into()],
                ..protocol("p")
            }],
        };
        let record = ZoneConceptAnalyzer::summarize(Some(&framework), &TextLimits::new(4));
        assert_eq!(record.insights, vec![format!("p: abcd{}", TRUNCATION_MARKER)]);
    }
}

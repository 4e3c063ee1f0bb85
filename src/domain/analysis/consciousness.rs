//! Consciousness Analyzer - summarizes the organizational-consciousness state.

use super::{InsightRecord, Score, SectionAnalyzer, TextLimits};
use crate::domain::foundation::DomainTag;
use crate::domain::tracking::{ConsciousnessState, EvolutionLevel, TrackingRecord};

/// Analyzer for the organizational-consciousness state.
pub struct ConsciousnessAnalyzer;

impl ConsciousnessAnalyzer {
    /// Summarizes the consciousness slice.
    ///
    /// The first insight combines current state and evolution level; history
    /// entries follow in source order. The evolution level doubles as score.
    pub fn summarize(state: Option<&ConsciousnessState>, limits: &TextLimits) -> InsightRecord {
        let Some(state) = state else {
            return InsightRecord::no_data(DomainTag::ConsciousnessState);
        };

        let level = state.evolution_level.as_ref().and_then(|level| match level {
            EvolutionLevel::Numeric(n) => Some(n.to_string()),
            EvolutionLevel::Label(label) => limits.truncate_non_blank(label),
        });
        let current = state
            .current_state
            .as_deref()
            .and_then(|current| limits.truncate_non_blank(current));

        let mut insights = Vec::new();
        match (current, level.as_deref()) {
            (Some(current), Some(level)) => insights.push(format!(
                "Current state: {} (evolution level {})",
                current, level
            )),
            (Some(current), None) => insights.push(format!("Current state: {}", current)),
            (None, Some(level)) => insights.push(format!("Evolution level: {}", level)),
            (None, None) => {}
        }

        // Blank history states carry nothing to report.
        insights.extend(state.history.iter().filter_map(|entry| {
            let entry_state = limits.truncate_non_blank(&entry.state)?;
            let period = entry
                .period
                .as_deref()
                .and_then(|period| limits.truncate_non_blank(period));
            Some(match period {
                Some(period) => format!("{}: {}", period, entry_state),
                None => entry_state,
            })
        }));

        let score = state.evolution_level.as_ref().and_then(|level| match level {
            EvolutionLevel::Numeric(n) => Some(Score::Numeric(*n)),
            EvolutionLevel::Label(label) => {
                limits.truncate_non_blank(label).map(Score::Qualitative)
            }
        });

        InsightRecord::new(DomainTag::ConsciousnessState, insights, score)
    }
}

impl SectionAnalyzer for ConsciousnessAnalyzer {
    fn domain(&self) -> DomainTag {
        DomainTag::ConsciousnessState
    }

    fn analyze(&self, record: &TrackingRecord, limits: &TextLimits) -> InsightRecord {
        Self::summarize(record.consciousness_state.as_ref(), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::InsightStatus;
    use crate::domain::tracking::HistoryEntry;

    #[test]
    fn stable_level_three_yields_single_combined_insight() {
        let state = ConsciousnessState {
            current_state: Some("stable".into()),
            evolution_level: Some(EvolutionLevel::Numeric(3.0)),
            history: vec![],
        };
        let record = ConsciousnessAnalyzer::summarize(Some(&state), &TextLimits::default());
        assert_eq!(
            record.insights,
            vec!["Current state: stable (evolution level 3)".to_string()]
        );
        assert_eq!(record.score, Some(Score::Numeric(3.0)));
        assert_eq!(record.status, InsightStatus::Analyzed);
    }

    #[test]
    fn qualitative_level_becomes_qualitative_score() {
        let state = ConsciousnessState {
            current_state: None,
            evolution_level: Some(EvolutionLevel::Label("Advanced".into())),
            history: vec![],
        };
        let record = ConsciousnessAnalyzer::summarize(Some(&state), &TextLimits::default());
        assert_eq!(record.insights, vec!["Evolution level: Advanced".to_string()]);
        assert_eq!(record.score, Some(Score::Qualitative("Advanced".into())));
    }

    #[test]
    fn history_follows_in_source_order() {
        let state = ConsciousnessState {
            current_state: Some("transcendent".into()),
            evolution_level: None,
            history: vec![
                HistoryEntry { period: Some("2023".into()), state: "enhanced".into() },
                HistoryEntry { period: None, state: "baseline".into() },
            ],
        };
        let record = ConsciousnessAnalyzer::summarize(Some(&state), &TextLimits::default());
        assert_eq!(
            record.insights,
            vec![
                "Current state: transcendent".to_string(),
                "2023: enhanced".to_string(),
                "baseline".to_string(),
            ]
        );
    }

    #[test]
    fn blank_history_and_labels_are_skipped() {
        let state = ConsciousnessState {
            current_state: Some("  ".into()),
            evolution_level: Some(EvolutionLevel::Label("".into())),
            history: vec![
                HistoryEntry { period: None, state: "".into() },
                HistoryEntry { period: Some(" ".into()), state: "emerging".into() },
                HistoryEntry { period: Some("2024".into()), state: "\n".into() },
            ],
        };
        let record = ConsciousnessAnalyzer::summarize(Some(&state), &TextLimits::default());
        assert_eq!(record.insights, vec!["emerging".to_string()]);
        assert_eq!(record.score, None);
        assert!(record
            .verify(DomainTag::ConsciousnessState, &TextLimits::default())
            .is_ok());
    }

    #[test]
    fn only_blank_history_is_no_data() {
        let state = ConsciousnessState {
            history: vec![HistoryEntry { period: None, state: "".into() }],
            ..Default::default()
        };
        let record = ConsciousnessAnalyzer::summarize(Some(&state), &TextLimits::default());
        assert_eq!(record.status, InsightStatus::NoData);
    }

    #[test]
    fn empty_state_is_no_data() {
        let record = ConsciousnessAnalyzer::summarize(
            Some(&ConsciousnessState::default()),
            &TextLimits::default(),
        );
        assert_eq!(record.status, InsightStatus::NoData);
    }
}

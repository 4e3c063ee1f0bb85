//! Integration Analyzer - immediate actions followed by the long-term plan.

use super::{InsightRecord, SectionAnalyzer, TextLimits};
use crate::domain::foundation::DomainTag;
use crate::domain::tracking::{IntegrationStrategy, TrackingRecord};

pub struct IntegrationAnalyzer;

impl IntegrationAnalyzer {
    pub fn summarize(strategy: Option<&IntegrationStrategy>, limits: &TextLimits) -> InsightRecord {
        let Some(strategy) = strategy else {
            return InsightRecord::no_data(DomainTag::IntegrationStrategy);
        };

        let immediate = strategy
            .immediate_actions
            .iter()
            .filter_map(|action| limits.truncate_non_blank(action))
            .map(|action| format!("Immediate action: {}", action));
        let long_term = strategy
            .long_term_plan
            .iter()
            .filter_map(|plan| limits.truncate_non_blank(plan))
            .map(|plan| format!("Long-term plan: {}", plan));

        InsightRecord::new(
            DomainTag::IntegrationStrategy,
            immediate.chain(long_term).collect(),
            None,
        )
    }
}

impl SectionAnalyzer for IntegrationAnalyzer {
    fn domain(&self) -> DomainTag {
        DomainTag::IntegrationStrategy
    }

    fn analyze(&self, record: &TrackingRecord, limits: &TextLimits) -> InsightRecord {
        Self::summarize(record.integration_strategy.as_ref(), limits)
    }
}

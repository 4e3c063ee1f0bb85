//! TrackingRecord - the merged, immutable view of both tracking data sources.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::DomainTag;

/// One named protocol of the zone-concept framework.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Protocol {
    pub name: String,
    /// Relevance on a 0-10 scale.
    pub relevance: Option<f64>,
    pub focus: Option<String>,
    pub insights: Vec<String>,
    pub key_technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneConceptFramework {
    pub version: Option<String>,
    /// Protocols in the order the source declares them.
    pub protocols: Vec<Protocol>,
}

/// Evolution level is either a numeric stage or a qualitative label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, expecting = "a number or a string")]
pub enum EvolutionLevel {
    Numeric(f64),
    Label(String),
}

impl fmt::Display for EvolutionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionLevel::Numeric(n) => write!(f, "{}", n),
            EvolutionLevel::Label(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryEntry {
    pub period: Option<String>,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsciousnessState {
    pub current_state: Option<String>,
    pub evolution_level: Option<EvolutionLevel>,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FocusArea {
    pub title: String,
    pub actionable_insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfessionalGuidance {
    pub focus_areas: Vec<FocusArea>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trend {
    pub name: String,
    pub description: Option<String>,
    pub impact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnvironmentalScan {
    pub trends: Vec<Trend>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegrationStrategy {
    pub immediate_actions: Vec<String>,
    pub long_term_plan: Vec<String>,
}

/// Learning-cycle completion block; shown in report headers, never analyzed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleCompletion {
    pub status: Option<String>,
    pub insights: Vec<String>,
}

/// The loaded content of both tracking sources, merged into one record.
///
/// Absent domains are `None` and mean "no data for this domain".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackingRecord {
    pub zone_concept_framework: Option<ZoneConceptFramework>,
    pub consciousness_state: Option<ConsciousnessState>,
    pub professional_guidance: Option<ProfessionalGuidance>,
    pub environmental_scan: Option<EnvironmentalScan>,
    pub integration_strategy: Option<IntegrationStrategy>,
    pub cycle_completion: Option<CycleCompletion>,
}

impl TrackingRecord {
    /// Returns true if the given domain is present.
    pub fn has_domain(&self, domain: DomainTag) -> bool {
        match domain {
            DomainTag::ZoneConceptFramework => self.zone_concept_framework.is_some(),
            DomainTag::ConsciousnessState => self.consciousness_state.is_some(),
            DomainTag::ProfessionalGuidance => self.professional_guidance.is_some(),
            DomainTag::EnvironmentalScan => self.environmental_scan.is_some(),
            DomainTag::IntegrationStrategy => self.integration_strategy.is_some(),
        }
    }

    /// Returns true if none of the five tracked domains is present.
    pub fn is_empty(&self) -> bool {
        !DomainTag::all().iter().any(|d| self.has_domain(*d))
    }

    /// Fills domains this record lacks from `other`.
    ///
    /// Returns the wire names of domains present in both, where `self` wins.
    pub fn fill_missing_from(&mut self, other: TrackingRecord) -> Vec<&'static str> {
        let mut shadowed = Vec::new();

        fn fill<T>(
            slot: &mut Option<T>,
            incoming: Option<T>,
            name: &'static str,
            shadowed: &mut Vec<&'static str>,
        ) {
            match (slot.is_some(), incoming) {
                (true, Some(_)) => shadowed.push(name),
                (false, Some(value)) => *slot = Some(value),
                (_, None) => {}
            }
        }

        fill(
            &mut self.zone_concept_framework,
            other.zone_concept_framework,
            "zoneConceptFramework",
            &mut shadowed,
        );
        fill(
            &mut self.consciousness_state,
            other.consciousness_state,
            "consciousnessState",
            &mut shadowed,
        );
        fill(
            &mut self.professional_guidance,
            other.professional_guidance,
            "professionalGuidance",
            &mut shadowed,
        );
        fill(
            &mut self.environmental_scan,
            other.environmental_scan,
            "environmentalScan",
            &mut shadowed,
        );
        fill(
            &mut self.integration_strategy,
            other.integration_strategy,
            "integrationStrategy",
            &mut shadowed,
        );
        fill(
            &mut self.cycle_completion,
            other.cycle_completion,
            "cycleCompletion",
            &mut shadowed,
        );

        shadowed
    }
}

/// Non-fatal conditions found while loading, surfaced in the rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// The sources parsed but none carries any tracked domain.
    EmptyTrackingData { sources: Vec<String> },
    /// A tracking source was not found and was treated as empty.
    MissingSource { source_name: String },
}

impl LoadWarning {
    /// Human-readable message for report rendering.
    pub fn message(&self) -> String {
        match self {
            LoadWarning::EmptyTrackingData { sources } => format!(
                "No tracked domains found in {}; no tracked data available.",
                sources.join(", ")
            ),
            LoadWarning::MissingSource { source_name } => {
                format!("Tracking source {} was not found and was treated as empty.", source_name)
            }
        }
    }

    /// Returns true if this warning means there is no tracked data at all.
    pub fn is_empty_tracking_data(&self) -> bool {
        matches!(self, LoadWarning::EmptyTrackingData { .. })
    }
}

//! DomainTag enum representing the five tracked organizational domains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five tracked domains, declared in rendering priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainTag {
    ZoneConceptFramework,
    ConsciousnessState,
    ProfessionalGuidance,
    EnvironmentalScan,
    IntegrationStrategy,
}

impl DomainTag {
    /// Returns all domains in rendering priority order.
    pub fn all() -> &'static [DomainTag] {
        &[
            DomainTag::ZoneConceptFramework,
            DomainTag::ConsciousnessState,
            DomainTag::ProfessionalGuidance,
            DomainTag::EnvironmentalScan,
            DomainTag::IntegrationStrategy,
        ]
    }

    /// Returns the 0-based rendering priority of this domain.
    pub fn priority(&self) -> usize {
        match self {
            DomainTag::ZoneConceptFramework => 0,
            DomainTag::ConsciousnessState => 1,
            DomainTag::ProfessionalGuidance => 2,
            DomainTag::EnvironmentalScan => 3,
            DomainTag::IntegrationStrategy => 4,
        }
    }

    /// Returns the key this domain uses in the tracking data files.
    pub fn wire_name(&self) -> &'static str {
        match self {
            DomainTag::ZoneConceptFramework => "zoneConceptFramework",
            DomainTag::ConsciousnessState => "consciousnessState",
            DomainTag::ProfessionalGuidance => "professionalGuidance",
            DomainTag::EnvironmentalScan => "environmentalScan",
            DomainTag::IntegrationStrategy => "integrationStrategy",
        }
    }

    /// Returns the heading used in rendered reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            DomainTag::ZoneConceptFramework => "Zone Concept Framework",
            DomainTag::ConsciousnessState => "Organizational Consciousness",
            DomainTag::ProfessionalGuidance => "Professional Guidance",
            DomainTag::EnvironmentalScan => "Environmental Scan",
            DomainTag::IntegrationStrategy => "Integration Strategy",
        }
    }

    /// Sorts and deduplicates a set of domains into priority order.
    pub fn in_priority_order(domains: impl IntoIterator<Item = DomainTag>) -> Vec<DomainTag> {
        let mut ordered: Vec<DomainTag> = domains.into_iter().collect();
        ordered.sort_by_key(DomainTag::priority);
        ordered.dedup();
        ordered
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_five_domains_in_priority_order() {
        let all = DomainTag::all();
        assert_eq!(all.len(), 5);
        for (i, tag) in all.iter().enumerate() {
            assert_eq!(tag.priority(), i);
        }
        assert_eq!(all[0], DomainTag::ZoneConceptFramework);
        assert_eq!(all[4], DomainTag::IntegrationStrategy);
    }

    #[test]
    fn wire_name_matches_serde_name() {
        for tag in DomainTag::all() {
            let json = serde_json::to_string(tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.wire_name()));
        }
    }

    #[test]
    fn unknown_domain_fails_to_deserialize() {
        assert!(serde_json::from_str::<DomainTag>("\"weatherReport\"").is_err());
    }

    #[test]
    fn serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&DomainTag::ConsciousnessState).unwrap(),
            "\"consciousnessState\""
        );
    }

    #[test]
    fn in_priority_order_sorts_and_dedups() {
        let ordered = DomainTag::in_priority_order(vec![
            DomainTag::IntegrationStrategy,
            DomainTag::ZoneConceptFramework,
            DomainTag::IntegrationStrategy,
        ]);
        assert_eq!(
            ordered,
            vec![DomainTag::ZoneConceptFramework, DomainTag::IntegrationStrategy]
        );
    }
}

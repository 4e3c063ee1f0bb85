//! AnalysisMode - the selector restricting which domains a run processes.
//!
//! The mode-to-domain mapping in [`AnalysisMode::domains`] is the only place
//! that decides which analyzers run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainTag, ReportError};

/// Analysis mode selected by the `ANALYSIS_TYPE` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    #[default]
    Full,
    ZoneConceptOnly,
    ConsciousnessOnly,
    GuidanceOnly,
}

impl AnalysisMode {
    /// Returns every recognized mode.
    pub fn all() -> &'static [AnalysisMode] {
        &[
            AnalysisMode::Full,
            AnalysisMode::ZoneConceptOnly,
            AnalysisMode::ConsciousnessOnly,
            AnalysisMode::GuidanceOnly,
        ]
    }

    /// Resolves an optional token; absent or blank tokens select `full`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnsupportedMode` for any unrecognized token.
    pub fn from_token(token: Option<&str>) -> Result<Self, ReportError> {
        match token.map(str::trim) {
            None | Some("") => Ok(AnalysisMode::Full),
            Some(t) => t.parse(),
        }
    }

    /// Returns the token that selects this mode.
    pub fn token(&self) -> &'static str {
        match self {
            AnalysisMode::Full => "full",
            AnalysisMode::ZoneConceptOnly => "zone_concept_only",
            AnalysisMode::ConsciousnessOnly => "consciousness_only",
            AnalysisMode::GuidanceOnly => "guidance_only",
        }
    }

    /// Returns the non-empty set of domains this mode analyzes, in priority order.
    pub fn domains(&self) -> &'static [DomainTag] {
        match self {
            AnalysisMode::Full => DomainTag::all(),
            AnalysisMode::ZoneConceptOnly => &[DomainTag::ZoneConceptFramework],
            AnalysisMode::ConsciousnessOnly => &[DomainTag::ConsciousnessState],
            AnalysisMode::GuidanceOnly => &[DomainTag::ProfessionalGuidance],
        }
    }

    /// Returns true if this mode analyzes the given domain.
    pub fn includes(&self, domain: DomainTag) -> bool {
        self.domains().contains(&domain)
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for AnalysisMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMode::all()
            .iter()
            .find(|mode| mode.token() == s)
            .copied()
            .ok_or_else(|| ReportError::unsupported_mode(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorKind;

    #[test]
    fn full_selects_all_five_domains() {
        assert_eq!(AnalysisMode::Full.domains(), DomainTag::all());
    }

    #[test]
    fn single_domain_modes_select_exactly_one_domain() {
        assert_eq!(
            AnalysisMode::ZoneConceptOnly.domains(),
            &[DomainTag::ZoneConceptFramework]
        );
        assert_eq!(
            AnalysisMode::ConsciousnessOnly.domains(),
            &[DomainTag::ConsciousnessState]
        );
        assert_eq!(
            AnalysisMode::GuidanceOnly.domains(),
            &[DomainTag::ProfessionalGuidance]
        );
    }

    #[test]
    fn every_mode_selects_a_non_empty_set() {
        for mode in AnalysisMode::all() {
            assert!(!mode.domains().is_empty(), "{} selects nothing", mode);
        }
    }

    #[test]
    fn tokens_round_trip() {
        for mode in AnalysisMode::all() {
            assert_eq!(mode.token().parse::<AnalysisMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn absent_or_blank_token_defaults_to_full() {
        assert_eq!(AnalysisMode::from_token(None).unwrap(), AnalysisMode::Full);
        assert_eq!(AnalysisMode::from_token(Some("  ")).unwrap(), AnalysisMode::Full);
    }

    #[test]
    fn token_is_trimmed() {
        assert_eq!(
            AnalysisMode::from_token(Some(" guidance_only\n")).unwrap(),
            AnalysisMode::GuidanceOnly
        );
    }

    #[test]
    fn unknown_token_is_unsupported_mode() {
        let err = AnalysisMode::from_token(Some("bogus_mode")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
        assert!(err.to_string().contains("bogus_mode"));
    }

    #[test]
    fn token_matching_is_case_sensitive() {
        assert!(AnalysisMode::from_token(Some("FULL")).is_err());
    }

    #[test]
    fn includes_checks_domain_membership() {
        assert!(AnalysisMode::Full.includes(DomainTag::EnvironmentalScan));
        assert!(!AnalysisMode::GuidanceOnly.includes(DomainTag::EnvironmentalScan));
    }
}

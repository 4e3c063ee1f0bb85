//! InsightRecord - normalized per-domain output of a section analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TextLimits;
use crate::domain::foundation::{DomainTag, ReportError};

/// Whether an analyzer found anything to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    Analyzed,
    NoData,
}

impl InsightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InsightStatus::Analyzed => "analyzed",
            InsightStatus::NoData => "no data",
        }
    }
}

impl fmt::Display for InsightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Optional numeric or qualitative score attached to a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Numeric(f64),
    Qualitative(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Numeric(n) => write!(f, "{}", n),
            Score::Qualitative(s) => write!(f, "{}", s),
        }
    }
}

/// Output of one section analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    pub domain: DomainTag,
    pub status: InsightStatus,
    /// Derived insight strings, in source order.
    pub insights: Vec<String>,
    pub score: Option<Score>,
}

impl InsightRecord {
    /// Builds a record, deriving the status from whether any insights exist.
    pub fn new(domain: DomainTag, insights: Vec<String>, score: Option<Score>) -> Self {
        let status = if insights.is_empty() {
            InsightStatus::NoData
        } else {
            InsightStatus::Analyzed
        };
        Self {
            domain,
            status,
            insights,
            score,
        }
    }

    /// A record for a domain with no input data.
    pub fn no_data(domain: DomainTag) -> Self {
        Self::new(domain, Vec::new(), None)
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    /// First derived insight, used for the cross-domain summary.
    pub fn headline(&self) -> Option<&str> {
        self.insights.first().map(String::as_str)
    }

    /// Checks the analyzer/renderer contract for a record produced for `expected`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RenderIntegrity` describing the first violation.
    pub fn verify(&self, expected: DomainTag, limits: &TextLimits) -> Result<(), ReportError> {
        if self.domain != expected {
            return Err(ReportError::render_integrity(
                expected,
                format!("analyzer returned a record tagged {}", self.domain),
            ));
        }

        let expected_status = if self.insights.is_empty() {
            InsightStatus::NoData
        } else {
            InsightStatus::Analyzed
        };
        if self.status != expected_status {
            return Err(ReportError::render_integrity(
                expected,
                format!(
                    "status '{}' does not match {} insight(s)",
                    self.status,
                    self.insights.len()
                ),
            ));
        }

        if let Some(i) = self.insights.iter().position(|s| s.trim().is_empty()) {
            return Err(ReportError::render_integrity(
                expected,
                format!("insight {} is empty", i),
            ));
        }

        match &self.score {
            Some(Score::Numeric(n)) if !n.is_finite() => {
                return Err(ReportError::render_integrity(
                    expected,
                    "numeric score is not finite",
                ));
            }
            Some(Score::Qualitative(label)) if !limits.admits(label) => {
                return Err(ReportError::render_integrity(
                    expected,
                    "qualitative score exceeds the truncation length",
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorKind;

    #[test]
    fn new_derives_status_from_insights() {
        let empty = InsightRecord::new(DomainTag::EnvironmentalScan, vec![], None);
        assert_eq!(empty.status, InsightStatus::NoData);

        let full = InsightRecord::new(DomainTag::EnvironmentalScan, vec!["x".into()], None);
        assert_eq!(full.status, InsightStatus::Analyzed);
    }

    #[test]
    fn verify_accepts_well_formed_record() {
        let record = InsightRecord::new(
            DomainTag::ConsciousnessState,
            vec!["Current state: stable".into()],
            Some(Score::Numeric(3.0)),
        );
        assert!(record
            .verify(DomainTag::ConsciousnessState, &TextLimits::default())
            .is_ok());
    }

    #[test]
    fn verify_rejects_wrong_domain() {
        let record = InsightRecord::no_data(DomainTag::IntegrationStrategy);
        let err = record
            .verify(DomainTag::ZoneConceptFramework, &TextLimits::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderIntegrity);
    }

    #[test]
    fn verify_rejects_inconsistent_status() {
        let record = InsightRecord {
            domain: DomainTag::ProfessionalGuidance,
            status: InsightStatus::Analyzed,
            insights: vec![],
            score: None,
        };
        assert!(record
            .verify(DomainTag::ProfessionalGuidance, &TextLimits::default())
            .is_err());
    }

    #[test]
    fn verify_rejects_blank_insight() {
        let record = InsightRecord::new(DomainTag::ProfessionalGuidance, vec!["  ".into()], None);
        assert!(record
            .verify(DomainTag::ProfessionalGuidance, &TextLimits::default())
            .is_err());
    }

    #[test]
    fn verify_rejects_non_finite_score() {
        let record = InsightRecord::new(
            DomainTag::ZoneConceptFramework,
            vec!["x".into()],
            Some(Score::Numeric(f64::NAN)),
        );
        assert!(record
            .verify(DomainTag::ZoneConceptFramework, &TextLimits::default())
            .is_err());
    }

    #[test]
    fn serializes_with_camel_case_domain_and_snake_case_status() {
        let record = InsightRecord::no_data(DomainTag::ProfessionalGuidance);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["domain"], "professionalGuidance");
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["insights"].as_array().unwrap().len(), 0);
    }
}

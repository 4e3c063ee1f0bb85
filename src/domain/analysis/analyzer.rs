//! SectionAnalyzer capability and the registry mapping domains to analyzers.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{
    ConsciousnessAnalyzer, EnvironmentalScanAnalyzer, GuidanceAnalyzer, InsightRecord,
    IntegrationAnalyzer, TextLimits, ZoneConceptAnalyzer,
};
use crate::domain::foundation::{DomainTag, ReportError};
use crate::domain::tracking::TrackingRecord;

/// One analyzer per tracked domain.
///
/// Implementations read only their own domain's slice of the record and
/// must not fail: missing input yields a `no_data` record.
pub trait SectionAnalyzer: Send + Sync {
    /// The domain this analyzer summarizes.
    fn domain(&self) -> DomainTag;

    /// Summarizes this analyzer's slice of `record`.
    fn analyze(&self, record: &TrackingRecord, limits: &TextLimits) -> InsightRecord;
}

/// Returns the built-in analyzer for a domain.
pub fn standard_analyzer(domain: DomainTag) -> Arc<dyn SectionAnalyzer> {
    match domain {
        DomainTag::ZoneConceptFramework => Arc::new(ZoneConceptAnalyzer),
        DomainTag::ConsciousnessState => Arc::new(ConsciousnessAnalyzer),
        DomainTag::ProfessionalGuidance => Arc::new(GuidanceAnalyzer),
        DomainTag::EnvironmentalScan => Arc::new(EnvironmentalScanAnalyzer),
        DomainTag::IntegrationStrategy => Arc::new(IntegrationAnalyzer),
    }
}

/// Lookup from domain tag to analyzer.
#[derive(Clone)]
pub struct AnalyzerRegistry {
    analyzers: BTreeMap<DomainTag, Arc<dyn SectionAnalyzer>>,
}

impl AnalyzerRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            analyzers: BTreeMap::new(),
        }
    }

    /// A registry holding the built-in analyzer for every domain.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for domain in DomainTag::all() {
            registry.register(standard_analyzer(*domain));
        }
        registry
    }

    /// Registers an analyzer under its own domain, returning any it replaced.
    pub fn register(
        &mut self,
        analyzer: Arc<dyn SectionAnalyzer>,
    ) -> Option<Arc<dyn SectionAnalyzer>> {
        self.analyzers.insert(analyzer.domain(), analyzer)
    }

    pub fn get(&self, domain: DomainTag) -> Option<&Arc<dyn SectionAnalyzer>> {
        self.analyzers.get(&domain)
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Runs exactly the analyzers for `domains`, in the order given, and
    /// verifies each record before returning it.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::RenderIntegrity` if a domain has no analyzer or
    /// an analyzer returns a record that breaks the contract.
    pub fn analyze(
        &self,
        domains: &[DomainTag],
        record: &TrackingRecord,
        limits: &TextLimits,
    ) -> Result<Vec<InsightRecord>, ReportError> {
        domains
            .iter()
            .map(|domain| {
                let analyzer = self.get(*domain).ok_or_else(|| {
                    ReportError::render_integrity(*domain, "no analyzer registered")
                })?;
                let insight = analyzer.analyze(record, limits);
                insight.verify(*domain, limits)?;
                Ok(insight)
            })
            .collect()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("domains", &self.analyzers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::InsightStatus;
    use crate::domain::foundation::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAnalyzer {
        domain: DomainTag,
        calls: Arc<AtomicUsize>,
    }

    impl SectionAnalyzer for CountingAnalyzer {
        fn domain(&self) -> DomainTag {
            self.domain
        }

        fn analyze(&self, _record: &TrackingRecord, _limits: &TextLimits) -> InsightRecord {
            self.calls.fetch_add(1, Ordering::SeqCst);
            InsightRecord::no_data(self.domain)
        }
    }

    struct MislabelingAnalyzer;

    impl SectionAnalyzer for MislabelingAnalyzer {
        fn domain(&self) -> DomainTag {
            DomainTag::EnvironmentalScan
        }

        fn analyze(&self, _record: &TrackingRecord, _limits: &TextLimits) -> InsightRecord {
            InsightRecord::no_data(DomainTag::IntegrationStrategy)
        }
    }

    #[test]
    fn standard_registry_covers_every_domain() {
        let registry = AnalyzerRegistry::standard();
        assert_eq!(registry.len(), 5);
        for domain in DomainTag::all() {
            assert_eq!(registry.get(*domain).unwrap().domain(), *domain);
        }
    }

    #[test]
    fn analyze_runs_only_requested_domains() {
        let mut registry = AnalyzerRegistry::empty();
        let counters: Vec<_> = DomainTag::all()
            .iter()
            .map(|domain| {
                let calls = Arc::new(AtomicUsize::new(0));
                registry.register(Arc::new(CountingAnalyzer {
                    domain: *domain,
                    calls: calls.clone(),
                }));
                (*domain, calls)
            })
            .collect();

        let records = registry
            .analyze(
                &[DomainTag::ProfessionalGuidance],
                &TrackingRecord::default(),
                &TextLimits::default(),
            )
            .unwrap();

        assert_eq!(records.len(), 1);
        for (domain, calls) in counters {
            let expected = usize::from(domain == DomainTag::ProfessionalGuidance);
            assert_eq!(calls.load(Ordering::SeqCst), expected, "{}", domain);
        }
    }

    #[test]
    fn analyze_on_empty_record_yields_no_data_everywhere() {
        let records = AnalyzerRegistry::standard()
            .analyze(DomainTag::all(), &TrackingRecord::default(), &TextLimits::default())
            .unwrap();
        assert!(records.iter().all(|r| r.status == InsightStatus::NoData));
    }

    #[test]
    fn missing_analyzer_is_integrity_error() {
        let err = AnalyzerRegistry::empty()
            .analyze(
                &[DomainTag::ConsciousnessState],
                &TrackingRecord::default(),
                &TextLimits::default(),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderIntegrity);
    }

    #[test]
    fn mislabeled_record_is_integrity_error() {
        let mut registry = AnalyzerRegistry::standard();
        registry.register(Arc::new(MislabelingAnalyzer));
        let err = registry
            .analyze(
                &[DomainTag::EnvironmentalScan],
                &TrackingRecord::default(),
                &TextLimits::default(),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderIntegrity);
    }
}

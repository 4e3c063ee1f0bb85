//! Tracking module - the organizational tracking data model.
//!
//! - `TrackingRecord` - merged view of the two tracking sources
//! - `parse_tracking_source` - structural parsing with field-path errors
//! - `LoadWarning` - non-fatal loading conditions shown in reports

mod parse;
mod record;

pub use parse::parse_tracking_source;
pub use record::{
    ConsciousnessState, CycleCompletion, EnvironmentalScan, EvolutionLevel, FocusArea,
    HistoryEntry, IntegrationStrategy, LoadWarning, ProfessionalGuidance, Protocol,
    TrackingRecord, Trend, ZoneConceptFramework,
};

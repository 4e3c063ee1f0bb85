//! Analysis Module - Pure section analyzers over tracking data.
//!
//! Each analyzer is a stateless function from one domain's slice of the
//! `TrackingRecord` to an `InsightRecord`. Analyzers share no state, so the
//! order they run in never changes their output.
//!
//! # Components
//!
//! - `SectionAnalyzer` - Shared capability implemented once per domain
//! - `AnalyzerRegistry` - Domain-to-analyzer lookup used by the pipeline
//! - `InsightRecord` - Normalized analyzer output with status and score
//! - `TextLimits` - Free-text truncation applied by every analyzer
//!
//! # Shared Policies
//!
//! - Missing input yields a `no_data` record, never an error
//! - Source ordering of entries is preserved
//! - Truncation is the only lossy transformation

mod analyzer;
mod consciousness;
mod environmental_scan;
mod guidance;
mod insight;
mod integration;
mod text;
mod zone_concept;

pub use analyzer::{standard_analyzer, AnalyzerRegistry, SectionAnalyzer};
pub use consciousness::ConsciousnessAnalyzer;
pub use environmental_scan::EnvironmentalScanAnalyzer;
pub use guidance::GuidanceAnalyzer;
pub use insight::{InsightRecord, InsightStatus, Score};
pub use integration::IntegrationAnalyzer;
pub use text::{TextLimits, DEFAULT_TRUNCATION_LENGTH, TRUNCATION_MARKER};
pub use zone_concept::ZoneConceptAnalyzer;

//! Tracking Source Port - Data Loader interface.
//!
//! This port defines the contract for loading the organizational tracking
//! data and the model configuration for one run. The application depends on
//! this trait, while adapters (like JsonFileTrackingSource) provide the
//! implementation.

use async_trait::async_trait;

use crate::config::ReportSettings;
use crate::domain::foundation::ReportError;
use crate::domain::tracking::{LoadWarning, TrackingRecord};

/// Port for loading tracking data.
///
/// # Contract
///
/// Implementations must:
/// - Merge both tracking sources into one `TrackingRecord`, primary first
/// - Fall back to `ReportSettings::default()` when no model configuration exists
/// - Fail with `MalformedInput` for sources that are not structured data
/// - Fail with `DataFormat` naming the source and field for wrongly shaped domains
/// - Report "no tracked domains" as `LoadWarning::EmptyTrackingData`, not an error
///
/// # Usage
///
/// ```rust,ignore
/// let source: &dyn TrackingSource = get_source();
/// let loaded = source.load().await?;
///
/// for warning in &loaded.warnings {
///     tracing::warn!(warning = %warning.message());
/// }
/// ```
#[async_trait]
pub trait TrackingSource: Send + Sync {
    /// Load the tracking record, settings and warnings for one run.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` for malformed sources, wrongly shaped domains
    /// and out-of-range settings.
    async fn load(&self) -> Result<LoadedTracking, ReportError>;
}

/// Everything the Data Loader hands to the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedTracking {
    /// Merged, immutable tracking data.
    pub record: TrackingRecord,

    /// Resolved rendering parameters.
    pub settings: ReportSettings,

    /// Non-fatal loading conditions.
    pub warnings: Vec<LoadWarning>,
}

impl LoadedTracking {
    /// Creates a loaded record, adding the empty-data warning when needed.
    pub fn new(
        record: TrackingRecord,
        settings: ReportSettings,
        mut warnings: Vec<LoadWarning>,
        sources: &[&str],
    ) -> Self {
        if record.is_empty() && !warnings.iter().any(LoadWarning::is_empty_tracking_data) {
            warnings.push(LoadWarning::EmptyTrackingData {
                sources: sources.iter().map(|s| s.to_string()).collect(),
            });
        }
        Self {
            record,
            settings,
            warnings,
        }
    }
}

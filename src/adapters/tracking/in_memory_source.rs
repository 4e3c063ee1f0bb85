//! In-Memory Tracking Source Adapter
//!
//! Serves a fixed tracking record and counts loads.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::ReportSettings;
use crate::domain::foundation::ReportError;
use crate::domain::tracking::TrackingRecord;
use crate::ports::{LoadedTracking, TrackingSource};

/// In-memory tracking source
#[derive(Debug, Clone)]
pub struct InMemoryTrackingSource {
    loaded: LoadedTracking,
    load_count: Arc<AtomicUsize>,
}

impl InMemoryTrackingSource {
    /// Create a source serving `record` with default settings
    pub fn new(record: TrackingRecord) -> Self {
        Self::with_settings(record, ReportSettings::default())
    }

    /// Create a source serving `record` with the given settings
    pub fn with_settings(record: TrackingRecord, settings: ReportSettings) -> Self {
        Self {
            loaded: LoadedTracking::new(record, settings, Vec::new(), &["memory"]),
            load_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `load` was called
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryTrackingSource {
    fn default() -> Self {
        Self::new(TrackingRecord::default())
    }
}

#[async_trait]
impl TrackingSource for InMemoryTrackingSource {
    async fn load(&self) -> Result<LoadedTracking, ReportError> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.loaded.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tracking::LoadWarning;

    #[tokio::test]
    async fn counts_loads() {
        let source = InMemoryTrackingSource::default();
        assert_eq!(source.load_count(), 0);

        source.load().await.unwrap();
        source.load().await.unwrap();
        assert_eq!(source.load_count(), 2);
    }

    #[tokio::test]
    async fn empty_record_carries_empty_data_warning() {
        let loaded = InMemoryTrackingSource::default().load().await.unwrap();
        assert!(loaded.warnings.iter().any(LoadWarning::is_empty_tracking_data));
    }
}

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `tracking` - Tracking data sources (JSON files, in-memory)
//! - `document` - Report rendering (templates)
//! - `storage` - Report sinks (local filesystem, in-memory)

pub mod document;
pub mod storage;
pub mod tracking;

pub use document::TemplateReportRenderer;
pub use storage::{InMemoryReportSink, LocalReportStorage};
pub use tracking::{InMemoryTrackingSource, JsonFileTrackingSource};

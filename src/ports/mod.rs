//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TrackingSource` - Data Loader: tracking sources plus model configuration
//! - `ReportRenderer` - Narrative, structured and summary rendering
//! - `ReportSink` - Output Sink persisting rendered documents

mod report_renderer;
mod report_sink;
mod tracking_source;

pub use report_renderer::{RenderError, ReportRenderer};
pub use report_sink::{DocumentKind, PersistedFile, PersistedReport, ReportSink, StorageError};
pub use tracking_source::{LoadedTracking, TrackingSource};

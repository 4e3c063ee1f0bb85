//! Report module - the rendered artifact and its summary.
//!
//! A report separates comparable `ReportContent` from `ReportMetadata`
//! (timestamp, run id) so two runs over the same inputs can be compared.

mod model;
mod summary;

pub use model::{NarrativeDocument, Report, ReportContent, ReportMetadata, StructuredDocument};
pub use summary::{OverallStatus, Summary, DEFAULT_SUMMARY_CAP};

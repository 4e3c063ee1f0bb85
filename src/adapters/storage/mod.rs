//! Storage Adapters
//!
//! Implementations of the ReportSink port for persisting rendered reports.
//!
//! ## Available Adapters
//!
//! - **LocalReportStorage** - Writes reports into the outputs directory
//! - **InMemoryReportSink** - Keeps reports in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryReportSink, LocalReportStorage};
//!
//! // Production: file-based storage
//! let sink = LocalReportStorage::new("./outputs");
//!
//! // Testing: in-memory storage
//! let sink = InMemoryReportSink::new();
//! ```

mod in_memory_report_sink;
mod local_report_storage;

pub use in_memory_report_sink::InMemoryReportSink;
pub use local_report_storage::{LocalReportStorage, SUMMARY_FILE_NAME};

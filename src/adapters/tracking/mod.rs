//! Tracking source adapters.
//!
//! - `JsonFileTrackingSource` - reads the tracking files and model configuration from disk
//! - `InMemoryTrackingSource` - fixed record for tests

mod in_memory_source;
mod json_file_source;

pub use in_memory_source::InMemoryTrackingSource;
pub use json_file_source::JsonFileTrackingSource;

//! Command handlers for the application layer.
//!
//! - `GenerateReportHandler` - one report generation run, mode through sink

mod generate_report;

pub use generate_report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
    EXIT_CONFIGURATION, EXIT_INPUT, EXIT_RENDER, EXIT_SINK, EXIT_SUCCESS,
};

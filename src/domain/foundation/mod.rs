//! Foundation module - Shared domain primitives.
//!
//! Contains the domain tags, the analysis mode selector, timestamps and
//! the error taxonomy that form the vocabulary of the report pipeline.

mod analysis_mode;
mod domain_tag;
mod errors;
mod timestamp;

pub use analysis_mode::AnalysisMode;
pub use domain_tag::DomainTag;
pub use errors::{ErrorKind, ReportError};
pub use timestamp::Timestamp;

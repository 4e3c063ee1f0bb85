//! Domain layer containing the report pipeline's business logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (domain tags, analysis mode, errors)
//! - `tracking` - Tracking data model and structural parsing
//! - `analysis` - Pure section analyzers producing insight records
//! - `report` - Report content, rendered documents and summary

pub mod analysis;
pub mod foundation;
pub mod report;
pub mod tracking;

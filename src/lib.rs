//! RegimA Insights - Rule-based organizational tracking reports
//!
//! This crate turns the RegimA organizational learning cycle tracking data
//! into deterministic narrative and structured analysis reports, plus a
//! condensed summary for the downstream notification step.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Summary cap must be at least 1")]
    InvalidSummaryCap,

    #[error("Truncation length must be at least 1")]
    InvalidTruncationLength,

    #[error("Domain override must name at least one domain")]
    EmptyDomainOverride,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}

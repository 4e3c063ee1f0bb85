//! Report rendering settings (the model configuration source)

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{TextLimits, DEFAULT_TRUNCATION_LENGTH};
use crate::domain::foundation::DomainTag;
use crate::domain::report::DEFAULT_SUMMARY_CAP;

/// Serialization format of the model configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    /// Picks the format from a file name; anything but `.yaml`/`.yml` is JSON.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            SettingsFormat::Yaml
        } else {
            SettingsFormat::Json
        }
    }
}

/// Rendering parameters, resolved once per run.
///
/// Every option has a built-in default so a missing model configuration
/// file is never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    /// Maximum insight strings carried in the summary
    #[serde(default = "default_summary_cap")]
    pub summary_cap: usize,

    /// Maximum characters kept from one free-text field
    #[serde(default = "default_truncation_length")]
    pub truncation_length: usize,

    /// Explicit domain subset; intersected with the analysis mode's domains
    #[serde(default)]
    pub enabled_domains_override: Option<Vec<DomainTag>>,
}

impl ReportSettings {
    /// Parses settings text in the given format.
    pub fn parse(contents: &str, format: SettingsFormat) -> Result<Self, String> {
        match format {
            SettingsFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            SettingsFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    pub fn text_limits(&self) -> TextLimits {
        TextLimits::new(self.truncation_length)
    }

    /// Narrows `domains` to the override, keeping the given order.
    pub fn restrict(&self, domains: &[DomainTag]) -> Vec<DomainTag> {
        match &self.enabled_domains_override {
            None => domains.to_vec(),
            Some(enabled) => domains
                .iter()
                .filter(|d| enabled.contains(*d))
                .copied()
                .collect(),
        }
    }

    /// Validate report settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.summary_cap == 0 {
            return Err(ValidationError::InvalidSummaryCap);
        }
        if self.truncation_length == 0 {
            return Err(ValidationError::InvalidTruncationLength);
        }
        if self
            .enabled_domains_override
            .as_ref()
            .is_some_and(|d| d.is_empty())
        {
            return Err(ValidationError::EmptyDomainOverride);
        }
        Ok(())
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            summary_cap: default_summary_cap(),
            truncation_length: default_truncation_length(),
            enabled_domains_override: None,
        }
    }
}

fn default_summary_cap() -> usize {
    DEFAULT_SUMMARY_CAP
}

fn default_truncation_length() -> usize {
    DEFAULT_TRUNCATION_LENGTH
}

//! Error types for the report pipeline.

use std::fmt;
use thiserror::Error;

use super::DomainTag;

/// Error kinds organized by category.
///
/// Every fatal pipeline error maps to exactly one kind; the entry point uses
/// the kind to pick its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Input errors
    MalformedInput,
    DataFormat,

    // Configuration errors
    UnsupportedMode,
    InvalidSettings,
    EmptyDomainSelection,

    // Rendering errors
    RenderIntegrity,
}

impl ErrorKind {
    /// Returns true for errors caused by run configuration rather than data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnsupportedMode
                | ErrorKind::InvalidSettings
                | ErrorKind::EmptyDomainSelection
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::MalformedInput => "MALFORMED_INPUT",
            ErrorKind::DataFormat => "DATA_FORMAT",
            ErrorKind::UnsupportedMode => "UNSUPPORTED_MODE",
            ErrorKind::InvalidSettings => "INVALID_SETTINGS",
            ErrorKind::EmptyDomainSelection => "EMPTY_DOMAIN_SELECTION",
            ErrorKind::RenderIntegrity => "RENDER_INTEGRITY",
        };
        write!(f, "{}", s)
    }
}

/// Fatal errors raised while loading, selecting, analyzing or rendering.
///
/// None of these are converted into a degraded report: they propagate to
/// the entry point, which exits non-zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The source is not parseable structured data.
    #[error("Malformed input in {source_name}: {reason}")]
    MalformedInput { source_name: String, reason: String },

    /// The source parses but a field has the wrong shape.
    #[error("Invalid data in {source_name} at '{field}': {reason}")]
    DataFormat {
        source_name: String,
        field: String,
        reason: String,
    },

    /// The analysis-mode token is not recognized.
    #[error("Unsupported analysis mode '{token}' (expected one of: full, zone_concept_only, consciousness_only, guidance_only)")]
    UnsupportedMode { token: String },

    /// The model configuration parses but holds out-of-range values.
    #[error("Invalid settings in {source_name}: {reason}")]
    InvalidSettings { source_name: String, reason: String },

    /// The domain override leaves nothing to analyze for the active mode.
    #[error("Domain override leaves no domains to analyze for mode '{mode}'")]
    EmptyDomainSelection { mode: String },

    /// An analyzer broke its contract with the renderer.
    #[error("Render integrity violated for {domain}: {reason}")]
    RenderIntegrity { domain: DomainTag, reason: String },
}

impl ReportError {
    /// Creates a malformed input error.
    pub fn malformed_input(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ReportError::MalformedInput {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a data format error naming the offending field.
    pub fn data_format(
        source_name: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ReportError::DataFormat {
            source_name: source_name.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported mode error.
    pub fn unsupported_mode(token: impl Into<String>) -> Self {
        ReportError::UnsupportedMode {
            token: token.into(),
        }
    }

    /// Creates an invalid settings error.
    pub fn invalid_settings(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        ReportError::InvalidSettings {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an empty domain selection error.
    pub fn empty_selection(mode: impl Into<String>) -> Self {
        ReportError::EmptyDomainSelection { mode: mode.into() }
    }

    /// Creates a render integrity error.
    pub fn render_integrity(domain: DomainTag, reason: impl Into<String>) -> Self {
        ReportError::RenderIntegrity {
            domain,
            reason: reason.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::MalformedInput { .. } => ErrorKind::MalformedInput,
            ReportError::DataFormat { .. } => ErrorKind::DataFormat,
            ReportError::UnsupportedMode { .. } => ErrorKind::UnsupportedMode,
            ReportError::InvalidSettings { .. } => ErrorKind::InvalidSettings,
            ReportError::EmptyDomainSelection { .. } => ErrorKind::EmptyDomainSelection,
            ReportError::RenderIntegrity { .. } => ErrorKind::RenderIntegrity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_format_error_names_source_and_field() {
        let err = ReportError::data_format(
            "regcyc.json",
            "professionalGuidance.focusAreas[1].title",
            "expected a string",
        );
        let message = err.to_string();
        assert!(message.contains("regcyc.json"));
        assert!(message.contains("professionalGuidance.focusAreas[1].title"));
        assert_eq!(err.kind(), ErrorKind::DataFormat);
    }

    #[test]
    fn unsupported_mode_displays_token() {
        let err = ReportError::unsupported_mode("bogus_mode");
        assert!(err.to_string().contains("'bogus_mode'"));
        assert_eq!(err.kind(), ErrorKind::UnsupportedMode);
    }

    #[test]
    fn render_integrity_displays_domain() {
        let err = ReportError::render_integrity(DomainTag::EnvironmentalScan, "empty insight");
        assert_eq!(
            err.to_string(),
            "Render integrity violated for environmentalScan: empty insight"
        );
    }

    #[test]
    fn error_kind_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorKind::MalformedInput), "MALFORMED_INPUT");
        assert_eq!(format!("{}", ErrorKind::RenderIntegrity), "RENDER_INTEGRITY");
    }

    #[test]
    fn configuration_kinds_are_flagged() {
        assert!(ErrorKind::UnsupportedMode.is_configuration());
        assert!(ErrorKind::EmptyDomainSelection.is_configuration());
        assert!(ErrorKind::InvalidSettings.is_configuration());
        assert!(!ErrorKind::DataFormat.is_configuration());
    }
}

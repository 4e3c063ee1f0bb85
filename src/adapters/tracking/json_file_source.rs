//! JSON file tracking source - Implementation of TrackingSource.
//!
//! Reads the primary tracking file (`regcyc.json`), the secondary cycle
//! completion file (`cycleCompletion.json`) and the optional model
//! configuration from disk.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::{PathsConfig, ReportSettings, SettingsFormat};
use crate::domain::foundation::ReportError;
use crate::domain::tracking::{parse_tracking_source, LoadWarning, TrackingRecord};
use crate::ports::{LoadedTracking, TrackingSource};

/// Filesystem tracking source.
///
/// # Merge Rule
///
/// The primary file wins per domain; the secondary file only fills domains
/// the primary lacks. A tracking file missing on disk counts as an empty
/// source and yields a `MissingSource` warning. A missing model
/// configuration file means built-in defaults.
///
/// # Usage
///
/// ```rust,ignore
/// let source = JsonFileTrackingSource::from_config(&config.paths);
/// let loaded = source.load().await?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileTrackingSource {
    tracking_path: PathBuf,
    cycle_path: PathBuf,
    model_config_path: PathBuf,
}

impl JsonFileTrackingSource {
    pub fn new(
        tracking_path: impl Into<PathBuf>,
        cycle_path: impl Into<PathBuf>,
        model_config_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tracking_path: tracking_path.into(),
            cycle_path: cycle_path.into(),
            model_config_path: model_config_path.into(),
        }
    }

    /// Creates a source reading the files named by the path configuration.
    pub fn from_config(paths: &PathsConfig) -> Self {
        Self::new(
            paths.tracking_path(),
            paths.cycle_path(),
            paths.model_config_path(),
        )
    }

    /// Name used for a source in errors and warnings.
    fn source_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Reads a file, returning `None` when it does not exist.
    async fn read_optional(path: &Path) -> Result<Option<String>, ReportError> {
        match fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReportError::malformed_input(
                Self::source_name(path),
                format!("cannot be read: {}", e),
            )),
        }
    }

    /// Loads one tracking file, or an empty record with a warning if missing.
    async fn load_tracking_file(
        path: &Path,
    ) -> Result<(TrackingRecord, Option<LoadWarning>), ReportError> {
        let name = Self::source_name(path);

        let Some(contents) = Self::read_optional(path).await? else {
            tracing::warn!(source = %name, "Tracking source not found, treating as empty");
            return Ok((
                TrackingRecord::default(),
                Some(LoadWarning::MissingSource { source_name: name }),
            ));
        };

        let root: Value = serde_json::from_str(&contents)
            .map_err(|e| ReportError::malformed_input(&name, e.to_string()))?;
        if !root.is_object() {
            return Err(ReportError::malformed_input(
                &name,
                "top level must be a JSON object",
            ));
        }

        let record = parse_tracking_source(&name, &root)?;
        tracing::debug!(source = %name, "Tracking source parsed");
        Ok((record, None))
    }

    /// Loads the model configuration, falling back to defaults when absent.
    async fn load_settings(&self) -> Result<ReportSettings, ReportError> {
        let name = Self::source_name(&self.model_config_path);

        let Some(contents) = Self::read_optional(&self.model_config_path).await? else {
            tracing::info!(source = %name, "Model configuration not found, using defaults");
            return Ok(ReportSettings::default());
        };

        let settings = ReportSettings::parse(&contents, SettingsFormat::from_file_name(&name))
            .map_err(|reason| ReportError::malformed_input(&name, reason))?;
        settings
            .validate()
            .map_err(|e| ReportError::invalid_settings(&name, e.to_string()))?;

        tracing::debug!(
            source = %name,
            summary_cap = settings.summary_cap,
            truncation_length = settings.truncation_length,
            "Model configuration loaded"
        );
        Ok(settings)
    }
}

#[async_trait]
impl TrackingSource for JsonFileTrackingSource {
    async fn load(&self) -> Result<LoadedTracking, ReportError> {
        let settings = self.load_settings().await?;

        let (mut record, primary_warning) = Self::load_tracking_file(&self.tracking_path).await?;
        let (secondary, secondary_warning) = Self::load_tracking_file(&self.cycle_path).await?;

        for domain in record.fill_missing_from(secondary) {
            tracing::debug!(domain, "Domain in both sources, primary source wins");
        }

        let warnings = primary_warning.into_iter().chain(secondary_warning).collect();
        let primary_name = Self::source_name(&self.tracking_path);
        let secondary_name = Self::source_name(&self.cycle_path);

        Ok(LoadedTracking::new(
            record,
            settings,
            warnings,
            &[primary_name.as_str(), secondary_name.as_str()],
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

//! Input and output location configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the tracking data, model configuration and outputs live
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the tracking data and model configuration files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Primary tracking source, relative to `data_dir`
    #[serde(default = "default_tracking_file")]
    pub tracking_file: String,

    /// Secondary (cycle completion) tracking source, relative to `data_dir`
    #[serde(default = "default_cycle_file")]
    pub cycle_file: String,

    /// Optional model configuration, relative to `data_dir`
    #[serde(default = "default_model_config_file")]
    pub model_config_file: String,

    /// Directory the rendered reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl PathsConfig {
    pub fn tracking_path(&self) -> PathBuf {
        self.data_dir.join(&self.tracking_file)
    }

    pub fn cycle_path(&self) -> PathBuf {
        self.data_dir.join(&self.cycle_file)
    }

    pub fn model_config_path(&self) -> PathBuf {
        self.data_dir.join(&self.model_config_file)
    }

    /// Validate path configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tracking_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PATHS__TRACKING_FILE"));
        }
        if self.cycle_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PATHS__CYCLE_FILE"));
        }
        if self.model_config_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PATHS__MODEL_CONFIG_FILE"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("PATHS__OUTPUT_DIR"));
        }
        Ok(())
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tracking_file: default_tracking_file(),
            cycle_file: default_cycle_file(),
            model_config_file: default_model_config_file(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_tracking_file() -> String {
    "regcyc.json".to_string()
}

fn default_cycle_file() -> String {
    "cycleCompletion.json".to_string()
}

fn default_model_config_file() -> String {
    "model-config.json".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_defaults() {
        let config = PathsConfig::default();
        assert_eq!(config.tracking_path(), PathBuf::from("./regcyc.json"));
        assert_eq!(config.cycle_path(), PathBuf::from("./cycleCompletion.json"));
        assert_eq!(config.model_config_path(), PathBuf::from("./model-config.json"));
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
    }

    #[test]
    fn test_paths_join_data_dir() {
        let config = PathsConfig {
            data_dir: PathBuf::from("/srv/regima"),
            ..Default::default()
        };
        assert_eq!(config.tracking_path(), PathBuf::from("/srv/regima/regcyc.json"));
    }

    #[test]
    fn test_validation_empty_file_name() {
        let config = PathsConfig {
            cycle_file: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("PATHS__CYCLE_FILE"))
        );
    }

    #[test]
    fn test_validation_defaults_pass() {
        assert!(PathsConfig::default().validate().is_ok());
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the report
//! configuration from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ReportConfig, ReportLayout, ReportMetadata};

/// Loads and provides access to the report configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── report.yaml   # Report name, version and column layout
/// ```
///
/// # Example
///
/// ```no_run
/// use labour_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Employee column width: {}", loader.layout().employee.width);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` when `report.yaml` is missing and
    /// `ConfigParseError` when it is not valid YAML for a [`ReportConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let report_path = path.as_ref().join("report.yaml");
        let config = Self::load_yaml::<ReportConfig>(&report_path)?;

        debug!(
            path = %report_path.display(),
            report = %config.metadata.name,
            "Report configuration loaded"
        );

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the report metadata.
    pub fn report(&self) -> &ReportMetadata {
        &self.config.metadata
    }

    /// Returns the column layout.
    pub fn layout(&self) -> &ReportLayout {
        &self.config.columns
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(ReportConfig {
            metadata: ReportMetadata {
                name: "Labour Payment Report".to_string(),
                version: "1.0".to_string(),
            },
            columns: ReportLayout::default(),
        })
    }
}

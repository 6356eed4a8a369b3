//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! work-period configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::WorkPeriodConfig;

/// Loads and provides access to the work-period configuration.
///
/// The loader reads a single YAML file, validates the anchors, and hands out
/// an immutable snapshot. Callers pass that snapshot into the period resolver
/// explicitly; nothing is cached globally.
///
/// # File format
///
/// ```text
/// mode: fortnightly
/// weekly_start_day: Mon
/// fortnight_first_day: 1
/// fortnight_second_day: 16
/// monthly_start_day: 1
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/work_period.yaml").unwrap();
/// let config = loader.config();
/// println!("Active mode: {:?}", config.mode);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WorkPeriodConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file cannot be read
    /// - [`EngineError::ConfigParseError`] when the YAML is invalid
    /// - [`EngineError::DomainInvariantViolation`] when an anchor is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: WorkPeriodConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration snapshot.
    pub fn config(&self) -> &WorkPeriodConfig {
        &self.config
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{DeductionRates, PayrollConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # Deduction rates, overtime multiplier, pay periods, storage
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Federal tax rate: {}", loader.deduction_rates().federal_tax);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from `payroll.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or out-of-range values (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|message| {
            EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            }
        })?;

        info!(path = %path_str, "Loaded payroll configuration");
        Ok(loader)
    }

    /// Parses and validates configuration from YAML text.
    fn from_yaml_str(content: &str) -> Result<Self, String> {
        let config: PayrollConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        config
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: "<in-memory>".to_string(),
                message,
            })?;
        Ok(Self { config })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the deduction schedule.
    pub fn deduction_rates(&self) -> &DeductionRates {
        &self.config.deductions
    }

    /// Returns the overtime multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.config.overtime_multiplier
    }

    /// Returns the number of pay periods per year.
    pub fn pay_periods_per_year(&self) -> u32 {
        self.config.pay_periods_per_year
    }

    /// Returns the repository data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.config.storage.data_dir.clone()
    }
}

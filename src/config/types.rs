//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has a
//! default, so a partial file only overrides what it names.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed-rate deduction schedule applied to gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionRates {
    /// Federal income tax rate (default 15%).
    pub federal_tax: Decimal,
    /// Secondary contribution rate, e.g. regional insurance (default 1.66%).
    pub secondary_tax: Decimal,
    /// Pension contribution rate (default 5.95%).
    pub pension_contribution: Decimal,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            federal_tax: Decimal::new(15, 2),
            secondary_tax: Decimal::new(166, 4),
            pension_contribution: Decimal::new(595, 4),
        }
    }
}

/// Where the repository keeps its persisted collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `employees.json`, `departments.json` and `payrolls.json`.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

/// The complete payroll configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.pay_periods_per_year, 26);
/// assert_eq!(config.overtime_multiplier, Decimal::new(15, 1));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Deduction schedule.
    pub deductions: DeductionRates,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Number of pay periods an annual salary is divided into.
    pub pay_periods_per_year: u32,
    /// Persistence settings.
    pub storage: StorageConfig,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            deductions: DeductionRates::default(),
            overtime_multiplier: Decimal::new(15, 1),
            pay_periods_per_year: 26,
            storage: StorageConfig::default(),
        }
    }
}

impl PayrollConfig {
    /// Checks that every value is in range.
    ///
    /// Deduction rates must lie in `[0, 1]`, the overtime multiplier must be
    /// at least 1, and there must be at least one pay period per year.
    pub fn validate(&self) -> Result<(), String> {
        let rates = [
            ("deductions.federal_tax", self.deductions.federal_tax),
            ("deductions.secondary_tax", self.deductions.secondary_tax),
            (
                "deductions.pension_contribution",
                self.deductions.pension_contribution,
            ),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(format!("{} must be between 0 and 1, got {}", name, rate));
            }
        }
        if self.overtime_multiplier < Decimal::ONE {
            return Err(format!(
                "overtime_multiplier must be at least 1, got {}",
                self.overtime_multiplier
            ));
        }
        if self.pay_periods_per_year == 0 {
            return Err("pay_periods_per_year must be greater than 0".to_string());
        }
        Ok(())
    }
}

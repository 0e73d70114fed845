//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the payroll configuration from
//! a YAML file: deduction rates, the overtime multiplier, the number of pay
//! periods per year, and where the repository stores its data.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Pay periods per year: {}", config.pay_periods_per_year());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DeductionRates, PayrollConfig, StorageConfig};

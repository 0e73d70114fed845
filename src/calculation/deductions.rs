//! Deduction schedule calculation.
//!
//! This module applies the fixed-rate deduction schedule to a gross pay
//! amount. No rounding is applied; amounts keep full decimal precision.

use rust_decimal::Decimal;

use crate::config::DeductionRates;
use crate::error::EngineResult;
use crate::models::Deductions;
use crate::models::amount::checked_product;

/// Computes the statutory deductions for a gross pay amount.
///
/// Each statutory slot is `gross_pay × rate`. The reserved slots (health
/// insurance, retirement, other) are left at zero.
///
/// # Errors
///
/// Returns `InvalidInput` naming the slot whose amount overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::DeductionRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = Decimal::from_str("2000.00").unwrap();
/// let deductions = calculate_deductions(gross, &DeductionRates::default()).unwrap();
/// assert_eq!(deductions.federal_tax, Decimal::from_str("300.00").unwrap());
/// assert_eq!(deductions.total().unwrap(), Decimal::from_str("452.20").unwrap());
/// ```
pub fn calculate_deductions(gross_pay: Decimal, rates: &DeductionRates) -> EngineResult<Deductions> {
    Ok(Deductions {
        federal_tax: checked_product("federal_tax", &[gross_pay, rates.federal_tax])?,
        secondary_tax: checked_product("secondary_tax", &[gross_pay, rates.secondary_tax])?,
        pension_contribution: checked_product(
            "pension_contribution",
            &[gross_pay, rates.pension_contribution],
        )?,
        ..Deductions::default()
    })
}

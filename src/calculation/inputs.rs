//! Period inputs and shared precondition checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;

/// Everything an operator enters for one employee and one pay period.
///
/// Hours are ignored for salaried employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInputs {
    /// The period being paid.
    pub period: PayPeriod,
    /// Hours at the ordinary rate.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Hours at the overtime multiplier.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// One-off bonus.
    #[serde(default)]
    pub bonus: Decimal,
}

impl PeriodInputs {
    /// Inputs for an hourly employee.
    pub fn hourly(
        period: PayPeriod,
        regular_hours: Decimal,
        overtime_hours: Decimal,
        bonus: Decimal,
    ) -> Self {
        Self {
            period,
            regular_hours,
            overtime_hours,
            bonus,
        }
    }

    /// Inputs for a salaried employee.
    pub fn salaried(period: PayPeriod, bonus: Decimal) -> Self {
        Self {
            period,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            bonus,
        }
    }
}

/// Fails with `InvalidInput` when `value` is negative.
pub(crate) fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_input(
            field,
            format!("cannot be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Fails with `InvalidInput` unless `value` is set and strictly positive.
pub(crate) fn require_positive_rate(field: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
    match value {
        Some(rate) if rate > Decimal::ZERO => Ok(rate),
        Some(rate) => Err(EngineError::invalid_input(
            field,
            format!("must be greater than 0, got {}", rate),
        )),
        None => Err(EngineError::invalid_input(field, "is not set for this employee")),
    }
}

//! Salaried payroll calculation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Earnings, Employee, PayPeriod, Payroll, PayrollParts};

use super::deductions::calculate_deductions;
use super::inputs::{require_non_negative, require_positive_rate};
use super::payroll_id::generate_payroll_id;

/// Computes a payroll for a salaried employee.
///
/// The period pay is `annual_salary / pay_periods_per_year` (26 by default,
/// a bi-weekly cycle) and is recorded as `regular_pay`; `gross_pay` adds the
/// bonus. Deductions follow the configured schedule. No hours snapshot is
/// recorded.
///
/// # Errors
///
/// Returns `InvalidInput` if the employee has no positive annual salary, the
/// bonus is negative, the period ends before it starts, or gross pay
/// overflows.
pub fn compute_salaried_payroll(
    employee: &Employee,
    bonus: Decimal,
    period: &PayPeriod,
    config: &PayrollConfig,
) -> EngineResult<Payroll> {
    let annual_salary = require_positive_rate("annual_salary", employee.annual_salary)?;
    require_non_negative("bonus", bonus)?;
    period.validate()?;
    if config.pay_periods_per_year == 0 {
        return Err(EngineError::invalid_input(
            "pay_periods_per_year",
            "must be greater than 0",
        ));
    }

    let period_pay = annual_salary
        .checked_div(Decimal::from(config.pay_periods_per_year))
        .ok_or_else(|| EngineError::amount_overflow("regular_pay"))?;
    let earnings = Earnings {
        regular_pay: period_pay,
        overtime_pay: Decimal::ZERO,
        bonus,
    };
    let deductions = calculate_deductions(earnings.gross()?, &config.deductions)?;

    let payroll = Payroll::new(PayrollParts {
        payroll_id: generate_payroll_id(&employee.employee_id, period.end_date),
        employee_id: employee.employee_id.clone(),
        pay_period_start: period.start_date,
        pay_period_end: period.end_date,
        pay_date: period.end_date,
        hours: None,
        earnings,
        deductions,
    })?;

    debug!(
        employee_id = %employee.employee_id,
        payroll_id = %payroll.payroll_id(),
        annual_salary = %annual_salary,
        gross_pay = %payroll.gross_pay(),
        net_pay = %payroll.net_pay(),
        "Computed salaried payroll"
    );

    Ok(payroll)
}

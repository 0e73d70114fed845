//! Hourly payroll calculation.
//!
//! This module computes a payroll for an employee paid by the hour:
//! regular hours at the employee's rate, overtime hours at the configured
//! multiplier, plus any bonus.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::amount::checked_product;
use crate::models::{Earnings, Employee, HoursWorked, PayPeriod, Payroll, PayrollParts};

use super::deductions::calculate_deductions;
use super::inputs::{require_non_negative, require_positive_rate};
use super::payroll_id::generate_payroll_id;

/// Computes a payroll for an hourly employee.
///
/// - `regular_pay = regular_hours × hourly_rate`
/// - `overtime_pay = overtime_hours × hourly_rate × overtime_multiplier`
/// - `gross_pay = regular_pay + overtime_pay + bonus`
///
/// Deductions follow the configured schedule. The hourly rate is copied into
/// the payroll so later rate changes leave the record untouched.
///
/// # Errors
///
/// Returns `InvalidInput` if the employee has no positive hourly rate, any
/// hours or the bonus are negative, or the period ends before it starts.
/// Amounts too large for a `Decimal` also yield `InvalidInput`, naming the
/// derived field that overflowed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_hourly_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{Employee, EmployeeStatus, EmploymentType, PayPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     employee_id: "E1".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
///     phone: None,
///     date_of_birth: None,
///     hire_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     position: None,
///     employment_type: EmploymentType::PartTime,
///     status: EmployeeStatus::Active,
///     department_id: None,
///     hourly_rate: Some(Decimal::from_str("20.00").unwrap()),
///     annual_salary: None,
/// };
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
/// ).unwrap();
///
/// let payroll = compute_hourly_payroll(
///     &employee,
///     Decimal::from(80),
///     Decimal::from(5),
///     Decimal::from(100),
///     &period,
///     &PayrollConfig::default(),
/// ).unwrap();
/// assert_eq!(payroll.gross_pay(), Decimal::from_str("1850.00").unwrap());
/// assert_eq!(payroll.net_pay(), Decimal::from_str("1431.715").unwrap());
/// ```
pub fn compute_hourly_payroll(
    employee: &Employee,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    bonus: Decimal,
    period: &PayPeriod,
    config: &PayrollConfig,
) -> EngineResult<Payroll> {
    let hourly_rate = require_positive_rate("hourly_rate", employee.hourly_rate)?;
    require_non_negative("regular_hours", regular_hours)?;
    require_non_negative("overtime_hours", overtime_hours)?;
    require_non_negative("bonus", bonus)?;
    period.validate()?;

    let earnings = Earnings {
        regular_pay: checked_product("regular_pay", &[regular_hours, hourly_rate])?,
        overtime_pay: checked_product(
            "overtime_pay",
            &[overtime_hours, hourly_rate, config.overtime_multiplier],
        )?,
        bonus,
    };
    let deductions = calculate_deductions(earnings.gross()?, &config.deductions)?;

    let payroll = Payroll::new(PayrollParts {
        payroll_id: generate_payroll_id(&employee.employee_id, period.end_date),
        employee_id: employee.employee_id.clone(),
        pay_period_start: period.start_date,
        pay_period_end: period.end_date,
        pay_date: period.end_date,
        hours: Some(HoursWorked {
            regular_hours,
            overtime_hours,
            hourly_rate,
        }),
        earnings,
        deductions,
    })?;

    debug!(
        employee_id = %employee.employee_id,
        payroll_id = %payroll.payroll_id(),
        regular_hours = %regular_hours,
        overtime_hours = %overtime_hours,
        gross_pay = %payroll.gross_pay(),
        net_pay = %payroll.net_pay(),
        "Computed hourly payroll"
    );

    Ok(payroll)
}

//! Deterministic payroll identifiers.

use chrono::NaiveDate;

/// Prefix shared by every payroll id.
pub const PAYROLL_ID_PREFIX: &str = "PAY";

/// Builds the payroll id for an employee and period end date.
///
/// The id is `PAY-{employee_id}-{period_end}` with the date in ISO format,
/// so computing the same employee and period twice yields the same id and
/// the second stored record replaces the first.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::generate_payroll_id;
/// use chrono::NaiveDate;
///
/// let id = generate_payroll_id("EMP001", NaiveDate::from_ymd_opt(2026, 1, 26).unwrap());
/// assert_eq!(id, "PAY-EMP001-2026-01-26");
/// ```
pub fn generate_payroll_id(employee_id: &str, period_end: NaiveDate) -> String {
    format!(
        "{}-{}-{}",
        PAYROLL_ID_PREFIX,
        employee_id,
        period_end.format("%Y-%m-%d")
    )
}

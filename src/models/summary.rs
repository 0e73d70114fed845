//! Aggregated payroll summaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::Payroll;
use super::amount::checked_sum;

/// Adds `(gross, deductions, net)` to running totals, leaving them
/// untouched on overflow.
fn add_totals(
    gross: &mut Decimal,
    deductions: &mut Decimal,
    net: &mut Decimal,
    addend: (Decimal, Decimal, Decimal),
) -> EngineResult<()> {
    let next_gross = checked_sum("total_gross_pay", &[*gross, addend.0])?;
    let next_deductions = checked_sum("total_deductions", &[*deductions, addend.1])?;
    let next_net = checked_sum("total_net_pay", &[*net, addend.2])?;
    *gross = next_gross;
    *deductions = next_deductions;
    *net = next_net;
    Ok(())
}

/// Payroll totals for one employee, for one year or for all time.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollSummary;
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary::empty("EMP001", Some(2026));
/// assert_eq!(summary.total_net_pay, Decimal::ZERO);
/// assert_eq!(summary.payroll_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The employee summarized.
    pub employee_id: String,
    /// The calendar year covered, `None` for an all-time summary.
    pub year: Option<i32>,
    /// Number of payroll records folded in.
    pub payroll_count: usize,
    /// Sum of gross pay.
    pub total_gross_pay: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net_pay: Decimal,
}

impl PayrollSummary {
    /// A summary with every total at zero.
    pub fn empty(employee_id: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            employee_id: employee_id.into(),
            year,
            payroll_count: 0,
            total_gross_pay: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            total_net_pay: Decimal::ZERO,
        }
    }

    /// Adds one payroll record to the totals.
    ///
    /// On overflow the summary is left unchanged and `InvalidInput` names
    /// the total that overflowed.
    pub fn accumulate(&mut self, payroll: &Payroll) -> EngineResult<()> {
        add_totals(
            &mut self.total_gross_pay,
            &mut self.total_deductions,
            &mut self.total_net_pay,
            (payroll.gross_pay(), payroll.total_deductions(), payroll.net_pay()),
        )?;
        self.payroll_count += 1;
        Ok(())
    }
}

/// Year-to-date totals across the members of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// The department summarized.
    pub department_id: String,
    /// The calendar year covered.
    pub year: i32,
    /// Number of members with at least one payroll in the year.
    pub employee_count: usize,
    /// Sum of gross pay.
    pub total_gross_pay: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net_pay: Decimal,
}

impl DepartmentSummary {
    /// A summary with every total at zero.
    pub fn empty(department_id: impl Into<String>, year: i32) -> Self {
        Self {
            department_id: department_id.into(),
            year,
            employee_count: 0,
            total_gross_pay: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            total_net_pay: Decimal::ZERO,
        }
    }

    /// Adds one member's year-to-date summary to the totals.
    ///
    /// Members without payrolls in the year leave the summary untouched.
    pub fn accumulate(&mut self, summary: &PayrollSummary) -> EngineResult<()> {
        if summary.payroll_count == 0 {
            return Ok(());
        }
        add_totals(
            &mut self.total_gross_pay,
            &mut self.total_deductions,
            &mut self.total_net_pay,
            (
                summary.total_gross_pay,
                summary.total_deductions,
                summary.total_net_pay,
            ),
        )?;
        self.employee_count += 1;
        Ok(())
    }
}

/// Year-to-date rows for every employee with payrolls in the year, plus
/// grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    /// The calendar year covered.
    pub year: i32,
    /// One row per employee with at least one payroll in the year, sorted
    /// by employee id.
    pub employees: Vec<PayrollSummary>,
    /// Grand total of gross pay.
    pub total_gross_pay: Decimal,
    /// Grand total of deductions.
    pub total_deductions: Decimal,
    /// Grand total of net pay.
    pub total_net_pay: Decimal,
}

impl OrganizationSummary {
    /// A summary with no rows.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            employees: Vec::new(),
            total_gross_pay: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            total_net_pay: Decimal::ZERO,
        }
    }

    /// Appends an employee row and adds it to the grand totals. Rows with no
    /// payrolls are skipped.
    pub fn accumulate(&mut self, summary: PayrollSummary) -> EngineResult<()> {
        if summary.payroll_count == 0 {
            return Ok(());
        }
        add_totals(
            &mut self.total_gross_pay,
            &mut self.total_deductions,
            &mut self.total_net_pay,
            (
                summary.total_gross_pay,
                summary.total_deductions,
                summary.total_net_pay,
            ),
        )?;
        self.employees.push(summary);
        Ok(())
    }
}

//! Pay-basis dispatch.

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{Employee, PayBasis, Payroll};

use super::hourly_pay::compute_hourly_payroll;
use super::inputs::PeriodInputs;
use super::salaried_pay::compute_salaried_payroll;

/// Computes a payroll using the calculation that matches the employee's
/// pay basis: full-time and contract staff are salaried, part-time staff and
/// interns are hourly. Hours in `inputs` are ignored for salaried staff.
pub fn compute_payroll(
    employee: &Employee,
    inputs: &PeriodInputs,
    config: &PayrollConfig,
) -> EngineResult<Payroll> {
    match employee.pay_basis() {
        PayBasis::Hourly => compute_hourly_payroll(
            employee,
            inputs.regular_hours,
            inputs.overtime_hours,
            inputs.bonus,
            &inputs.period,
            config,
        ),
        PayBasis::Salaried => {
            compute_salaried_payroll(employee, inputs.bonus, &inputs.period, config)
        }
    }
}

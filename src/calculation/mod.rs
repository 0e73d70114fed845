//! Calculation logic for the payroll engine.
//!
//! This module contains the stateless payroll computations: hourly pay with
//! overtime, salaried pay split over the configured number of periods, the
//! fixed-rate deduction schedule, deterministic payroll ids, and
//! employee, department and organization summaries folded from stored
//! payrolls.

mod deductions;
mod dispatch;
mod hourly_pay;
mod inputs;
mod payroll_id;
mod salaried_pay;
mod year_to_date;

pub use deductions::calculate_deductions;
pub use dispatch::compute_payroll;
pub use hourly_pay::compute_hourly_payroll;
pub use inputs::PeriodInputs;
pub use payroll_id::{PAYROLL_ID_PREFIX, generate_payroll_id};
pub use salaried_pay::compute_salaried_payroll;
pub use year_to_date::{
    summarize_all_time, summarize_department_year_to_date, summarize_organization_year_to_date,
    summarize_year_to_date,
};

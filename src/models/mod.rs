//! Core data models for the payroll engine.
//!
//! This module contains all the domain records stored by the repository and
//! produced by the calculation engine.

pub(crate) mod amount;
mod department;
mod employee;
mod pay_period;
mod payroll;
mod summary;

pub use department::Department;
pub use employee::{
    Employee, EmployeeStatus, EmploymentType, MAX_EMPLOYEE_AGE_YEARS, MAX_PAY_RATE,
    MIN_EMPLOYEE_AGE_YEARS, MIN_EMPLOYEE_ID_LEN, PayBasis,
};
pub use pay_period::PayPeriod;
pub use payroll::{Deductions, Earnings, HoursWorked, Payroll, PayrollParts};
pub use summary::{DepartmentSummary, OrganizationSummary, PayrollSummary};

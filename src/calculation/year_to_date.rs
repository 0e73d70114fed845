//! Payroll summaries over stored payrolls.
//!
//! These are pure reads: they fold payroll records already in the
//! repository and never write. Totals are overflow-checked, so each
//! function returns `InvalidInput` instead of panicking on absurd data.

use chrono::Datelike;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DepartmentSummary, OrganizationSummary, PayrollSummary};
use crate::repository::Repository;

/// Sums one employee's payrolls whose period ends in `year`.
///
/// Records from other years are excluded. When nothing matches, every total
/// is zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_year_to_date;
/// use payroll_engine::repository::Repository;
/// use rust_decimal::Decimal;
///
/// let repository = Repository::open("./unused-data-dir");
/// let summary = summarize_year_to_date(&repository, "EMP001", 2026).unwrap();
/// assert_eq!(summary.total_gross_pay, Decimal::ZERO);
/// ```
pub fn summarize_year_to_date(
    repository: &Repository,
    employee_id: &str,
    year: i32,
) -> EngineResult<PayrollSummary> {
    let mut summary = PayrollSummary::empty(employee_id, Some(year));
    for payroll in repository
        .payrolls_for_employee(employee_id)
        .into_iter()
        .filter(|p| p.pay_period_end().year() == year)
    {
        summary.accumulate(payroll)?;
    }

    debug!(
        employee_id = %employee_id,
        year,
        payroll_count = summary.payroll_count,
        total_net_pay = %summary.total_net_pay,
        "Summarized year to date"
    );
    Ok(summary)
}

/// Sums every payroll stored for one employee, regardless of year.
pub fn summarize_all_time(
    repository: &Repository,
    employee_id: &str,
) -> EngineResult<PayrollSummary> {
    let mut summary = PayrollSummary::empty(employee_id, None);
    for payroll in repository.payrolls_for_employee(employee_id) {
        summary.accumulate(payroll)?;
    }
    Ok(summary)
}

/// Sums the year-to-date summaries of every employee in a department.
///
/// Membership is [`Repository::department_member_ids`]: the department's
/// member set plus employees pointing at it. Only members with payrolls in
/// the year are counted.
///
/// # Errors
///
/// Returns `NotFound` if the department does not exist.
pub fn summarize_department_year_to_date(
    repository: &Repository,
    department_id: &str,
    year: i32,
) -> EngineResult<DepartmentSummary> {
    if repository.get_department(department_id).is_none() {
        return Err(EngineError::NotFound {
            entity: "department",
            id: department_id.to_string(),
        });
    }

    let mut summary = DepartmentSummary::empty(department_id, year);
    for employee_id in repository.department_member_ids(department_id) {
        summary.accumulate(&summarize_year_to_date(repository, &employee_id, year)?)?;
    }
    Ok(summary)
}

/// Year-to-date rows for every stored employee with payrolls in `year`,
/// with grand totals across them.
///
/// Payrolls of deleted employees are not included.
pub fn summarize_organization_year_to_date(
    repository: &Repository,
    year: i32,
) -> EngineResult<OrganizationSummary> {
    let mut summary = OrganizationSummary::empty(year);
    for employee in repository.list_employees() {
        summary.accumulate(summarize_year_to_date(repository, &employee.employee_id, year)?)?;
    }

    debug!(
        year,
        employee_count = summary.employees.len(),
        total_gross_pay = %summary.total_gross_pay,
        "Summarized organization year to date"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_hourly_payroll, compute_salaried_payroll};
    use crate::config::PayrollConfig;
    use crate::models::{Department, Employee, EmployeeStatus, EmploymentType, PayPeriod};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> PayPeriod {
        PayPeriod::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    fn create_employee(id: &str, employment_type: EmploymentType) -> Employee {
        let salaried = matches!(
            employment_type,
            EmploymentType::FullTime | EmploymentType::Contract
        );
        Employee {
            employee_id: id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: None,
            date_of_birth: None,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
            position: None,
            employment_type,
            status: EmployeeStatus::Active,
            department_id: Some("ENG".to_string()),
            hourly_rate: if salaried { None } else { Some(dec("20")) },
            annual_salary: if salaried { Some(dec("52000")) } else { None },
        }
    }

    fn create_seeded_repository() -> (TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let mut repository = Repository::open(dir.path());
        let config = PayrollConfig::default();

        let hourly = create_employee("EMP001", EmploymentType::PartTime);
        let salaried = create_employee("EMP002", EmploymentType::FullTime);
        repository.add_employee(hourly.clone()).unwrap();
        repository.add_employee(salaried.clone()).unwrap();
        repository.add_department(Department::new("ENG", "Engineering")).unwrap();

        for (p, regular) in [
            (period((2025, 12, 15), (2025, 12, 28)), "10"),
            (period((2025, 12, 29), (2026, 1, 11)), "80"),
            (period((2026, 1, 12), (2026, 1, 25)), "40"),
        ] {
            let payroll = compute_hourly_payroll(
                &hourly,
                dec(regular),
                Decimal::ZERO,
                Decimal::ZERO,
                &p,
                &config,
            )
            .unwrap();
            repository.add_payroll(payroll).unwrap();
        }
        let payroll = compute_salaried_payroll(
            &salaried,
            Decimal::ZERO,
            &period((2026, 1, 12), (2026, 1, 25)),
            &config,
        )
        .unwrap();
        repository.add_payroll(payroll).unwrap();

        (dir, repository)
    }

    #[test]
    fn test_summary_includes_only_requested_year() {
        let (_dir, repository) = create_seeded_repository();
        let summary = summarize_year_to_date(&repository, "EMP001", 2026).unwrap();

        // 80h + 40h at $20; the 2025 period is excluded even though the
        // period spanning new year is included by its end date.
        assert_eq!(summary.payroll_count, 2);
        assert_eq!(summary.total_gross_pay, dec("2400"));
        assert_eq!(summary.total_deductions, dec("2400") * dec("0.2261"));
        assert_eq!(
            summary.total_net_pay,
            summary.total_gross_pay - summary.total_deductions
        );
    }

    #[test]
    fn test_summary_for_previous_year() {
        let (_dir, repository) = create_seeded_repository();
        let summary = summarize_year_to_date(&repository, "EMP001", 2025).unwrap();
        assert_eq!(summary.payroll_count, 1);
        assert_eq!(summary.total_gross_pay, dec("200"));
    }

    #[test]
    fn test_summary_with_no_matches_is_zero() {
        let (_dir, repository) = create_seeded_repository();
        let summary = summarize_year_to_date(&repository, "EMP001", 2024).unwrap();
        assert_eq!(summary, PayrollSummary::empty("EMP001", Some(2024)));

        let unknown = summarize_year_to_date(&repository, "NOBODY", 2026).unwrap();
        assert_eq!(unknown.payroll_count, 0);
    }

    #[test]
    fn test_department_summary_aggregates_members() {
        let (_dir, repository) = create_seeded_repository();
        let summary = summarize_department_year_to_date(&repository, "ENG", 2026).unwrap();

        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.total_gross_pay, dec("4400"));
        assert_eq!(summary.total_net_pay, dec("4400") - dec("4400") * dec("0.2261"));
    }

    #[test]
    fn test_department_summary_unknown_department() {
        let (_dir, repository) = create_seeded_repository();
        match summarize_department_year_to_date(&repository, "NOPE", 2026) {
            Err(EngineError::NotFound { entity, id }) => {
                assert_eq!(entity, "department");
                assert_eq!(id, "NOPE");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_department_summary_skips_members_without_payrolls() {
        let (_dir, mut repository) = create_seeded_repository();
        repository
            .add_employee(create_employee("EMP003", EmploymentType::Intern))
            .unwrap();

        let summary = summarize_department_year_to_date(&repository, "ENG", 2026).unwrap();
        assert_eq!(summary.employee_count, 2);
    }

    #[test]
    fn test_all_time_summary_spans_years() {
        let (_dir, repository) = create_seeded_repository();
        let summary = summarize_all_time(&repository, "EMP001").unwrap();

        assert_eq!(summary.year, None);
        assert_eq!(summary.payroll_count, 3);
        assert_eq!(summary.total_gross_pay, dec("2600"));
    }

    #[test]
    fn test_organization_summary_rows_and_grand_totals() {
        let (_dir, repository) = create_seeded_repository();
        let summary = summarize_organization_year_to_date(&repository, 2026).unwrap();

        let rows: Vec<(&str, Decimal)> = summary
            .employees
            .iter()
            .map(|row| (row.employee_id.as_str(), row.total_gross_pay))
            .collect();
        assert_eq!(rows, vec![("EMP001", dec("2400")), ("EMP002", dec("2000"))]);
        assert_eq!(summary.total_gross_pay, dec("4400"));
        assert_eq!(
            summary.total_net_pay,
            summary.total_gross_pay - summary.total_deductions
        );

        let previous = summarize_organization_year_to_date(&repository, 2025).unwrap();
        assert_eq!(previous.employees.len(), 1);
        assert_eq!(previous.total_gross_pay, dec("200"));
    }

    #[test]
    fn test_organization_summary_ignores_deleted_employees() {
        let (_dir, mut repository) = create_seeded_repository();
        repository.delete_employee("EMP002").unwrap();

        let summary = summarize_organization_year_to_date(&repository, 2026).unwrap();
        assert_eq!(summary.employees.len(), 1);
        assert_eq!(summary.total_gross_pay, dec("2400"));
    }
}

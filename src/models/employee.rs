//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, its [`EmploymentType`] and
//! [`EmployeeStatus`] enums, and the validation rules applied when an
//! employee is written to the repository.

use std::sync::OnceLock;

use chrono::{Months, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minimum length of an employee id.
pub const MIN_EMPLOYEE_ID_LEN: usize = 3;

/// Youngest permitted age, in years, when a date of birth is recorded.
pub const MIN_EMPLOYEE_AGE_YEARS: u32 = 16;

/// Oldest plausible age, in years, when a date of birth is recorded.
pub const MAX_EMPLOYEE_AGE_YEARS: u32 = 100;

/// Upper bound accepted for an hourly rate or an annual salary.
pub const MAX_PAY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment, paid from an annual salary.
    FullTime,
    /// Part-time employment, paid by the hour.
    PartTime,
    /// Contract engagement, paid from an annual salary.
    Contract,
    /// Internship, paid by the hour.
    Intern,
}

impl EmploymentType {
    /// Returns how pay is computed for this employment type.
    pub fn pay_basis(self) -> PayBasis {
        match self {
            EmploymentType::FullTime | EmploymentType::Contract => PayBasis::Salaried,
            EmploymentType::PartTime | EmploymentType::Intern => PayBasis::Hourly,
        }
    }

    /// Returns the snake_case name used in serialized records and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Intern => "intern",
        }
    }
}

/// Whether an employee is paid from hours worked or from an annual salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// Paid per hour worked; `hourly_rate` is meaningful.
    Hourly,
    /// Paid a fixed share of `annual_salary` each period.
    Salaried,
}

/// Represents the current standing of an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and working.
    #[default]
    Active,
    /// Employed but temporarily away.
    OnLeave,
    /// Employed but suspended.
    Suspended,
    /// No longer employed.
    Terminated,
}

/// Represents an employee record.
///
/// Only one of `hourly_rate` or `annual_salary` is meaningful, selected by
/// [`EmploymentType::pay_basis`]. The department is a weak reference: the id
/// is stored and resolved through the repository on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The employee's date of birth, if recorded.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Current standing.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Id of the department the employee belongs to.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Hourly rate for hourly-paid employees.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Annual salary for salaried employees.
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
}

fn employee_id_regex() -> &'static Regex {
    static EMPLOYEE_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    EMPLOYEE_ID_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Failed to compile employee id regex"))
}

fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z\s-]+$").expect("Failed to compile name regex"))
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("Failed to compile email regex")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"^[\d\s()+-]+$").expect("Failed to compile phone regex"))
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.into(),
    }
}

impl Employee {
    /// Returns the employee's full name ("first last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns how this employee is paid.
    pub fn pay_basis(&self) -> PayBasis {
        self.employment_type.pay_basis()
    }

    /// Returns the rate that is meaningful for the employee's pay basis.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeStatus, EmploymentType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     employee_id: "EMP001".to_string(),
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
    ///     hourly_rate: Some(Decimal::new(2000, 2)),
    ///     annual_salary: None,
    /// };
    /// assert_eq!(employee.pay_rate(), Some(Decimal::new(2000, 2)));
    /// ```
    pub fn pay_rate(&self) -> Option<Decimal> {
        match self.pay_basis() {
            PayBasis::Hourly => self.hourly_rate,
            PayBasis::Salaried => self.annual_salary,
        }
    }

    /// Validates the record as of `today`.
    ///
    /// Checks the id format, names, contact details, hire date, date of
    /// birth, and that exactly the rate matching the pay basis is set and
    /// positive.
    pub fn validate(&self, today: NaiveDate) -> EngineResult<()> {
        let id = self.employee_id.trim();
        if id.len() < MIN_EMPLOYEE_ID_LEN {
            return Err(invalid(
                "employee_id",
                format!("must be at least {MIN_EMPLOYEE_ID_LEN} characters"),
            ));
        }
        if id != self.employee_id || !employee_id_regex().is_match(id) {
            return Err(invalid(
                "employee_id",
                "may only contain letters, digits, '-' and '_'",
            ));
        }

        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)?;

        if self.email.trim().is_empty() {
            return Err(invalid("email", "is required"));
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err(invalid("email", "invalid email format"));
        }

        if let Some(phone) = self.phone.as_deref().map(str::trim) {
            if !phone.is_empty() && !phone_regex().is_match(phone) {
                return Err(invalid("phone", "invalid phone format"));
            }
        }

        if self.hire_date > today {
            return Err(invalid("hire_date", "cannot be in the future"));
        }

        if let Some(dob) = self.date_of_birth {
            let youngest = today.checked_sub_months(Months::new(MIN_EMPLOYEE_AGE_YEARS * 12));
            let oldest = today.checked_sub_months(Months::new(MAX_EMPLOYEE_AGE_YEARS * 12));
            if youngest.is_some_and(|limit| dob > limit) {
                return Err(invalid(
                    "date_of_birth",
                    format!("employee must be at least {MIN_EMPLOYEE_AGE_YEARS} years old"),
                ));
            }
            if oldest.is_some_and(|limit| dob < limit) {
                return Err(invalid("date_of_birth", "too far in the past"));
            }
        }

        let (field, rate, other_field, other) = match self.pay_basis() {
            PayBasis::Hourly => ("hourly_rate", self.hourly_rate, "annual_salary", self.annual_salary),
            PayBasis::Salaried => ("annual_salary", self.annual_salary, "hourly_rate", self.hourly_rate),
        };
        match rate {
            None => return Err(invalid(field, "is required for this employment type")),
            Some(r) if r <= Decimal::ZERO => return Err(invalid(field, "must be greater than 0")),
            Some(r) if r > MAX_PAY_RATE => return Err(invalid(field, "value is unreasonably high")),
            Some(_) => {}
        }
        if other.is_some_and(|o| !o.is_zero()) {
            return Err(invalid(
                other_field,
                format!(
                    "must be unset for {} employees",
                    self.employment_type.as_str()
                ),
            ));
        }

        Ok(())
    }
}

fn validate_name(field: &str, value: &str) -> EngineResult<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(field, "is required"));
    }
    if value.chars().count() < 2 {
        return Err(invalid(field, "must be at least 2 characters"));
    }
    if !name_regex().is_match(value) {
        return Err(invalid(field, "can only contain letters"));
    }
    Ok(())
}

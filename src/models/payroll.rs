//! Payroll record models.
//!
//! A [`Payroll`] is a historical fact: once computed it is stored and never
//! mutated. Its derived totals (`gross_pay`, `total_deductions`, `net_pay`)
//! are produced by [`Payroll::new`] from the component fields and have no
//! setters. Deserialization goes through the same constructor, so totals read
//! back from storage are recomputed rather than trusted, and a stored record
//! with an inverted period or unrepresentable amounts fails to load.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayPeriod;
use super::amount::{checked_difference, checked_sum};

/// Hours snapshot for an hourly computation.
///
/// The rate is copied from the employee at computation time so later rate
/// changes do not alter history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWorked {
    /// Hours paid at the ordinary rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// The hourly rate in force when the payroll was computed.
    pub hourly_rate: Decimal,
}

/// Earnings breakdown for a payroll.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Earnings;
/// use rust_decimal::Decimal;
///
/// let earnings = Earnings {
///     regular_pay: Decimal::new(160000, 2),
///     overtime_pay: Decimal::new(15000, 2),
///     bonus: Decimal::new(10000, 2),
/// };
/// assert_eq!(earnings.gross().unwrap(), Decimal::new(185000, 2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Pay for regular hours, or the salary share for the period.
    pub regular_pay: Decimal,
    /// Pay for overtime hours.
    #[serde(default)]
    pub overtime_pay: Decimal,
    /// One-off bonus for the period.
    #[serde(default)]
    pub bonus: Decimal,
}

impl Earnings {
    /// Gross pay: regular + overtime + bonus.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for `gross_pay` if the sum overflows.
    pub fn gross(&self) -> EngineResult<Decimal> {
        checked_sum(
            "gross_pay",
            &[self.regular_pay, self.overtime_pay, self.bonus],
        )
    }
}

/// Deduction breakdown for a payroll.
///
/// The first three slots are filled from the deduction schedule; the rest
/// are reserved for employee-specific deductions and default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Federal income tax.
    pub federal_tax: Decimal,
    /// Secondary statutory contribution (regional insurance).
    pub secondary_tax: Decimal,
    /// Pension plan contribution.
    pub pension_contribution: Decimal,
    /// Health insurance premium.
    #[serde(default)]
    pub health_insurance: Decimal,
    /// Voluntary retirement savings.
    #[serde(default)]
    pub retirement: Decimal,
    /// Any other deduction.
    #[serde(default)]
    pub other: Decimal,
}

impl Deductions {
    /// Sum of every deduction slot.
    pub fn total(&self) -> EngineResult<Decimal> {
        checked_sum(
            "total_deductions",
            &[
                self.total_taxes()?,
                self.health_insurance,
                self.retirement,
                self.other,
            ],
        )
    }

    /// Sum of the statutory slots (federal, secondary, pension).
    pub fn total_taxes(&self) -> EngineResult<Decimal> {
        checked_sum(
            "total_deductions",
            &[self.federal_tax, self.secondary_tax, self.pension_contribution],
        )
    }
}

/// The component fields of a payroll, without derived totals.
///
/// This is what callers hand to [`Payroll::new`] and what is read back from
/// storage before totals are recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollParts {
    /// Unique identifier for the payroll record.
    pub payroll_id: String,
    /// Id of the employee paid.
    pub employee_id: String,
    /// First day of the period (inclusive).
    pub pay_period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub pay_period_end: NaiveDate,
    /// Date the payment is made.
    pub pay_date: NaiveDate,
    /// Hours snapshot; `None` for salaried computations.
    #[serde(default)]
    pub hours: Option<HoursWorked>,
    /// Earnings breakdown.
    pub earnings: Earnings,
    /// Deductions breakdown.
    pub deductions: Deductions,
}

/// A computed, immutable payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PayrollParts")]
pub struct Payroll {
    payroll_id: String,
    employee_id: String,
    pay_period_start: NaiveDate,
    pay_period_end: NaiveDate,
    pay_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    hours: Option<HoursWorked>,
    earnings: Earnings,
    gross_pay: Decimal,
    deductions: Deductions,
    total_deductions: Decimal,
    net_pay: Decimal,
}

impl Payroll {
    /// Builds a payroll, deriving gross pay, total deductions and net pay.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the period ends before it starts or a
    /// derived total overflows.
    pub fn new(parts: PayrollParts) -> EngineResult<Self> {
        PayPeriod {
            start_date: parts.pay_period_start,
            end_date: parts.pay_period_end,
        }
        .validate()?;
        let gross_pay = parts.earnings.gross()?;
        let total_deductions = parts.deductions.total()?;
        let net_pay = checked_difference("net_pay", gross_pay, total_deductions)?;
        Ok(Self {
            payroll_id: parts.payroll_id,
            employee_id: parts.employee_id,
            pay_period_start: parts.pay_period_start,
            pay_period_end: parts.pay_period_end,
            pay_date: parts.pay_date,
            hours: parts.hours,
            earnings: parts.earnings,
            gross_pay,
            deductions: parts.deductions,
            total_deductions,
            net_pay,
        })
    }

    /// Unique identifier of this record.
    pub fn payroll_id(&self) -> &str {
        &self.payroll_id
    }

    /// Id of the employee paid.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// First day of the period.
    pub fn pay_period_start(&self) -> NaiveDate {
        self.pay_period_start
    }

    /// Last day of the period.
    pub fn pay_period_end(&self) -> NaiveDate {
        self.pay_period_end
    }

    /// The covered period.
    pub fn pay_period(&self) -> PayPeriod {
        PayPeriod {
            start_date: self.pay_period_start,
            end_date: self.pay_period_end,
        }
    }

    /// Date the payment is made.
    pub fn pay_date(&self) -> NaiveDate {
        self.pay_date
    }

    /// Hours snapshot, present for hourly computations only.
    pub fn hours(&self) -> Option<&HoursWorked> {
        self.hours.as_ref()
    }

    /// Earnings breakdown.
    pub fn earnings(&self) -> &Earnings {
        &self.earnings
    }

    /// Deductions breakdown.
    pub fn deductions(&self) -> &Deductions {
        &self.deductions
    }

    /// Earnings before deductions.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_pay
    }

    /// Sum of every deduction slot.
    pub fn total_deductions(&self) -> Decimal {
        self.total_deductions
    }

    /// Gross pay minus total deductions.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }
}

impl TryFrom<PayrollParts> for Payroll {
    type Error = EngineError;

    fn try_from(parts: PayrollParts) -> EngineResult<Self> {
        Payroll::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_parts() -> PayrollParts {
        PayrollParts {
            payroll_id: "PAY-EMP001-2026-01-26".to_string(),
            employee_id: "EMP001".to_string(),
            pay_period_start: date(2026, 1, 13),
            pay_period_end: date(2026, 1, 26),
            pay_date: date(2026, 1, 26),
            hours: Some(HoursWorked {
                regular_hours: dec("80"),
                overtime_hours: dec("5"),
                hourly_rate: dec("20.00"),
            }),
            earnings: Earnings {
                regular_pay: dec("1600.00"),
                overtime_pay: dec("150.00"),
                bonus: dec("100"),
            },
            deductions: Deductions {
                federal_tax: dec("277.50"),
                secondary_tax: dec("30.71"),
                pension_contribution: dec("110.075"),
                ..Deductions::default()
            },
        }
    }

    #[test]
    fn test_new_derives_totals() {
        let payroll = Payroll::new(create_test_parts()).unwrap();
        assert_eq!(payroll.gross_pay(), dec("1850.00"));
        assert_eq!(payroll.total_deductions(), dec("418.285"));
        assert_eq!(payroll.net_pay(), dec("1431.715"));
    }

    #[test]
    fn test_total_includes_reserved_slots() {
        let deductions = Deductions {
            federal_tax: dec("10"),
            secondary_tax: dec("1"),
            pension_contribution: dec("2"),
            health_insurance: dec("3"),
            retirement: dec("4"),
            other: dec("5"),
        };
        assert_eq!(deductions.total_taxes().unwrap(), dec("13"));
        assert_eq!(deductions.total().unwrap(), dec("25"));
    }

    #[test]
    fn test_deserialize_recomputes_stale_totals() {
        let payroll = Payroll::new(create_test_parts()).unwrap();
        let mut value = serde_json::to_value(&payroll).unwrap();
        value["gross_pay"] = serde_json::json!("999999");
        value["net_pay"] = serde_json::json!("1");

        let restored: Payroll = serde_json::from_value(value).unwrap();
        assert_eq!(restored.gross_pay(), dec("1850.00"));
        assert_eq!(restored.net_pay(), dec("1431.715"));
        assert_eq!(restored, payroll);
    }

    #[test]
    fn test_serialize_includes_derived_totals() {
        let payroll = Payroll::new(create_test_parts()).unwrap();
        let json = serde_json::to_string(&payroll).unwrap();
        assert!(json.contains("\"payroll_id\":\"PAY-EMP001-2026-01-26\""));
        assert!(json.contains("\"gross_pay\":\"1850.00\""));
        assert!(json.contains("\"net_pay\":\"1431.715\""));
    }

    #[test]
    fn test_salaried_payroll_omits_hours() {
        let mut parts = create_test_parts();
        parts.hours = None;
        let payroll = Payroll::new(parts).unwrap();

        let json = serde_json::to_string(&payroll).unwrap();
        assert!(!json.contains("\"hours\""));

        let restored: Payroll = serde_json::from_str(&json).unwrap();
        assert!(restored.hours().is_none());
    }

    #[test]
    fn test_pay_period_accessor() {
        let payroll = Payroll::new(create_test_parts()).unwrap();
        let period = payroll.pay_period();
        assert_eq!(period.start_date, date(2026, 1, 13));
        assert_eq!(period.end_date, date(2026, 1, 26));
    }

    #[test]
    fn test_new_rejects_inverted_period() {
        let mut parts = create_test_parts();
        parts.pay_period_start = date(2026, 1, 27);

        match Payroll::new(parts) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "pay_period"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_overflowing_totals() {
        let mut parts = create_test_parts();
        parts.earnings.regular_pay = Decimal::MAX;
        assert!(matches!(
            Payroll::new(parts),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "gross_pay"
        ));

        let mut parts = create_test_parts();
        parts.deductions.other = Decimal::MAX;
        assert!(Payroll::new(parts).is_err());
    }

    #[test]
    fn test_deserialize_rejects_inverted_period() {
        let payroll = Payroll::new(create_test_parts()).unwrap();
        let mut value = serde_json::to_value(&payroll).unwrap();
        value["pay_period_start"] = serde_json::json!("2026-02-01");

        let error = serde_json::from_value::<Payroll>(value).unwrap_err();
        assert!(error.to_string().contains("pay_period"));
    }
}

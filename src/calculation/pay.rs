//! Pay calculation functionality.
//!
//! This module turns an [`Employee`] and an [`OvertimePolicy`] into a
//! [`PayBreakdown`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayBreakdown};

use super::overtime::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, split_hours};

/// How overtime is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Hours beyond which the multiplier applies.
    pub threshold: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

impl OvertimePolicy {
    /// Creates a policy with the given threshold and multiplier.
    pub fn new(threshold: Decimal, multiplier: Decimal) -> Self {
        Self {
            threshold,
            multiplier,
        }
    }

    /// The overtime hourly rate for a given base rate, or `None` if it
    /// overflows.
    pub fn overtime_rate(&self, hourly_rate: Decimal) -> Option<Decimal> {
        hourly_rate.checked_mul(self.multiplier)
    }
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_OVERTIME_THRESHOLD, DEFAULT_OVERTIME_MULTIPLIER)
    }
}

/// Calculates the pay breakdown for an employee.
///
/// - `base_pay = regular_hours * rate`
/// - `overtime_pay = overtime_hours * rate * multiplier`
/// - `gross_pay = base_pay + overtime_pay + allowances`
/// - `net_pay = gross_pay - deductions`
///
/// Fails with [`PayrollError::PayOutOfRange`] when any step overflows.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::{calculate_pay, OvertimePolicy};
/// use payroll_ledger::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Ada", "E001", Decimal::from(10))
///     .with_hours(Decimal::from(45))
///     .with_allowances(Decimal::from(25))
///     .with_deductions(Decimal::from(50));
///
/// let pay = calculate_pay(&employee, &OvertimePolicy::default())?;
/// assert_eq!(pay.gross_pay, Decimal::from(500));
/// assert_eq!(pay.net_pay, Decimal::from(450));
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
pub fn calculate_pay(
    employee: &Employee,
    policy: &OvertimePolicy,
) -> PayrollResult<PayBreakdown> {
    let out_of_range = || PayrollError::PayOutOfRange {
        employee_id: employee.employee_id.clone(),
    };
    let split = split_hours(employee.hours_worked, policy.threshold);

    let base_pay = split
        .regular_hours
        .checked_mul(employee.hourly_rate)
        .ok_or_else(out_of_range)?;
    let overtime_pay = split
        .overtime_hours
        .checked_mul(employee.hourly_rate)
        .and_then(|pay| pay.checked_mul(policy.multiplier))
        .ok_or_else(out_of_range)?;
    let gross_pay = base_pay
        .checked_add(overtime_pay)
        .and_then(|pay| pay.checked_add(employee.allowances))
        .ok_or_else(out_of_range)?;
    let net_pay = gross_pay
        .checked_sub(employee.deductions)
        .ok_or_else(out_of_range)?;

    Ok(PayBreakdown {
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        base_pay,
        overtime_pay,
        allowances: employee.allowances,
        deductions: employee.deductions,
        gross_pay,
        net_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_employee(rate: &str, hours: &str) -> Employee {
        Employee::new("Test Employee", "E001", dec(rate)).with_hours(dec(hours))
    }

    #[test]
    fn test_default_policy() {
        let policy = OvertimePolicy::default();
        assert_eq!(policy.threshold, dec("40"));
        assert_eq!(policy.multiplier, dec("1.5"));
    }

    #[test]
    fn test_45_hours_at_10_dollars() {
        let employee = create_employee("10", "45");
        let pay = calculate_pay(&employee, &OvertimePolicy::default()).unwrap();

        assert_eq!(pay.regular_hours, dec("40"));
        assert_eq!(pay.overtime_hours, dec("5"));
        assert_eq!(pay.base_pay, dec("400"));
        assert_eq!(pay.overtime_pay, dec("75"));
        assert_eq!(pay.gross_pay, dec("475"));
        assert_eq!(pay.net_pay, dec("475"));
    }

    #[test]
    fn test_allowances_and_deductions_applied() {
        let employee = create_employee("10", "45")
            .with_allowances(dec("30"))
            .with_deductions(dec("12.50"));
        let pay = calculate_pay(&employee, &OvertimePolicy::default()).unwrap();

        assert_eq!(pay.allowances, dec("30"));
        assert_eq!(pay.deductions, dec("12.50"));
        assert_eq!(pay.gross_pay, dec("505"));
        assert_eq!(pay.net_pay, dec("492.50"));
    }

    #[test]
    fn test_custom_policy() {
        let employee = create_employee("20", "10");
        let policy = OvertimePolicy::new(dec("8"), dec("2"));
        let pay = calculate_pay(&employee, &policy).unwrap();

        // 8h * $20 = $160, 2h * $40 = $80
        assert_eq!(pay.base_pay, dec("160"));
        assert_eq!(pay.overtime_pay, dec("80"));
        assert_eq!(pay.gross_pay, dec("240"));
    }

    #[test]
    fn test_no_hours_pays_only_allowances() {
        let employee = create_employee("25", "0").with_allowances(dec("40"));
        let pay = calculate_pay(&employee, &OvertimePolicy::default()).unwrap();

        assert_eq!(pay.base_pay, Decimal::ZERO);
        assert_eq!(pay.overtime_pay, Decimal::ZERO);
        assert_eq!(pay.gross_pay, dec("40"));
    }

    #[test]
    fn test_deductions_may_exceed_gross() {
        let employee = create_employee("10", "1").with_deductions(dec("25"));
        let pay = calculate_pay(&employee, &OvertimePolicy::default()).unwrap();

        assert_eq!(pay.net_pay, dec("-15"));
    }

    #[test]
    fn test_overtime_rate() {
        let policy = OvertimePolicy::default();
        assert_eq!(policy.overtime_rate(dec("28.54")), Some(dec("42.81")));
        assert_eq!(policy.overtime_rate(Decimal::MAX), None);
    }

    #[test]
    fn test_max_rate_without_hours_is_calculable() {
        let employee = Employee::new("Test Employee", "E001", Decimal::MAX);
        let pay = calculate_pay(&employee, &OvertimePolicy::default()).unwrap();

        assert_eq!(pay.base_pay, Decimal::ZERO);
        assert_eq!(pay.overtime_pay, Decimal::ZERO);
        assert_eq!(pay.gross_pay, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_pay_is_an_error() {
        let employee = Employee::new("Test Employee", "E001", Decimal::MAX).with_hours(dec("45"));
        let err = calculate_pay(&employee, &OvertimePolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            PayrollError::PayOutOfRange { ref employee_id } if employee_id == "E001"
        ));

        let employee = create_employee("10", "45").with_allowances(Decimal::MAX);
        assert!(calculate_pay(&employee, &OvertimePolicy::default()).is_err());
    }
}

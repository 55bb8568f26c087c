//! Employee model.
//!
//! This module defines the Employee record held by the payroll store and
//! its on-disk representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{OvertimePolicy, calculate_pay};
use crate::error::PayrollResult;

use super::PayBreakdown;

/// Represents an employee paid by the hour.
///
/// Fields other than `name`, `employee_id` and `hourly_rate` may be absent
/// from a stored record and take their defaults on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's display name.
    pub name: String,
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The hourly rate of pay.
    pub hourly_rate: Decimal,
    /// Hours worked in the current pay period.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// The department the employee belongs to; empty when unassigned.
    #[serde(default)]
    pub department: String,
    /// Allowances added on top of earned pay.
    #[serde(default)]
    pub allowances: Decimal,
    /// Deductions taken from gross pay.
    #[serde(default)]
    pub deductions: Decimal,
}

impl Employee {
    /// Creates an employee with no hours, allowances or deductions.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Ada", "E001", Decimal::new(2550, 2))
    ///     .with_department("Engineering");
    /// assert_eq!(employee.hours_worked, Decimal::ZERO);
    /// assert_eq!(employee.department, "Engineering");
    /// ```
    pub fn new(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            hourly_rate,
            hours_worked: Decimal::ZERO,
            department: String::new(),
            allowances: Decimal::ZERO,
            deductions: Decimal::ZERO,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the allowances.
    pub fn with_allowances(mut self, allowances: Decimal) -> Self {
        self.allowances = allowances;
        self
    }

    /// Sets the deductions.
    pub fn with_deductions(mut self, deductions: Decimal) -> Self {
        self.deductions = deductions;
        self
    }

    /// Sets the hours worked.
    pub fn with_hours(mut self, hours_worked: Decimal) -> Self {
        self.hours_worked = hours_worked;
        self
    }

    /// Computes this employee's pay breakdown.
    ///
    /// Hours up to `overtime_threshold` are paid at the hourly rate; hours
    /// beyond it are paid at the rate times `overtime_multiplier`. Fails
    /// if the pay overflows a decimal amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Ada", "E001", Decimal::from(10))
    ///     .with_hours(Decimal::from(45));
    /// let pay = employee.calculate_pay(Decimal::from(40), Decimal::new(15, 1))?;
    ///
    /// assert_eq!(pay.base_pay, Decimal::from(400));
    /// assert_eq!(pay.overtime_pay, Decimal::from(75));
    /// assert_eq!(pay.gross_pay, Decimal::from(475));
    /// # Ok::<(), payroll_ledger::error::PayrollError>(())
    /// ```
    pub fn calculate_pay(
        &self,
        overtime_threshold: Decimal,
        overtime_multiplier: Decimal,
    ) -> PayrollResult<PayBreakdown> {
        calculate_pay(
            self,
            &OvertimePolicy::new(overtime_threshold, overtime_multiplier),
        )
    }
}

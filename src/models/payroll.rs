//! Payroll result models.
//!
//! This module contains the [`PayBreakdown`] computed for a single employee
//! and the [`PayrollEntry`], [`PayrollReport`] and [`PayrollSummary`]
//! structures the store builds from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::Employee;

/// The pay components for one employee in one pay period.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(5),
///     base_pay: Decimal::from(400),
///     overtime_pay: Decimal::from(75),
///     allowances: Decimal::from(25),
///     deductions: Decimal::from(50),
///     gross_pay: Decimal::from(500),
///     net_pay: Decimal::from(450),
/// };
/// assert_eq!(breakdown.net_pay, breakdown.gross_pay - breakdown.deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours paid at the ordinary rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Regular hours times the hourly rate.
    pub base_pay: Decimal,
    /// Overtime hours times the hourly rate times the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Allowances added to earned pay.
    pub allowances: Decimal,
    /// Deductions taken from gross pay.
    pub deductions: Decimal,
    /// Base pay plus overtime pay plus allowances.
    pub gross_pay: Decimal,
    /// Gross pay minus deductions.
    pub net_pay: Decimal,
}

/// One employee's line in a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// Total hours worked.
    pub hours: Decimal,
    /// The hourly rate used.
    pub rate: Decimal,
    /// The employee's department.
    pub department: String,
    /// The computed pay components.
    #[serde(flatten)]
    pub breakdown: PayBreakdown,
}

impl PayrollEntry {
    /// Builds an entry from an employee and its computed breakdown.
    pub fn new(employee: &Employee, breakdown: PayBreakdown) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            hours: employee.hours_worked,
            rate: employee.hourly_rate,
            department: employee.department.clone(),
            breakdown,
        }
    }
}

/// Aggregate totals across a payroll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of gross pay.
    pub gross_total: Decimal,
    /// Sum of net pay.
    pub net_total: Decimal,
    /// Sum of hours worked.
    pub total_hours: Decimal,
}

impl PayrollTotals {
    /// Adds one entry to the running totals.
    ///
    /// Fails without changing the totals if any sum overflows.
    pub fn accumulate(&mut self, entry: &PayrollEntry) -> PayrollResult<()> {
        let out_of_range = || PayrollError::PayOutOfRange {
            employee_id: entry.employee_id.clone(),
        };
        let gross_total = self
            .gross_total
            .checked_add(entry.breakdown.gross_pay)
            .ok_or_else(out_of_range)?;
        let net_total = self
            .net_total
            .checked_add(entry.breakdown.net_pay)
            .ok_or_else(out_of_range)?;
        let total_hours = self
            .total_hours
            .checked_add(entry.hours)
            .ok_or_else(out_of_range)?;

        *self = Self {
            gross_total,
            net_total,
            total_hours,
        };
        Ok(())
    }
}

/// A full payroll run: one entry per employee plus totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Per-employee entries, ordered by employee ID.
    pub entries: Vec<PayrollEntry>,
    /// Totals across all entries.
    pub totals: PayrollTotals,
}

impl PayrollReport {
    /// Builds a report from entries, summing the totals.
    pub fn from_entries<I>(entries: I) -> PayrollResult<Self>
    where
        I: IntoIterator<Item = PayrollEntry>,
    {
        let mut report = PayrollReport::default();
        for entry in entries {
            report.totals.accumulate(&entry)?;
            report.entries.push(entry);
        }
        Ok(report)
    }
}

/// The result of [`calculate_payroll`](crate::store::PayrollStore::calculate_payroll).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayrollCalculation {
    /// A single employee's entry.
    Single(PayrollEntry),
    /// Every employee's entry with totals.
    All(PayrollReport),
}

/// Headline figures for the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of employees.
    pub employee_count: usize,
    /// Sum of hours worked.
    pub total_hours: Decimal,
    /// Sum of gross pay.
    pub gross_total: Decimal,
    /// Sum of net pay.
    pub net_total: Decimal,
    /// Mean hourly rate; zero when there are no employees.
    pub average_rate: Decimal,
}

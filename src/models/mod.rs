//! Core data models for the payroll ledger.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod payroll;

pub use employee::Employee;
pub use payroll::{
    PayBreakdown, PayrollCalculation, PayrollEntry, PayrollReport, PayrollSummary, PayrollTotals,
};

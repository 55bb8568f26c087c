//! Calculation logic for the payroll ledger.
//!
//! This module contains the overtime split and the pay calculation that
//! produces a [`PayBreakdown`](crate::models::PayBreakdown) for an employee.

mod overtime;
mod pay;

pub use overtime::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, HoursSplit, split_hours,
};
pub use pay::{OvertimePolicy, calculate_pay};

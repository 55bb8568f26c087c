//! Overtime split functionality.
//!
//! This module splits hours worked in a pay period into regular and overtime
//! portions against an overtime threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default overtime threshold in hours per pay period.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Default overtime multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Hours worked split at the overtime threshold.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::HoursSplit;
/// use rust_decimal::Decimal;
///
/// let split = HoursSplit {
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(2),
/// };
/// assert_eq!(split.total(), Decimal::from(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold; never negative.
    pub overtime_hours: Decimal,
}

impl HoursSplit {
    /// Regular plus overtime hours.
    pub fn total(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Splits worked hours into regular and overtime hours.
///
/// Regular hours are `min(worked, threshold)` and overtime hours are
/// `max(0, worked - threshold)`.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::{split_hours, DEFAULT_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_hours(Decimal::from_str("45").unwrap(), DEFAULT_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::from(40));
/// assert_eq!(split.overtime_hours, Decimal::from(5));
///
/// let split = split_hours(Decimal::from(32), DEFAULT_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::from(32));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_hours(worked_hours: Decimal, threshold: Decimal) -> HoursSplit {
    let regular_hours = worked_hours.min(threshold);
    let overtime_hours = (worked_hours - threshold).max(Decimal::ZERO);

    HoursSplit {
        regular_hours,
        overtime_hours,
    }
}

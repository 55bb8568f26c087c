//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing payroll records.
//! The `Display` text of each store-level variant is the message shown to
//! the user when an operation is rejected.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     employee_id: "E001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee with the same ID is already in the store.
    #[error("Employee ID already exists")]
    EmployeeExists {
        /// The duplicate employee ID.
        employee_id: String,
    },

    /// No employee with the given ID is in the store.
    #[error("Employee not found")]
    EmployeeNotFound {
        /// The employee ID that was looked up.
        employee_id: String,
    },

    /// The hourly rate was negative.
    #[error("Hourly rate must be positive")]
    NegativeRate,

    /// Allowances or deductions given to `add` were negative.
    #[error("Allowances and deductions must be non-negative")]
    NegativeAdjustments,

    /// Hours worked given to an update were negative.
    #[error("Hours worked must be non-negative")]
    NegativeHours,

    /// Allowances given to an update were negative.
    #[error("Allowances must be non-negative")]
    NegativeAllowances,

    /// Deductions given to an update were negative.
    #[error("Deductions must be non-negative")]
    NegativeDeductions,

    /// The employee's pay, or a payroll total including it, is too large
    /// for a decimal amount.
    #[error("Pay is too large to calculate for these values")]
    PayOutOfRange {
        /// The employee whose pay could not be calculated.
        employee_id: String,
    },

    /// Reading or writing the payroll data file failed.
    #[error("Failed to persist payroll data to '{path}': {message}")]
    Storage {
        /// The storage location involved.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns true for errors caused by the caller's input rather than
    /// by the environment (files, configuration).
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            PayrollError::Storage { .. }
                | PayrollError::ConfigNotFound { .. }
                | PayrollError::ConfigParseError { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

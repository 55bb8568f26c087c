//! Request types for the payroll web UI.
//!
//! This module defines the HTML form bodies accepted by the mutating
//! endpoints and their conversion into store inputs. Every field arrives as
//! text; numbers are parsed here so a malformed value becomes a
//! [`FormError`] rather than a rejected request.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{CompensationUpdate, NewEmployee};

/// A form field that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The hourly rate was missing or not a number.
    #[error("Invalid hourly rate. Please enter a number.")]
    InvalidRate,
    /// Hours were not a number.
    #[error("Invalid hours. Please enter a number.")]
    InvalidHours,
    /// An allowance or deduction amount was not a number.
    #[error("Invalid amount. Please enter a number.")]
    InvalidAmount,
    /// A required text field was blank.
    #[error("{field} is required.")]
    MissingField {
        /// Human-readable field label.
        field: &'static str,
    },
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Parses an optional numeric field: blank means "not provided".
fn parse_optional(raw: Option<&str>, error: FormError) -> Result<Option<Decimal>, FormError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => parse_decimal(value).map(Some).ok_or(error),
    }
}

fn required_text(raw: &str, field: &'static str) -> Result<String, FormError> {
    let value = raw.trim();
    if value.is_empty() {
        Err(FormError::MissingField { field })
    } else {
        Ok(value.to_string())
    }
}

/// Body of `POST /add_employee`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddEmployeeForm {
    /// Employee name.
    #[serde(default)]
    pub name: String,
    /// Employee ID.
    #[serde(default)]
    pub employee_id: String,
    /// Hourly rate as typed.
    #[serde(default)]
    pub hourly_rate: String,
    /// Department; optional.
    #[serde(default)]
    pub department: Option<String>,
    /// Allowances as typed; blank means zero.
    #[serde(default)]
    pub allowances: Option<String>,
    /// Deductions as typed; blank means zero.
    #[serde(default)]
    pub deductions: Option<String>,
}

impl TryFrom<AddEmployeeForm> for NewEmployee {
    type Error = FormError;

    fn try_from(form: AddEmployeeForm) -> Result<Self, Self::Error> {
        let name = required_text(&form.name, "Name")?;
        let employee_id = required_text(&form.employee_id, "Employee ID")?;
        let hourly_rate = parse_decimal(&form.hourly_rate).ok_or(FormError::InvalidRate)?;
        let allowances = parse_optional(form.allowances.as_deref(), FormError::InvalidAmount)?;
        let deductions = parse_optional(form.deductions.as_deref(), FormError::InvalidAmount)?;

        Ok(NewEmployee::new(name, employee_id, hourly_rate)
            .department(form.department.unwrap_or_default().trim())
            .allowances(allowances.unwrap_or_default())
            .deductions(deductions.unwrap_or_default()))
    }
}

/// Body of `POST /update_hours`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHoursForm {
    /// Employee ID.
    #[serde(default)]
    pub employee_id: String,
    /// Hours as typed.
    #[serde(default)]
    pub hours: String,
}

impl UpdateHoursForm {
    /// The trimmed employee ID and parsed hours.
    pub fn parse(&self) -> Result<(String, Decimal), FormError> {
        let hours = parse_decimal(&self.hours).ok_or(FormError::InvalidHours)?;
        Ok((self.employee_id.trim().to_string(), hours))
    }
}

/// Body of `POST /update_compensation`. Blank fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompensationForm {
    /// Employee ID.
    #[serde(default)]
    pub employee_id: String,
    /// Hours as typed.
    #[serde(default)]
    pub hours: Option<String>,
    /// Allowances as typed.
    #[serde(default)]
    pub allowances: Option<String>,
    /// Deductions as typed.
    #[serde(default)]
    pub deductions: Option<String>,
}

impl UpdateCompensationForm {
    /// The trimmed employee ID and the parsed update.
    pub fn parse(&self) -> Result<(String, CompensationUpdate), FormError> {
        let update = CompensationUpdate {
            hours: parse_optional(self.hours.as_deref(), FormError::InvalidHours)?,
            allowances: parse_optional(self.allowances.as_deref(), FormError::InvalidAmount)?,
            deductions: parse_optional(self.deductions.as_deref(), FormError::InvalidAmount)?,
        };
        Ok((self.employee_id.trim().to_string(), update))
    }
}

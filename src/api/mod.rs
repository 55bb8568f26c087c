//! HTTP front end for the payroll ledger.
//!
//! This module provides the HTML form endpoints, the CSV export and a few
//! read-only JSON endpoints over the payroll store.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddEmployeeForm, FormError, UpdateCompensationForm, UpdateHoursForm};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

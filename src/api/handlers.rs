//! HTTP request handlers for the payroll web UI.
//!
//! The form endpoints delegate to the [`PayrollStore`](crate::store::PayrollStore),
//! queue the outcome as a notice, and redirect back to the index page. The
//! JSON endpoints return payroll data directly.

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::export::{Notice, render_index};
use crate::models::{PayrollEntry, PayrollReport, PayrollSummary};
use crate::storage::PayrollStorage;
use crate::store::NewEmployee;

use super::request::{AddEmployeeForm, FormError, UpdateCompensationForm, UpdateHoursForm};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: PayrollStorage + Send + 'static,
{
    Router::new()
        .route("/", get(index_handler::<S>))
        .route("/add_employee", post(add_employee_handler::<S>))
        .route("/remove_employee/:employee_id", get(remove_employee_handler::<S>))
        .route("/update_hours", post(update_hours_handler::<S>))
        .route("/update_compensation", post(update_compensation_handler::<S>))
        .route("/export.csv", get(export_csv_handler::<S>))
        .route("/api/payroll", get(payroll_handler::<S>))
        .route("/api/payroll/:employee_id", get(employee_payroll_handler::<S>))
        .route("/api/summary", get(summary_handler::<S>))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Queues the outcome of a store mutation and redirects to the index page.
async fn notify_and_redirect<S: PayrollStorage + Send + 'static>(
    state: &AppState<S>,
    correlation_id: Uuid,
    outcome: Result<PayrollResult<String>, FormError>,
) -> Redirect {
    let notice = match outcome {
        Ok(Ok(message)) => {
            info!(correlation_id = %correlation_id, message = %message, "Request succeeded");
            Notice::success(message)
        }
        Ok(Err(err)) => {
            if err.is_validation() {
                warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
            } else {
                error!(correlation_id = %correlation_id, error = %err, "Request failed");
            }
            Notice::error(err.to_string())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid form input");
            Notice::error(err.to_string())
        }
    };
    state.push_notice(notice).await;
    Redirect::to("/")
}

/// Handler for GET /.
async fn index_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Response {
    let tabulated = {
        let store = state.store().await;
        store
            .payroll_report()
            .and_then(|report| Ok((report, store.summary()?)))
    };
    let (report, summary) = match tabulated {
        Ok(tabulated) => tabulated,
        Err(err) => {
            error!(error = %err, "Payroll calculation failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let notices = state.take_notices().await;

    match render_index(&report, &summary, notices) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering error").into_response()
        }
    }
}

/// Handler for POST /add_employee.
async fn add_employee_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
    Form(form): Form<AddEmployeeForm>,
) -> Redirect {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add employee request");

    let outcome = match NewEmployee::try_from(form) {
        Ok(new) => Ok(state.store().await.add(new)),
        Err(err) => Err(err),
    };
    notify_and_redirect(&state, correlation_id, outcome).await
}

/// Handler for GET /remove_employee/{employee_id}.
async fn remove_employee_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(employee_id): Path<String>,
) -> Redirect {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing remove employee request"
    );

    let outcome = Ok(state.store().await.remove(&employee_id));
    notify_and_redirect(&state, correlation_id, outcome).await
}

/// Handler for POST /update_hours.
async fn update_hours_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
    Form(form): Form<UpdateHoursForm>,
) -> Redirect {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing update hours request");

    let outcome = match form.parse() {
        Ok((employee_id, hours)) => Ok(state.store().await.update_hours(&employee_id, hours)),
        Err(err) => Err(err),
    };
    notify_and_redirect(&state, correlation_id, outcome).await
}

/// Handler for POST /update_compensation.
async fn update_compensation_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
    Form(form): Form<UpdateCompensationForm>,
) -> Redirect {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing update compensation request");

    let outcome = match form.parse() {
        Ok((employee_id, update)) => Ok(state
            .store()
            .await
            .update_compensation(&employee_id, update)),
        Err(err) => Err(err),
    };
    notify_and_redirect(&state, correlation_id, outcome).await
}

/// Handler for GET /export.csv.
async fn export_csv_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Response, ApiErrorResponse> {
    let csv = state.store().await.export_csv()?;
    let filename = format!("payroll_{}.csv", Local::now().format("%Y%m%d"));
    info!(filename = %filename, bytes = csv.len(), "Exported payroll CSV");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    )
        .into_response())
}

/// Handler for GET /api/payroll.
async fn payroll_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<PayrollReport>, ApiErrorResponse> {
    let report = state.store().await.payroll_report()?;
    Ok(Json(report))
}

/// Handler for GET /api/payroll/{employee_id}.
async fn employee_payroll_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
    Path(employee_id): Path<String>,
) -> Result<Json<PayrollEntry>, ApiErrorResponse> {
    let entry = state.store().await.employee_payroll(&employee_id)?;
    Ok(Json(entry))
}

/// Handler for GET /api/summary.
async fn summary_handler<S: PayrollStorage + Send + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<PayrollSummary>, ApiErrorResponse> {
    let summary = state.store().await.summary()?;
    Ok(Json(summary))
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

//! HTTP request handlers for the Labour Payment Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{assemble_rows, calculate_payments, render_report};
use crate::models::ReportResult;

use super::request::{PaymentsRequest, RecordSet, ReportRequest};
use super::response::{ApiError, ApiErrorResponse, PaymentsResponse};
use super::state::AppState;

/// The engine version reported with every report.
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payments", post(payments_handler))
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /payments endpoint.
///
/// Pairs contracts with attendance by position and returns the payments.
async fn payments_handler(payload: Result<Json<PaymentsRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payments request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records = match RecordSet::try_from(request) {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record validation failed");
            return error_response(err.into());
        }
    };

    let payments = calculate_payments(&records.contracts, &records.attendance);
    info!(
        correlation_id = %correlation_id,
        contracts = records.contracts.len(),
        attendance = records.attendance.len(),
        payments = payments.len(),
        "Payments calculated"
    );

    json_response(StatusCode::OK, PaymentsResponse { payments })
}

/// Handler for POST /report endpoint.
///
/// Recomputes payments from the submitted contracts and attendance, then
/// builds the report over all four sequences.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records = match RecordSet::try_from(request) {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record validation failed");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let result = generate_report(&records, &state);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        report_id = %result.report_id,
        employees = records.employees.len(),
        contracts = records.contracts.len(),
        attendance = records.attendance.len(),
        rows = result.rows.len(),
        duration_us = duration.as_micros(),
        "Report generated successfully"
    );

    json_response(StatusCode::OK, result)
}

/// Runs a full report: fresh payments, padded rows, rendered table.
fn generate_report(records: &RecordSet, state: &AppState) -> ReportResult {
    let payments = calculate_payments(&records.contracts, &records.attendance);
    let rows = assemble_rows(
        &records.employees,
        &records.contracts,
        &records.attendance,
        &payments,
    );
    let report = render_report(&rows, state.config().layout());

    ReportResult {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        payments,
        rows,
        report,
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    api_error.into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

//! HTTP API module for the Labour Payment Engine.
//!
//! This module exposes the payment calculator and report builder to an
//! orchestrator over HTTP. The API also plays the orchestrator's role of
//! validating records before they reach the engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, ContractRequest, EmployeeRequest, PaymentsRequest, RecordSet, ReportRequest,
};
pub use response::{ApiError, ApiErrorResponse, PaymentsResponse};
pub use state::AppState;

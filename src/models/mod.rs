//! Core data models for the Labour Payment Engine.
//!
//! None of these records reference one another. Employees, contracts,
//! attendance and payments are related only by their position in their
//! own sequences.

mod attendance;
mod contract;
mod employee;
mod payment;
mod report_result;

pub use attendance::AttendanceRecord;
pub use contract::{ContractRecord, MAX_HOURLY_RATE};
pub use employee::Employee;
pub use payment::{PaymentRecord, ReportRow};
pub use report_result::ReportResult;

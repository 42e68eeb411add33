//! Request types for the Labour Payment Engine API.
//!
//! This module defines the JSON request structures for the `/payments` and
//! `/report` endpoints. Every collection is an ordered list; order is the
//! only thing that relates entries across lists.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, ContractRecord, Employee};

/// Request body for the `/payments` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentsRequest {
    /// Contracts, in creation order.
    #[serde(default)]
    pub contracts: Vec<ContractRequest>,
    /// Attendance records, in creation order.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
}

/// Request body for the `/report` endpoint.
///
/// Payments are not accepted; they are recomputed from `contracts` and
/// `attendance` for every report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Employees, in registration order.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// Contracts, in creation order.
    #[serde(default)]
    pub contracts: Vec<ContractRequest>,
    /// Attendance records, in creation order.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// Contact information.
    #[serde(default)]
    pub contact_info: String,
}

/// Contract information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// Description of the job.
    pub job_description: String,
    /// Contract duration in months.
    pub duration_months: i32,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
}

/// Attendance information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The day worked.
    pub date: String,
    /// Whole hours worked.
    pub hours_worked: i32,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            contact_info: req.contact_info,
        }
    }
}

impl From<ContractRequest> for ContractRecord {
    fn from(req: ContractRequest) -> Self {
        ContractRecord {
            job_description: req.job_description,
            duration_months: req.duration_months,
            hourly_rate: req.hourly_rate,
        }
    }
}

impl From<AttendanceRequest> for AttendanceRecord {
    fn from(req: AttendanceRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            hours_worked: req.hours_worked,
        }
    }
}

/// Records converted from a request and checked against the entry rules.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    /// Employees, in request order.
    pub employees: Vec<Employee>,
    /// Contracts, in request order.
    pub contracts: Vec<ContractRecord>,
    /// Attendance records, in request order.
    pub attendance: Vec<AttendanceRecord>,
}

impl RecordSet {
    /// Converts and validates every record, stopping at the first invalid one.
    ///
    /// The error names the record kind and field; `record` is suffixed with
    /// the index of the offending entry, e.g. `contract[2]`.
    pub fn from_requests(
        employees: Vec<EmployeeRequest>,
        contracts: Vec<ContractRequest>,
        attendance: Vec<AttendanceRequest>,
    ) -> EngineResult<Self> {
        let employees: Vec<Employee> = employees.into_iter().map(Into::into).collect();
        let contracts: Vec<ContractRecord> = contracts.into_iter().map(Into::into).collect();
        let attendance: Vec<AttendanceRecord> = attendance.into_iter().map(Into::into).collect();

        for (i, employee) in employees.iter().enumerate() {
            employee.validate().map_err(|e| with_index(e, i))?;
        }
        for (i, contract) in contracts.iter().enumerate() {
            contract.validate().map_err(|e| with_index(e, i))?;
        }
        for (i, record) in attendance.iter().enumerate() {
            record.validate().map_err(|e| with_index(e, i))?;
        }

        Ok(Self {
            employees,
            contracts,
            attendance,
        })
    }
}

impl TryFrom<PaymentsRequest> for RecordSet {
    type Error = EngineError;

    fn try_from(req: PaymentsRequest) -> EngineResult<Self> {
        RecordSet::from_requests(Vec::new(), req.contracts, req.attendance)
    }
}

impl TryFrom<ReportRequest> for RecordSet {
    type Error = EngineError;

    fn try_from(req: ReportRequest) -> EngineResult<Self> {
        RecordSet::from_requests(req.employees, req.contracts, req.attendance)
    }
}

fn with_index(error: EngineError, index: usize) -> EngineError {
    match error {
        EngineError::InvalidRecord {
            record,
            field,
            message,
        } => EngineError::InvalidRecord {
            record: format!("{}[{}]", record, index),
            field,
            message,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report_request_defaults_to_empty() {
        let req: ReportRequest = serde_json::from_str("{}").unwrap();
        assert!(req.employees.is_empty());
        assert!(req.contracts.is_empty());
        assert!(req.attendance.is_empty());
    }

    #[test]
    fn test_deserialize_report_request() {
        let json = r#"{
            "employees": [{ "name": "Alice", "contact_info": "alice@example.com" }],
            "contracts": [{ "job_description": "Wiring", "duration_months": 2, "hourly_rate": "30.0" }],
            "attendance": [{ "date": "2024-02-01", "hours_worked": 8 }]
        }"#;

        let req: ReportRequest = serde_json::from_str(json).unwrap();
        let records = RecordSet::try_from(req).unwrap();

        assert_eq!(records.employees[0].name, "Alice");
        assert_eq!(records.contracts[0].hourly_rate, Decimal::new(300, 1));
        assert_eq!(records.attendance[0].hours_worked, 8);
    }

    #[test]
    fn test_invalid_contract_reports_index() {
        let req = PaymentsRequest {
            contracts: vec![
                ContractRequest {
                    job_description: "Wiring".to_string(),
                    duration_months: 2,
                    hourly_rate: Decimal::new(30, 0),
                },
                ContractRequest {
                    job_description: "Plumbing".to_string(),
                    duration_months: 3,
                    hourly_rate: Decimal::new(-5, 0),
                },
            ],
            attendance: vec![],
        };

        match RecordSet::try_from(req) {
            Err(EngineError::InvalidRecord { record, field, .. }) => {
                assert_eq!(record, "contract[1]");
                assert_eq!(field, "hourly_rate");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_attendance_reports_index() {
        let req = PaymentsRequest {
            contracts: vec![],
            attendance: vec![AttendanceRequest {
                date: "2024-01-01".to_string(),
                hours_worked: -3,
            }],
        };

        let err = RecordSet::try_from(req).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid attendance[0] field 'hours_worked': must not be negative, got -3"
        );
    }
}

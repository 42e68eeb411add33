//! Contract model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Highest hourly rate a contract may carry.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A work contract: what the job is, how long it runs, and what it pays.
///
/// Contracts do not reference an employee. A contract is paired with the
/// attendance record at the same position in the attendance sequence.
///
/// # Example
///
/// ```
/// use labour_engine::models::ContractRecord;
/// use rust_decimal::Decimal;
///
/// let contract = ContractRecord::new("Plumbing", 3, Decimal::new(250, 1));
/// assert_eq!(contract.hourly_rate, Decimal::new(25, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Description of the job performed under this contract.
    pub job_description: String,
    /// Contract duration in months.
    pub duration_months: i32,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
}

impl ContractRecord {
    /// Creates a new contract record.
    pub fn new(
        job_description: impl Into<String>,
        duration_months: i32,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            job_description: job_description.into(),
            duration_months,
            hourly_rate,
        }
    }

    /// Checks the contract before it is assigned.
    ///
    /// The engine itself accepts any contract; these rules belong to the
    /// layer that creates records.
    pub fn validate(&self) -> EngineResult<()> {
        if self.job_description.trim().is_empty() {
            return Err(EngineError::invalid_record(
                "contract",
                "job_description",
                "must not be blank",
            ));
        }
        if self.duration_months < 1 {
            return Err(EngineError::invalid_record(
                "contract",
                "duration_months",
                format!("must be at least 1, got {}", self.duration_months),
            ));
        }
        if self.hourly_rate <= Decimal::ZERO {
            return Err(EngineError::invalid_record(
                "contract",
                "hourly_rate",
                format!("must be positive, got {}", self.hourly_rate),
            ));
        }
        if self.hourly_rate > MAX_HOURLY_RATE {
            return Err(EngineError::invalid_record(
                "contract",
                "hourly_rate",
                format!("must not exceed {}, got {}", MAX_HOURLY_RATE, self.hourly_rate),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_contract_with_string_rate() {
        let json = r#"{
            "job_description": "Wiring",
            "duration_months": 2,
            "hourly_rate": "30.00"
        }"#;

        let contract: ContractRecord = serde_json::from_str(json).unwrap();
        assert_eq!(contract.job_description, "Wiring");
        assert_eq!(contract.duration_months, 2);
        assert_eq!(contract.hourly_rate, dec("30.00"));
    }

    #[test]
    fn test_deserialize_contract_with_numeric_rate() {
        let json = r#"{
            "job_description": "Plumbing",
            "duration_months": 3,
            "hourly_rate": 25.5
        }"#;

        let contract: ContractRecord = serde_json::from_str(json).unwrap();
        assert_eq!(contract.hourly_rate, dec("25.5"));
    }

    #[test]
    fn test_serialize_rate_as_string() {
        let contract = ContractRecord::new("Wiring", 2, dec("30.00"));
        let json = serde_json::to_string(&contract).unwrap();
        assert!(json.contains("\"hourly_rate\":\"30.00\""));
    }

    #[test]
    fn test_validate_accepts_valid_contract() {
        assert!(ContractRecord::new("Wiring", 2, dec("30")).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let result = ContractRecord::new("Wiring", 0, dec("30")).validate();
        match result {
            Err(EngineError::InvalidRecord { field, message, .. }) => {
                assert_eq!(field, "duration_months");
                assert!(message.contains("got 0"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        for rate in ["0", "-12.50"] {
            let result = ContractRecord::new("Wiring", 2, dec(rate)).validate();
            match result {
                Err(EngineError::InvalidRecord { field, .. }) => assert_eq!(field, "hourly_rate"),
                other => panic!("Expected InvalidRecord for rate {}, got {:?}", rate, other),
            }
        }
    }

    #[test]
    fn test_validate_rate_upper_bound() {
        assert!(ContractRecord::new("Wiring", 2, MAX_HOURLY_RATE).validate().is_ok());

        for rate in [MAX_HOURLY_RATE + Decimal::new(1, 2), Decimal::MAX] {
            let result = ContractRecord::new("Wiring", 2, rate).validate();
            match result {
                Err(EngineError::InvalidRecord { field, message, .. }) => {
                    assert_eq!(field, "hourly_rate");
                    assert!(message.contains("must not exceed 1000000"));
                }
                other => panic!("Expected InvalidRecord for rate {}, got {:?}", rate, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_blank_job_description() {
        let result = ContractRecord::new("\t", 2, dec("30")).validate();
        assert!(matches!(
            result,
            Err(EngineError::InvalidRecord { ref field, .. }) if field == "job_description"
        ));
    }
}

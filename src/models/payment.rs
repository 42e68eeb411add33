//! Payment and report row models.
//!
//! Both types are derived: payments from a contract and attendance pair,
//! report rows from whatever sits at one index across all four sequences.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The amount owed for one positionally paired contract and attendance record.
///
/// Payments are only meaningful by their index in the payments sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unrounded total payment.
    pub total_payment: Decimal,
}

impl PaymentRecord {
    /// Creates a payment with the given total.
    pub fn new(total_payment: Decimal) -> Self {
        Self { total_payment }
    }
}

/// One row of the payment report.
///
/// Missing entries are already padded: empty text, zero hours, zero payment.
///
/// # Example
///
/// ```
/// use labour_engine::models::ReportRow;
/// use rust_decimal::Decimal;
///
/// let row = ReportRow {
///     employee_name: "Alice".to_string(),
///     job_description: "Wiring".to_string(),
///     hours_worked: 8,
///     total_payment: Decimal::new(240, 0),
/// };
/// assert_eq!(row.hours_worked, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The employee name, or empty when no employee sits at this index.
    pub employee_name: String,
    /// The job description, or empty when no contract sits at this index.
    pub job_description: String,
    /// The hours worked, or 0 when no attendance record sits at this index.
    pub hours_worked: i32,
    /// The payment, or 0 when no payment sits at this index.
    pub total_payment: Decimal,
}

//! Payment calculation.
//!
//! Payments are derived state. They are recomputed from the full contract
//! and attendance sequences every time a report is requested.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{AttendanceRecord, ContractRecord, PaymentRecord};

use super::assignment::correlate_by_position;

/// Calculates the payment for one contract and one attendance record.
///
/// The result is `hourly_rate × hours_worked` with no rounding. Negative or
/// zero inputs are carried through unchanged.
///
/// A product outside the `Decimal` range saturates to [`Decimal::MAX`] or
/// [`Decimal::MIN`] according to its sign.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::calculate_payment;
/// use labour_engine::models::{AttendanceRecord, ContractRecord};
/// use rust_decimal::Decimal;
///
/// let contract = ContractRecord::new("Plumbing", 3, Decimal::new(25, 0));
/// let attendance = AttendanceRecord::new("2024-01-01", 10);
///
/// let payment = calculate_payment(&contract, &attendance);
/// assert_eq!(payment.total_payment, Decimal::new(250, 0));
/// ```
pub fn calculate_payment(
    contract: &ContractRecord,
    attendance: &AttendanceRecord,
) -> PaymentRecord {
    let rate = contract.hourly_rate;
    let hours = Decimal::from(attendance.hours_worked);

    let total = rate.checked_mul(hours).unwrap_or_else(|| {
        warn!(
            hourly_rate = %rate,
            hours_worked = attendance.hours_worked,
            "Payment overflowed, saturating"
        );
        if rate.is_sign_negative() == hours.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    });

    PaymentRecord::new(total)
}

/// Builds the payments sequence from contracts and attendance.
///
/// One payment is produced per index in `0..min(contracts.len(), attendance.len())`.
/// Records past the end of the shorter sequence are dropped without any
/// error or marker in the output.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::calculate_payments;
/// use labour_engine::models::{AttendanceRecord, ContractRecord};
/// use rust_decimal::Decimal;
///
/// let contracts = vec![ContractRecord::new("Wiring", 2, Decimal::new(30, 0))];
/// let attendance = vec![
///     AttendanceRecord::new("2024-02-01", 8),
///     AttendanceRecord::new("2024-02-02", 4),
/// ];
///
/// let payments = calculate_payments(&contracts, &attendance);
/// assert_eq!(payments.len(), 1);
/// assert_eq!(payments[0].total_payment, Decimal::new(240, 0));
/// ```
pub fn calculate_payments(
    contracts: &[ContractRecord],
    attendance: &[AttendanceRecord],
) -> Vec<PaymentRecord> {
    let payments: Vec<PaymentRecord> = correlate_by_position(contracts, attendance)
        .map(|assignment| assignment.payment())
        .collect();

    debug!(
        contracts = contracts.len(),
        attendance = attendance.len(),
        payments = payments.len(),
        "Payments recomputed"
    );

    payments
}

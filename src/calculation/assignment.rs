//! Positional correlation of contracts and attendance.
//!
//! Contracts and attendance records share no key. The record at index `i`
//! of one sequence is treated as belonging with the record at index `i` of
//! the other. [`Assignment`] names that pairing so that every consumer pairs
//! records the same way.
//!
//! Inserting or removing a record in only one of the sequences shifts every
//! later pairing. Nothing here can detect that.

use crate::models::{AttendanceRecord, ContractRecord, PaymentRecord};

use super::payment::calculate_payment;

/// A contract and an attendance record that occupy the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// The shared index in both source sequences.
    pub index: usize,
    /// The contract at `index`.
    pub contract: &'a ContractRecord,
    /// The attendance record at `index`.
    pub attendance: &'a AttendanceRecord,
}

impl Assignment<'_> {
    /// Computes the payment owed for this pairing.
    pub fn payment(&self) -> PaymentRecord {
        calculate_payment(self.contract, self.attendance)
    }
}

/// Pairs contracts with attendance records by index.
///
/// Yields `min(contracts.len(), attendance.len())` assignments. Records past
/// the end of the shorter sequence are not paired.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::correlate_by_position;
/// use labour_engine::models::{AttendanceRecord, ContractRecord};
/// use rust_decimal::Decimal;
///
/// let contracts = vec![ContractRecord::new("Wiring", 2, Decimal::new(30, 0))];
/// let attendance = vec![
///     AttendanceRecord::new("2024-02-01", 8),
///     AttendanceRecord::new("2024-02-02", 6),
/// ];
///
/// let assignments: Vec<_> = correlate_by_position(&contracts, &attendance).collect();
/// assert_eq!(assignments.len(), 1);
/// assert_eq!(assignments[0].payment().total_payment, Decimal::new(240, 0));
/// ```
pub fn correlate_by_position<'a>(
    contracts: &'a [ContractRecord],
    attendance: &'a [AttendanceRecord],
) -> impl ExactSizeIterator<Item = Assignment<'a>> + 'a {
    contracts
        .iter()
        .zip(attendance.iter())
        .enumerate()
        .map(|(index, (contract, attendance))| Assignment {
            index,
            contract,
            attendance,
        })
}

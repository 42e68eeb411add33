//! Calculation logic for the Labour Payment Engine.
//!
//! This module contains the positional pairing of contracts with attendance,
//! the payment calculator built on that pairing, and the report builder that
//! zips employees, contracts, attendance and payments into a padded table.

mod assignment;
mod payment;
mod report;

pub use assignment::{Assignment, correlate_by_position};
pub use payment::{calculate_payment, calculate_payments};
pub use report::{
    PAYMENT_DECIMAL_PLACES, assemble_rows, build_report, build_report_with_layout,
    format_payment, render_report,
};

//! Payment report building.
//!
//! The report zips four independently sized sequences by index. The longest
//! sequence decides the number of rows and every shorter sequence is padded:
//! empty text for names and job descriptions, `0` hours and `0.00` payment.
//! Rows are never dropped and never joined on anything but position.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::ReportLayout;
use crate::models::{AttendanceRecord, ContractRecord, Employee, PaymentRecord, ReportRow};

/// Number of decimal places shown for payments.
pub const PAYMENT_DECIMAL_PLACES: u32 = 2;

/// Builds the padded report rows without formatting them.
///
/// Produces `max` of the four lengths rows. A sequence that is too short
/// for a given index contributes its padding value to that row.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::assemble_rows;
/// use labour_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employees = vec![Employee::new("Alice", "alice@example.com")];
/// let rows = assemble_rows(&employees, &[], &[], &[]);
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].employee_name, "Alice");
/// assert_eq!(rows[0].job_description, "");
/// assert_eq!(rows[0].hours_worked, 0);
/// assert_eq!(rows[0].total_payment, Decimal::ZERO);
/// ```
pub fn assemble_rows(
    employees: &[Employee],
    contracts: &[ContractRecord],
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
) -> Vec<ReportRow> {
    let size = employees
        .len()
        .max(contracts.len())
        .max(attendance.len())
        .max(payments.len());

    (0..size)
        .map(|i| ReportRow {
            employee_name: employees.get(i).map(|e| e.name.clone()).unwrap_or_default(),
            job_description: contracts
                .get(i)
                .map(|c| c.job_description.clone())
                .unwrap_or_default(),
            hours_worked: attendance.get(i).map_or(0, |a| a.hours_worked),
            total_payment: payments.get(i).map_or(Decimal::ZERO, |p| p.total_payment),
        })
        .collect()
}

/// Formats a payment with exactly two decimal places.
///
/// Midpoints round away from zero. No digit grouping is applied.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::format_payment;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_payment(Decimal::new(12345, 1)), "1234.50");
/// assert_eq!(format_payment(Decimal::ZERO), "0.00");
/// ```
pub fn format_payment(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        PAYMENT_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.*}", PAYMENT_DECIMAL_PLACES as usize, rounded)
}

/// Renders rows as a fixed-width table using the given layout.
///
/// The output is a header line, a dash separator aligned with the cell
/// borders, and one line per row. Every line ends with `\n`. Cells are
/// left-aligned and padded to the column width; longer values overflow.
pub fn render_report(rows: &[ReportRow], layout: &ReportLayout) -> String {
    let mut report = String::new();
    let [employee, job, hours, payment] = layout.columns();

    push_line(
        &mut report,
        layout,
        [
            employee.title.as_str(),
            job.title.as_str(),
            hours.title.as_str(),
            payment.title.as_str(),
        ],
    );

    for column in layout.columns() {
        report.push('|');
        report.push_str(&"-".repeat(column.width + 2));
    }
    report.push_str("|\n");

    for row in rows {
        push_line(
            &mut report,
            layout,
            [
                row.employee_name.as_str(),
                row.job_description.as_str(),
                row.hours_worked.to_string().as_str(),
                format_payment(row.total_payment).as_str(),
            ],
        );
    }

    report
}

fn push_line(report: &mut String, layout: &ReportLayout, cells: [&str; 4]) {
    for (column, cell) in layout.columns().into_iter().zip(cells) {
        report.push_str(&format!("| {:<width$} ", cell, width = column.width));
    }
    report.push_str("|\n");
}

/// Builds the payment report with the default column layout.
///
/// `payments` is expected to be the output of the most recent
/// [`calculate_payments`](super::calculate_payments) run and may be shorter
/// than the other sequences.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::{build_report, calculate_payments};
/// use labour_engine::models::{AttendanceRecord, ContractRecord, Employee};
/// use rust_decimal::Decimal;
///
/// let employees = vec![Employee::new("Alice", "alice@example.com")];
/// let contracts = vec![ContractRecord::new("Wiring", 2, Decimal::new(30, 0))];
/// let attendance = vec![AttendanceRecord::new("2024-02-01", 8)];
/// let payments = calculate_payments(&contracts, &attendance);
///
/// let report = build_report(&employees, &contracts, &attendance, &payments);
/// assert_eq!(report.lines().count(), 3);
/// assert!(report.contains("| Alice "));
/// assert!(report.contains("| 240.00 "));
/// ```
pub fn build_report(
    employees: &[Employee],
    contracts: &[ContractRecord],
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
) -> String {
    build_report_with_layout(
        employees,
        contracts,
        attendance,
        payments,
        &ReportLayout::default(),
    )
}

/// Builds the payment report with a custom column layout.
pub fn build_report_with_layout(
    employees: &[Employee],
    contracts: &[ContractRecord],
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
    layout: &ReportLayout,
) -> String {
    let rows = assemble_rows(employees, contracts, attendance, payments);

    debug!(
        employees = employees.len(),
        contracts = contracts.len(),
        attendance = attendance.len(),
        payments = payments.len(),
        rows = rows.len(),
        "Report assembled"
    );

    render_report(&rows, layout)
}

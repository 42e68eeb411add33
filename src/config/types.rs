//! Configuration types for report rendering.
//!
//! These structures are deserialized from `report.yaml`.

use serde::{Deserialize, Serialize};

/// Metadata about the report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportMetadata {
    /// The human-readable report name.
    pub name: String,
    /// The version of the report format.
    pub version: String,
}

/// A single fixed-width column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnSpec {
    /// The header text.
    pub title: String,
    /// Minimum cell width. Longer values are not truncated.
    pub width: usize,
}

impl ColumnSpec {
    /// Creates a column with the given title and width.
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// Column layout of the payment report.
///
/// The default layout is Employee (25), Job Description (40),
/// Hours Worked (15) and Total Payment (15).
///
/// # Example
///
/// ```
/// use labour_engine::config::ReportLayout;
///
/// let layout = ReportLayout::default();
/// assert_eq!(layout.employee.width, 25);
/// assert_eq!(layout.job_description.title, "Job Description");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportLayout {
    /// Employee name column.
    pub employee: ColumnSpec,
    /// Job description column.
    pub job_description: ColumnSpec,
    /// Hours worked column.
    pub hours_worked: ColumnSpec,
    /// Total payment column.
    pub total_payment: ColumnSpec,
}

impl ReportLayout {
    /// Returns the four columns in display order.
    pub fn columns(&self) -> [&ColumnSpec; 4] {
        [
            &self.employee,
            &self.job_description,
            &self.hours_worked,
            &self.total_payment,
        ]
    }
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            employee: ColumnSpec::new("Employee", 25),
            job_description: ColumnSpec::new("Job Description", 40),
            hours_worked: ColumnSpec::new("Hours Worked", 15),
            total_payment: ColumnSpec::new("Total Payment", 15),
        }
    }
}

/// The report configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Report metadata.
    #[serde(flatten)]
    pub metadata: ReportMetadata,
    /// Column layout.
    pub columns: ReportLayout,
}

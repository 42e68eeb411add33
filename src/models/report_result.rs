//! Report result model.
//!
//! This module contains the [`ReportResult`] type returned to an orchestrator
//! after a report run: the freshly computed payments, the padded rows, and the
//! rendered table text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PaymentRecord, ReportRow};

/// The complete output of one report run.
///
/// # Example
///
/// ```
/// use labour_engine::models::ReportResult;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = ReportResult {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     payments: vec![],
///     rows: vec![],
///     report: String::new(),
/// };
/// assert!(result.rows.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResult {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// Payments recomputed for this run, one per paired index.
    pub payments: Vec<PaymentRecord>,
    /// Padded rows, one per index of the longest input sequence.
    pub rows: Vec<ReportRow>,
    /// The rendered fixed-width table.
    pub report: String,
}

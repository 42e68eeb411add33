//! Attendance model.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hours worked on a given day.
///
/// The date is kept as the caller supplied it. The engine never parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The day worked, in whatever format the caller uses.
    pub date: String,
    /// Whole hours worked.
    pub hours_worked: i32,
}

impl AttendanceRecord {
    /// Creates a new attendance record.
    ///
    /// # Examples
    ///
    /// ```
    /// use labour_engine::models::AttendanceRecord;
    ///
    /// let attendance = AttendanceRecord::new("2024-01-01", 10);
    /// assert_eq!(attendance.hours_worked, 10);
    /// ```
    pub fn new(date: impl Into<String>, hours_worked: i32) -> Self {
        Self {
            date: date.into(),
            hours_worked,
        }
    }

    /// Checks the record before it is tracked.
    pub fn validate(&self) -> EngineResult<()> {
        if self.date.trim().is_empty() {
            return Err(EngineError::invalid_record("attendance", "date", "must not be blank"));
        }
        if self.hours_worked < 0 {
            return Err(EngineError::invalid_record(
                "attendance",
                "hours_worked",
                format!("must not be negative, got {}", self.hours_worked),
            ));
        }
        Ok(())
    }
}

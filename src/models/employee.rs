//! Employee model.
//!
//! Employees carry no link to contracts or attendance. Their position in
//! the employee sequence is the only thing that places them on a report row.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a registered worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's display name.
    pub name: String,
    /// Free-form contact information (phone, email, address).
    #[serde(default)]
    pub contact_info: String,
}

impl Employee {
    /// Creates a new employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use labour_engine::models::Employee;
    ///
    /// let employee = Employee::new("Alice", "alice@example.com");
    /// assert_eq!(employee.name, "Alice");
    /// ```
    pub fn new(name: impl Into<String>, contact_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }

    /// Checks the employee before it is registered.
    ///
    /// Both the name and the contact information must contain
    /// something other than whitespace.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid_record("employee", "name", "must not be blank"));
        }
        if self.contact_info.trim().is_empty() {
            return Err(EngineError::invalid_record(
                "employee",
                "contact_info",
                "must not be blank",
            ));
        }
        Ok(())
    }
}

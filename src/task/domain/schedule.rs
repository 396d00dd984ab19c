//! Calendar window of a task.

use super::TaskDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Start and due dates of a task, with `due >= start`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use worknest::task::domain::Schedule;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let due = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let schedule = Schedule::new(start, due).unwrap();
/// assert!(schedule.is_past_due(NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()));
/// assert!(!schedule.is_past_due(due));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    start: NaiveDate,
    due: NaiveDate,
}

impl Schedule {
    /// Creates a validated schedule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueBeforeStart`] when `due` precedes
    /// `start`.
    pub fn new(start: NaiveDate, due: NaiveDate) -> Result<Self, TaskDomainError> {
        if due < start {
            return Err(TaskDomainError::DueBeforeStart { start, due });
        }
        Ok(Self { start, due })
    }

    /// Creates a schedule from optional request dates.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingStartDate`] or
    /// [`TaskDomainError::MissingDueDate`] when a date is absent, and
    /// [`TaskDomainError::DueBeforeStart`] when the window is inverted.
    pub fn from_optional(
        start: Option<NaiveDate>,
        due: Option<NaiveDate>,
    ) -> Result<Self, TaskDomainError> {
        let start_date = start.ok_or(TaskDomainError::MissingStartDate)?;
        let due_date = due.ok_or(TaskDomainError::MissingDueDate)?;
        Self::new(start_date, due_date)
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due(&self) -> NaiveDate {
        self.due
    }

    /// Returns `true` when the due date is strictly before `reference`.
    #[must_use]
    pub fn is_past_due(&self, reference: NaiveDate) -> bool {
        self.due < reference
    }
}

//! Assignee set owned by a task.

use super::TaskDomainError;
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Non-empty set of users assigned to a task.
///
/// Duplicates collapse on construction. The set is only replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssigneeSet(BTreeSet<UserId>);

impl AssigneeSet {
    /// Creates a validated assignee set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NoAssignees`] when `ids` is empty.
    pub fn new(ids: impl IntoIterator<Item = UserId>) -> Result<Self, TaskDomainError> {
        let set: BTreeSet<UserId> = ids.into_iter().collect();
        if set.is_empty() {
            return Err(TaskDomainError::NoAssignees);
        }
        Ok(Self(set))
    }

    /// Returns `true` when `user_id` is assigned.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    /// Returns the number of assignees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no user is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over assignee identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = UserId> + '_ {
        self.0.iter().copied()
    }

    /// Returns the assignee identifiers as a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<UserId> {
        self.iter().collect()
    }
}

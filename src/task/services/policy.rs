//! Tunable limits and labels for task services.

use serde::Deserialize;
use thiserror::Error;

/// Configuration shared by the task services.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use worknest::task::services::TaskPolicy;
///
/// let policy = TaskPolicy::from_json(r#"{ "max_description_chars": 500 }"#).unwrap();
/// assert_eq!(policy.max_description_chars, 500);
/// assert_eq!(policy.unknown_action_label, "Unknown Action");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskPolicy {
    /// Maximum task description length in characters.
    pub max_description_chars: usize,
    /// Action label recorded when an activity entry has none.
    pub unknown_action_label: String,
    /// Prefix marking a comment created from a reassignment note.
    pub reassign_note_prefix: String,
}

impl Default for TaskPolicy {
    fn default() -> Self {
        Self {
            max_description_chars: 2000,
            unknown_action_label: "Unknown Action".to_owned(),
            reassign_note_prefix: "[Reassign Note] ".to_owned(),
        }
    }
}

impl TaskPolicy {
    /// Parses a policy from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPolicyError`] when the input is not valid JSON for this
    /// structure.
    pub fn from_json(raw: &str) -> Result<Self, TaskPolicyError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Error returned while loading a [`TaskPolicy`].
#[derive(Debug, Error)]
#[error("invalid task policy: {0}")]
pub struct TaskPolicyError(#[from] serde_json::Error);

//! Finalized task payload handed to the task store.

use super::{DueDate, DurationMinutes, ListId, StartTime};
use serde::{Deserialize, Serialize};

/// Subtask as emitted on submission.
///
/// Identifiers are positions in the emitted list, starting at zero. There is
/// no completion flag; the task store decides the initial completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubtask {
    /// Position-based identifier.
    pub id: usize,
    /// Subtask title as entered.
    pub title: String,
}

impl NewSubtask {
    /// Creates an emitted subtask.
    #[must_use]
    pub fn new(id: usize, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Validated, normalized task ready for the task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Trimmed, non-empty title.
    pub title: String,
    /// List the task is filed under, if any list was available.
    pub list_id: Option<ListId>,
    /// Calendar day the task is due.
    pub due_date: DueDate,
    /// Optional time of day the task starts.
    pub start_time: Option<StartTime>,
    /// Planned duration.
    pub duration_minutes: DurationMinutes,
    /// Whether the start time is immovable.
    pub is_fixed: bool,
    /// Whether the task is flagged important.
    pub important: bool,
    /// Trimmed notes, possibly empty.
    pub notes: String,
    /// Non-blank subtasks in entry order.
    pub subtasks: Vec<NewSubtask>,
}

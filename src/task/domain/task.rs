//! Task records as accepted by a task store.

use super::{DueDate, DurationMinutes, ListId, NewTask, StartTime, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Subtask as held by a task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSubtask {
    /// Position-based identifier assigned at submission.
    pub id: usize,
    /// Subtask title.
    pub title: String,
    /// Completion state, initially `false`.
    pub completed: bool,
}

/// Task record created from a submitted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTask {
    id: TaskId,
    title: String,
    list_id: Option<ListId>,
    due_date: DueDate,
    start_time: Option<StartTime>,
    duration_minutes: DurationMinutes,
    is_fixed: bool,
    important: bool,
    notes: String,
    subtasks: Vec<StoredSubtask>,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl StoredTask {
    /// Creates a stored record from a submitted payload.
    ///
    /// The task and all of its subtasks start out incomplete.
    #[must_use]
    pub fn from_new(task: NewTask, clock: &impl Clock) -> Self {
        let subtasks = task
            .subtasks
            .into_iter()
            .map(|subtask| StoredSubtask {
                id: subtask.id,
                title: subtask.title,
                completed: false,
            })
            .collect();

        Self {
            id: TaskId::new(),
            title: task.title,
            list_id: task.list_id,
            due_date: task.due_date,
            start_time: task.start_time,
            duration_minutes: task.duration_minutes,
            is_fixed: task.is_fixed,
            important: task.important,
            notes: task.notes,
            subtasks,
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owning list.
    #[must_use]
    pub const fn list_id(&self) -> Option<ListId> {
        self.list_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the start time, if any.
    #[must_use]
    pub const fn start_time(&self) -> Option<&StartTime> {
        self.start_time.as_ref()
    }

    /// Returns the planned duration.
    #[must_use]
    pub const fn duration_minutes(&self) -> DurationMinutes {
        self.duration_minutes
    }

    /// Returns whether the start time is fixed.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// Returns whether the task is flagged important.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.important
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the subtasks.
    #[must_use]
    pub fn subtasks(&self) -> &[StoredSubtask] {
        &self.subtasks
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

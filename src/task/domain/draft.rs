//! Task draft aggregate: the in-progress record behind a creation form.
//!
//! A [`TaskDraft`] accepts every edit the form produces. Nothing is checked
//! until [`TaskDraft::finalize`], which enforces the single validation rule
//! (a non-blank title) and produces the [`NewTask`] payload.

use super::{
    DraftConfig, DueDate, DurationMinutes, ListId, NewSubtask, NewTask, ParseDraftFieldError,
    StartTime, SubtaskRowId, TaskDomainError, TaskList,
};
use mockable::Clock;
use std::fmt;
use tracing::debug;

/// Scalar draft fields addressable by form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Task title.
    Title,
    /// Owning list.
    List,
    /// Due date.
    DueDate,
    /// Start time of day.
    StartTime,
    /// Duration in minutes.
    Duration,
    /// Fixed-time flag.
    Fixed,
    /// Importance flag.
    Important,
    /// Free-text notes.
    Notes,
}

impl DraftField {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::List => "listId",
            Self::DueDate => "dueDate",
            Self::StartTime => "startTime",
            Self::Duration => "durationMinutes",
            Self::Fixed => "isFixed",
            Self::Important => "important",
            Self::Notes => "notes",
        }
    }
}

impl TryFrom<&str> for DraftField {
    type Error = ParseDraftFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "title" => Ok(Self::Title),
            "list" | "listid" => Ok(Self::List),
            "duedate" => Ok(Self::DueDate),
            "starttime" => Ok(Self::StartTime),
            "duration" | "durationminutes" => Ok(Self::Duration),
            "fixed" | "isfixed" => Ok(Self::Fixed),
            "important" => Ok(Self::Important),
            "notes" => Ok(Self::Notes),
            _ => Err(ParseDraftFieldError(value.to_owned())),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One checklist row in the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskRow {
    id: SubtaskRowId,
    title: String,
    completed: bool,
}

impl SubtaskRow {
    fn blank() -> Self {
        Self {
            id: SubtaskRowId::new(),
            title: String::new(),
            completed: false,
        }
    }

    /// Returns the temporary row identifier.
    #[must_use]
    pub const fn id(&self) -> SubtaskRowId {
        self.id
    }

    /// Returns the row title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the completion flag; always `false` while drafting.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the row has no visible title.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// In-progress task record owned by an open creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    list_id: Option<ListId>,
    due_date: DueDate,
    start_time: Option<StartTime>,
    duration: DurationMinutes,
    is_fixed: bool,
    important: bool,
    notes: String,
    subtasks: Vec<SubtaskRow>,
    config: DraftConfig,
}

impl TaskDraft {
    /// Creates an empty draft with explicit defaults.
    #[must_use]
    pub fn new(list_id: Option<ListId>, due_date: DueDate, config: DraftConfig) -> Self {
        Self {
            title: String::new(),
            list_id,
            due_date,
            start_time: None,
            duration: config.default_duration,
            is_fixed: false,
            important: false,
            notes: String::new(),
            subtasks: Vec::new(),
            config,
        }
    }

    /// Creates a draft seeded from the lists and initial date a host
    /// supplies.
    ///
    /// The list defaults to the first supplied list and the due date to
    /// `initial_due_date`, or today when none is given.
    #[must_use]
    pub fn seeded(
        lists: &[TaskList],
        initial_due_date: Option<DueDate>,
        config: DraftConfig,
        clock: &impl Clock,
    ) -> Self {
        let list_id = lists.first().map(|list| list.id);
        let due_date = initial_due_date.unwrap_or_else(|| DueDate::today(clock));
        Self::new(list_id, due_date, config)
    }

    /// Returns the title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the selected list.
    #[must_use]
    pub const fn list_id(&self) -> Option<ListId> {
        self.list_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the start time, if set.
    #[must_use]
    pub const fn start_time(&self) -> Option<&StartTime> {
        self.start_time.as_ref()
    }

    /// Returns the planned duration.
    #[must_use]
    pub const fn duration(&self) -> DurationMinutes {
        self.duration
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

    /// Returns the notes as typed.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the subtask rows in display order.
    #[must_use]
    pub fn subtasks(&self) -> &[SubtaskRow] {
        &self.subtasks
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Selects the owning list.
    pub const fn set_list(&mut self, list_id: ListId) {
        self.list_id = Some(list_id);
    }

    /// Sets the due date.
    pub const fn set_due_date(&mut self, due_date: DueDate) {
        self.due_date = due_date;
    }

    /// Sets or clears the start time.
    pub fn set_start_time(&mut self, start_time: Option<StartTime>) {
        self.start_time = start_time;
    }

    /// Sets the planned duration.
    pub const fn set_duration(&mut self, duration: DurationMinutes) {
        self.duration = duration;
    }

    /// Marks the start time as fixed or flexible.
    pub const fn set_fixed(&mut self, is_fixed: bool) {
        self.is_fixed = is_fixed;
    }

    /// Flags the task as important or not.
    pub const fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    /// Sets the notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Applies raw form input to one scalar field.
    ///
    /// Edits are always accepted. Input that cannot be read falls back:
    /// duration resets to the configured default, while an unparseable list
    /// or date leaves the current value in place.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Title => self.set_title(value),
            DraftField::Notes => self.set_notes(value),
            DraftField::List => match value.parse::<ListId>() {
                Ok(list_id) => self.set_list(list_id),
                Err(err) => {
                    debug!(%err, "ignoring list selection");
                }
            },
            DraftField::DueDate => {
                self.set_due_date_from_local_input(value);
            }
            DraftField::StartTime => self.set_start_time(StartTime::from_input(value)),
            DraftField::Duration => {
                let fallback = self.config.default_duration;
                let duration = DurationMinutes::parse_input(value).unwrap_or_else(|| {
                    debug!(input = value, %fallback, "duration input fell back to default");
                    fallback
                });
                self.set_duration(duration);
            }
            DraftField::Fixed => self.set_fixed(parse_flag(value)),
            DraftField::Important => self.set_important(parse_flag(value)),
        }
    }

    /// Sets the due date from the value of a date-only input.
    ///
    /// The stored day is exactly the day typed, whatever the viewer's UTC
    /// offset. Returns `false` and keeps the current date when the input is
    /// not a `YYYY-MM-DD` date.
    pub fn set_due_date_from_local_input(&mut self, input: &str) -> bool {
        match DueDate::parse_local_input(input) {
            Ok(due_date) => {
                self.due_date = due_date;
                true
            }
            Err(err) => {
                debug!(%err, "ignoring due date input");
                false
            }
        }
    }

    /// Increases the duration by one configured step.
    pub fn step_duration_up(&mut self) {
        self.duration = self.duration.stepped_up(self.config.duration_step_minutes);
    }

    /// Decreases the duration by one configured step, never below a minute.
    pub fn step_duration_down(&mut self) {
        self.duration = self
            .duration
            .stepped_down(self.config.duration_step_minutes);
    }

    /// Returns whether a new subtask row may be added.
    ///
    /// Adding is blocked while the last row is still blank.
    #[must_use]
    pub fn can_add_subtask_row(&self) -> bool {
        self.subtasks.last().is_none_or(|row| !row.is_blank())
    }

    /// Appends a blank subtask row.
    ///
    /// Returns `false` without changing anything when the last row is
    /// still blank.
    pub fn add_subtask_row(&mut self) -> bool {
        if !self.can_add_subtask_row() {
            return false;
        }
        self.subtasks.push(SubtaskRow::blank());
        true
    }

    /// Replaces the title of the row at `index`. Out-of-range indices are
    /// ignored.
    pub fn edit_subtask_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(row) = self.subtasks.get_mut(index) {
            row.title = title.into();
        }
    }

    /// Removes the row at `index`, shifting later rows down. Out-of-range
    /// indices are ignored.
    pub fn remove_subtask_row(&mut self, index: usize) {
        if index < self.subtasks.len() {
            self.subtasks.remove(index);
        }
    }

    /// Returns whether the draft would pass validation.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Validates and normalizes the draft into a task payload.
    ///
    /// Title and notes are trimmed, blank subtasks are dropped and the rest
    /// are numbered from zero in their current order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn finalize(&self) -> Result<NewTask, TaskDomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let subtasks = self
            .subtasks
            .iter()
            .filter(|row| !row.is_blank())
            .enumerate()
            .map(|(position, row)| NewSubtask::new(position, row.title.clone()))
            .collect();

        Ok(NewTask {
            title: title.to_owned(),
            list_id: self.list_id,
            due_date: self.due_date,
            start_time: self.start_time.clone(),
            duration_minutes: self.duration,
            is_fixed: self.is_fixed,
            important: self.important,
            notes: self.notes.trim().to_owned(),
            subtasks,
        })
    }
}

/// Reads a checkbox or switch value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}

//! Domain model for task drafting.
//!
//! The domain covers the draft a creation form edits, the values it is built
//! from, and the payload it finalizes into. Persistence and presentation stay
//! outside the domain boundary.

mod config;
mod draft;
mod error;
mod ids;
mod list;
mod payload;
mod schedule;
mod task;

pub use config::DraftConfig;
pub use draft::{DraftField, SubtaskRow, TaskDraft};
pub use error::{ParseDraftFieldError, ParseListIdError, TaskDomainError};
pub use ids::{ListId, SubtaskRowId, TaskId};
pub use list::TaskList;
pub use payload::{NewSubtask, NewTask};
pub use schedule::{DueDate, DurationMinutes, StartTime};
pub use task::{StoredSubtask, StoredTask};

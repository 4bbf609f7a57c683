//! Store port receiving finalized tasks.

use crate::task::domain::{NewTask, TaskList};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store contract.
///
/// The store owns persistence and the initial completion state of tasks it
/// accepts.
pub trait TaskStore: Send + Sync {
    /// Returns the lists new tasks can be filed under, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lists cannot be read.
    fn lists(&self) -> TaskStoreResult<Vec<TaskList>>;

    /// Accepts a finalized task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Rejected`] when the store refuses the task
    /// or [`TaskStoreError::Persistence`] when it cannot record it.
    fn create(&self, task: &NewTask) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The store refused the task.
    #[error("task rejected: {0}")]
    Rejected(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! Service layer for the task creation drawer.

use crate::task::{
    domain::{DraftConfig, DueDate, NewTask, TaskDraft, TaskList},
    ports::{DrawerHost, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for opening a task drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenDrawerRequest {
    initial_due_date: Option<DueDate>,
    config: DraftConfig,
}

impl OpenDrawerRequest {
    /// Creates a request using today's date and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the draft with a due date instead of today.
    #[must_use]
    pub const fn with_initial_due_date(mut self, due_date: DueDate) -> Self {
        self.initial_due_date = Some(due_date);
        self
    }

    /// Uses a non-default draft configuration.
    #[must_use]
    pub const fn with_config(mut self, config: DraftConfig) -> Self {
        self.config = config;
        self
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The task was handed to the store and the drawer closed.
    Submitted(NewTask),
    /// The title is blank; nothing was emitted and the drawer stays open.
    TitleMissing,
}

/// Service-level errors for drawer operations.
#[derive(Debug, Error)]
pub enum DrawerError {
    /// The drawer was already cancelled or submitted.
    #[error("task drawer is closed")]
    Closed,
    /// The task store failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for drawer operations.
pub type DrawerResult<T> = Result<T, DrawerError>;

/// Opens task drawers against a store and host view.
#[derive(Clone)]
pub struct TaskDrawerService<S, H, C>
where
    S: TaskStore,
    H: DrawerHost,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    host: Arc<H>,
    clock: Arc<C>,
}

impl<S, H, C> TaskDrawerService<S, H, C>
where
    S: TaskStore,
    H: DrawerHost,
    C: Clock + Send + Sync,
{
    /// Creates a new drawer service.
    #[must_use]
    pub const fn new(store: Arc<S>, host: Arc<H>, clock: Arc<C>) -> Self {
        Self { store, host, clock }
    }

    /// Opens a drawer with a fresh draft.
    ///
    /// The draft is filed under the store's first list and due on the
    /// requested day, or today.
    ///
    /// # Errors
    ///
    /// Returns [`DrawerError::Store`] when the lists cannot be read.
    pub fn open(&self, request: OpenDrawerRequest) -> DrawerResult<TaskDrawer<S, H>> {
        let lists = self.store.lists()?;
        let draft = TaskDraft::seeded(
            &lists,
            request.initial_due_date,
            request.config,
            &*self.clock,
        );
        debug!(lists = lists.len(), due_date = %draft.due_date(), "task drawer opened");
        Ok(TaskDrawer {
            store: Arc::clone(&self.store),
            host: Arc::clone(&self.host),
            lists,
            draft: Some(draft),
        })
    }
}

/// An open task creation form owning one draft.
///
/// The draft lives until the drawer is cancelled or a submission succeeds.
pub struct TaskDrawer<S, H>
where
    S: TaskStore,
    H: DrawerHost,
{
    store: Arc<S>,
    host: Arc<H>,
    lists: Vec<TaskList>,
    draft: Option<TaskDraft>,
}

impl<S, H> TaskDrawer<S, H>
where
    S: TaskStore,
    H: DrawerHost,
{
    /// Returns the lists offered in the list picker.
    #[must_use]
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    /// Returns whether the drawer still holds a draft.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Returns the current draft.
    ///
    /// # Errors
    ///
    /// Returns [`DrawerError::Closed`] once the drawer has closed.
    pub fn draft(&self) -> DrawerResult<&TaskDraft> {
        match &self.draft {
            Some(draft) => Ok(draft),
            None => Err(DrawerError::Closed),
        }
    }

    /// Returns the current draft for editing.
    ///
    /// # Errors
    ///
    /// Returns [`DrawerError::Closed`] once the drawer has closed.
    pub fn draft_mut(&mut self) -> DrawerResult<&mut TaskDraft> {
        match &mut self.draft {
            Some(draft) => Ok(draft),
            None => Err(DrawerError::Closed),
        }
    }

    /// Discards the draft and dismisses the drawer.
    ///
    /// # Errors
    ///
    /// Returns [`DrawerError::Closed`] when the drawer was already closed.
    pub fn cancel(&mut self) -> DrawerResult<()> {
        if self.draft.take().is_none() {
            return Err(DrawerError::Closed);
        }
        debug!("task drawer cancelled");
        self.host.close();
        Ok(())
    }

    /// Submits the draft to the task store.
    ///
    /// A blank title refuses the submission silently and keeps the drawer
    /// open. Otherwise the finalized task is handed to the store exactly
    /// once, the draft is discarded and the host is told to close.
    ///
    /// # Errors
    ///
    /// Returns [`DrawerError::Closed`] when the drawer was already closed,
    /// or [`DrawerError::Store`] when the store does not accept the task.
    /// The draft is kept on store failure so the user can retry.
    pub fn submit(&mut self) -> DrawerResult<SubmitOutcome> {
        let draft = self.draft()?;
        let Ok(task) = draft.finalize() else {
            debug!("submit refused: task title is empty");
            return Ok(SubmitOutcome::TitleMissing);
        };

        if let Err(err) = self.store.create(&task) {
            warn!(%err, title = %task.title, "task store did not accept submission");
            return Err(err.into());
        }

        info!(
            title = %task.title,
            subtasks = task.subtasks.len(),
            due_date = %task.due_date,
            "task submitted"
        );
        self.draft = None;
        self.host.close();
        Ok(SubmitOutcome::Submitted(task))
    }
}

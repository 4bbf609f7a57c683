//! In-memory task store.

use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, StoredTask, TaskList},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore<C = DefaultClock> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    lists: Vec<TaskList>,
    tasks: Vec<StoredTask>,
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamping records with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Replaces the lists offered to new tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn set_lists(&self, lists: impl IntoIterator<Item = TaskList>) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state.lists = lists.into_iter().collect();
        Ok(())
    }

    /// Returns every accepted task in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn tasks(&self) -> TaskStoreResult<Vec<StoredTask>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.clone())
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn lists(&self) -> TaskStoreResult<Vec<TaskList>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.lists.clone())
    }

    fn create(&self, task: &NewTask) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if let Some(list_id) = task.list_id
            && !state.lists.is_empty()
            && !state.lists.iter().any(|list| list.id == list_id)
        {
            return Err(TaskStoreError::Rejected(format!("unknown list {list_id}")));
        }
        state
            .tasks
            .push(StoredTask::from_new(task.clone(), &*self.clock));
        Ok(())
    }
}

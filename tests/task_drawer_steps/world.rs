//! Shared world state for task drawer BDD scenarios.

use std::sync::Arc;

use daybook::task::{
    adapters::memory::{InMemoryTaskStore, RecordingDrawerHost},
    services::{DrawerResult, SubmitOutcome, TaskDrawer},
};
use rstest::fixture;

/// Drawer type used by the BDD world.
pub type TestDrawer = TaskDrawer<InMemoryTaskStore, RecordingDrawerHost>;

/// Scenario world for task drawer behaviour tests.
pub struct DrawerWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub host: Arc<RecordingDrawerHost>,
    pub drawer: Option<TestDrawer>,
    pub last_submit_result: Option<DrawerResult<SubmitOutcome>>,
}

impl DrawerWorld {
    /// Creates a world with an empty store and no open drawer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryTaskStore::new()),
            host: Arc::new(RecordingDrawerHost::new()),
            drawer: None,
            last_submit_result: None,
        }
    }

    /// Returns the open drawer.
    pub fn drawer_mut(&mut self) -> Result<&mut TestDrawer, eyre::Report> {
        self.drawer
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no drawer opened in scenario world"))
    }

    /// Returns the outcome of the last submission.
    pub fn submit_outcome(&self) -> Result<&SubmitOutcome, eyre::Report> {
        let result = self
            .last_submit_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing submit result in scenario world"))?;
        result
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected submission failure: {err}"))
    }
}

impl Default for DrawerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DrawerWorld {
    DrawerWorld::default()
}

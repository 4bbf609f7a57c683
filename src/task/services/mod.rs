//! Application services for task drafting.

mod drawer;

pub use drawer::{
    DrawerError, DrawerResult, OpenDrawerRequest, SubmitOutcome, TaskDrawer, TaskDrawerService,
};

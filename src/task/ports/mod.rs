//! Port contracts for task drafting.
//!
//! Ports define infrastructure-agnostic interfaces the drawer service talks
//! to: the task store that receives finalized tasks and the host view that
//! owns the drawer.

pub mod host;
pub mod store;

pub use host::DrawerHost;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};

//! Daybook: personal task and basket planner.
//!
//! This crate provides the task creation core of the planner: building a
//! task draft from form input, validating it, and handing the finalized task
//! to a task store.
//!
//! # Architecture
//!
//! Daybook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task draft building, validation and submission

pub mod task;

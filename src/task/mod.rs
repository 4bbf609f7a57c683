//! Task drafting for the daybook planner.
//!
//! This module implements the task creation drawer: a draft that accumulates
//! form edits, is validated and normalized on submit, and is handed to an
//! external task store before the drawer closes. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

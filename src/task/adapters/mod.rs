//! Adapter implementations of the task drafting ports.

pub mod memory;

//! Step definitions for task drawer scenarios.

pub mod world;

mod given;
mod then;
mod when;

//! Step definitions for cascading delete scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;

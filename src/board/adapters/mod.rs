//! Adapter implementations of the board store ports.

pub mod memory;
pub mod postgres;

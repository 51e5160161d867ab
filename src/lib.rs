//! Tracker: users, projects and tasks over interchangeable storage.
//!
//! A user owns projects and tasks; a task may be filed under one of its
//! owner's projects. Deleting a user or project removes everything it owns.
//! The same consistency rules run over an in-memory store, a hand-written
//! SQL store and a Diesel ORM store.
//!
//! # Architecture
//!
//! - **Domain**: entities, identifiers and task status
//! - **Ports**: one store trait per entity, grouped by a storage backend
//! - **Adapters**: in-memory and `PostgreSQL` implementations of the ports
//! - **Services**: the consistency core shared by every backend
//!
//! # Modules
//!
//! - [`board`]: the tracker itself
//! - [`config`]: environment configuration and backend selection

pub mod board;
pub mod config;

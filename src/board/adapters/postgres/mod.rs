//! `PostgreSQL` adapters for board persistence.
//!
//! Two interchangeable strategies share one schema and one set of row
//! models: [`statement`] issues hand-written SQL, [`orm`] uses the Diesel
//! query builder with associations.

mod models;
mod pool;
mod schema;

pub mod orm;
pub mod statement;

pub use orm::OrmBackend;
pub use pool::{BlockingPool, BoardPgPool};
pub use statement::StatementBackend;

/// Schema applied by tests and deployment tooling.
pub const CREATE_TABLES_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tracker_tables/up.sql");

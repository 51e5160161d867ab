//! Runtime configuration read from the process environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `TRACKER_DATABASE_URL` | falls back to `DATABASE_URL` | `PostgreSQL` connection string |
//! | `TRACKER_DB_MAX_CONNECTIONS` | `10` | pool size |
//! | `TRACKER_BACKEND` | `statement` | `statement` or `orm` |

use crate::board::{
    adapters::postgres::{BoardPgPool, OrmBackend, StatementBackend},
    ports::StorageBackend,
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::{fmt, str::FromStr, sync::Arc};
use thiserror::Error;

const DATABASE_URL_VAR: &str = "TRACKER_DATABASE_URL";
const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";
const MAX_CONNECTIONS_VAR: &str = "TRACKER_DB_MAX_CONNECTIONS";
const BACKEND_VAR: &str = "TRACKER_BACKEND";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while loading configuration or opening a backend.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither database URL variable is set.
    #[error("TRACKER_DATABASE_URL or DATABASE_URL must be set")]
    MissingDatabaseUrl,

    /// The pool size is not a positive integer.
    #[error("TRACKER_DB_MAX_CONNECTIONS must be a positive integer, got {0:?}")]
    InvalidMaxConnections(String),

    /// The backend name is not recognised.
    #[error("unknown storage backend {0:?}, expected `statement` or `orm`")]
    UnknownBackend(String),

    /// The connection pool could not be built.
    #[error("failed to build connection pool")]
    Pool(#[from] PoolError),
}

/// Storage strategy selected at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Hand-written SQL statements.
    #[default]
    Statement,
    /// Diesel query builder with associations.
    Orm,
}

impl BackendKind {
    /// Returns the configuration name of the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::Orm => "orm",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "statement" | "sql" => Ok(Self::Statement),
            "orm" | "diesel" => Ok(Self::Orm),
            _ => Err(ConfigError::UnknownBackend(value.to_owned())),
        }
    }
}

/// Settings needed to open a `PostgreSQL`-backed tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    database_url: String,
    max_connections: u32,
    backend: BackendKind,
}

impl TrackerConfig {
    /// Creates a configuration with default pool size and backend.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            backend: BackendKind::default(),
        }
    }

    /// Sets the pool size.
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets the storage strategy.
    #[must_use]
    pub const fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a value
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .or_else(|| lookup(FALLBACK_DATABASE_URL_VAR))
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let max_connections = match lookup(MAX_CONNECTIONS_VAR) {
            Some(raw) => parse_max_connections(&raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let backend = match lookup(BACKEND_VAR) {
            Some(raw) => raw.parse()?,
            None => BackendKind::default(),
        };

        Ok(Self {
            database_url,
            max_connections,
            backend,
        })
    }

    /// Returns the connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the pool size.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Returns the selected storage strategy.
    #[must_use]
    pub const fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Builds a connection pool for the configured database.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot establish its
    /// initial connections.
    pub fn build_pool(&self) -> Result<BoardPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database_url);
        let pool = Pool::builder()
            .max_size(self.max_connections)
            .build(manager)?;
        Ok(pool)
    }

    /// Opens the configured storage backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot be built.
    pub fn open_backend(&self) -> Result<Arc<dyn StorageBackend>, ConfigError> {
        let pool = self.build_pool()?;
        tracing::info!(
            backend = %self.backend,
            max_connections = self.max_connections,
            "opening storage backend"
        );
        let backend: Arc<dyn StorageBackend> = match self.backend {
            BackendKind::Statement => Arc::new(StatementBackend::new(pool)),
            BackendKind::Orm => Arc::new(OrmBackend::new(pool)),
        };
        Ok(backend)
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::InvalidMaxConnections(raw.to_owned()))
}

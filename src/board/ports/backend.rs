//! Grouping of the three entity stores behind one storage strategy.

use super::{ProjectStore, TaskStore, UserStore};

/// A storage strategy providing one store per entity.
///
/// Services hold a backend rather than three loose stores so that every
/// operation reads and writes through the same strategy. The trait is object
/// safe; `Arc<dyn StorageBackend>` is what runtime configuration hands out.
pub trait StorageBackend: Send + Sync {
    /// Short label used in log records.
    fn label(&self) -> &'static str;

    /// Returns the user store.
    fn users(&self) -> &dyn UserStore;

    /// Returns the project store.
    fn projects(&self) -> &dyn ProjectStore;

    /// Returns the task store.
    fn tasks(&self) -> &dyn TaskStore;
}

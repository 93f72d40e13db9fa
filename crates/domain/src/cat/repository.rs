//! Persistence contract for cats.

use async_trait::async_trait;

use crate::error::StorageError;

use super::{Cat, CatId};

/// Storage-agnostic access to cats.
///
/// A missing cat is not an error at this layer: `find_by_id` returns `None`
/// and `delete` of an unknown id is a no-op. `StorageError` is reserved for
/// backend faults.
#[async_trait]
pub trait CatRepository: Send + Sync {
    /// Inserts or replaces the cat with the same id.
    async fn save(&self, cat: &Cat) -> Result<(), StorageError>;

    async fn find_by_id(&self, id: &CatId) -> Result<Option<Cat>, StorageError>;

    /// Returns every stored cat. Ordering is backend specific.
    async fn find_all(&self) -> Result<Vec<Cat>, StorageError>;

    async fn delete(&self, id: &CatId) -> Result<(), StorageError>;
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{Cat, CatId, CatRepository, StorageError};
use tokio::sync::RwLock;

#[derive(Default)]
struct Cats {
    by_id: HashMap<CatId, Cat>,
    order: Vec<CatId>,
}

/// In-memory cat repository.
///
/// Cats are kept in insertion order; saving an existing cat replaces it in
/// place without moving it. Pending domain events are not stored. Clones
/// share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryCatRepository {
    cats: Arc<RwLock<Cats>>,
}

impl InMemoryCatRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored cats.
    pub async fn count(&self) -> usize {
        self.cats.read().await.order.len()
    }

    /// Removes every stored cat.
    pub async fn clear(&self) {
        let mut cats = self.cats.write().await;
        cats.by_id.clear();
        cats.order.clear();
    }
}

#[async_trait]
impl CatRepository for InMemoryCatRepository {
    async fn save(&self, cat: &Cat) -> Result<(), StorageError> {
        let mut cats = self.cats.write().await;
        if cats.by_id.insert(cat.id().clone(), cat.without_pending_events()).is_none() {
            cats.order.push(cat.id().clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CatId) -> Result<Option<Cat>, StorageError> {
        Ok(self.cats.read().await.by_id.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Cat>, StorageError> {
        let cats = self.cats.read().await;
        Ok(cats
            .order
            .iter()
            .filter_map(|id| cats.by_id.get(id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &CatId) -> Result<(), StorageError> {
        let mut cats = self.cats.write().await;
        if cats.by_id.remove(id).is_some() {
            cats.order.retain(|stored| stored != id);
        }
        Ok(())
    }
}

//! Test doubles for the cat use cases.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::aggregate::DomainEvent;
use crate::error::StorageError;
use crate::event_bus::EventBus;

use super::{Cat, CatId, CatRepository};

#[derive(Default)]
pub(crate) struct FakeCatRepository {
    cats: RwLock<Vec<Cat>>,
}

#[async_trait]
impl CatRepository for FakeCatRepository {
    async fn save(&self, cat: &Cat) -> Result<(), StorageError> {
        let mut cats = self.cats.write().await;
        match cats.iter_mut().find(|stored| stored.id() == cat.id()) {
            Some(stored) => *stored = cat.without_pending_events(),
            None => cats.push(cat.without_pending_events()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CatId) -> Result<Option<Cat>, StorageError> {
        let cats = self.cats.read().await;
        Ok(cats.iter().find(|cat| cat.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Cat>, StorageError> {
        Ok(self.cats.read().await.clone())
    }

    async fn delete(&self, id: &CatId) -> Result<(), StorageError> {
        self.cats.write().await.retain(|cat| cat.id() != id);
        Ok(())
    }
}

pub(crate) struct FailingCatRepository;

#[async_trait]
impl CatRepository for FailingCatRepository {
    async fn save(&self, _cat: &Cat) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    async fn find_by_id(&self, _id: &CatId) -> Result<Option<Cat>, StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Cat>, StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    async fn delete(&self, _id: &CatId) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }
}

#[derive(Default)]
pub(crate) struct RecordingEventBus {
    published: RwLock<Vec<DomainEvent>>,
}

impl RecordingEventBus {
    pub(crate) async fn names(&self) -> Vec<String> {
        self.published
            .read()
            .await
            .iter()
            .map(|event| event.event_name().to_string())
            .collect()
    }
}

#[async_trait]
impl EventBus for RecordingEventBus {
    async fn publish(&self, events: &[DomainEvent]) {
        self.published.write().await.extend_from_slice(events);
    }
}

//! Cat service bundling the cat use cases over one repository and event bus.

use std::sync::Arc;

use common::UseCase;

use crate::error::StorageError;
use crate::event_bus::EventBus;

use super::{
    Cat, CatId, CatRepository, CatUpdate, CatUseCaseResult, CreateCat, CreateCatRequest,
    DeleteCat, GetAllCats, GetCatById, UpdateCat, UpdateCatRequest,
};

/// Service for managing cats.
///
/// Wires every cat use case to the same repository and event bus and exposes
/// one method per operation.
pub struct CatService<R: CatRepository> {
    create: CreateCat<R>,
    get_all: GetAllCats<R>,
    get_by_id: GetCatById<R>,
    update: UpdateCat<R>,
    delete: DeleteCat<R>,
}

impl<R: CatRepository> CatService<R> {
    /// Creates a new cat service.
    pub fn new(repository: Arc<R>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            create: CreateCat::new(repository.clone(), event_bus.clone()),
            get_all: GetAllCats::new(repository.clone()),
            get_by_id: GetCatById::new(repository.clone()),
            update: UpdateCat::new(repository.clone(), event_bus.clone()),
            delete: DeleteCat::new(repository, event_bus),
        }
    }

    pub async fn create_cat(&self, request: CreateCatRequest) -> CatUseCaseResult<CatId> {
        self.create.execute(request).await
    }

    pub async fn list_cats(&self) -> Result<Vec<Cat>, StorageError> {
        self.get_all.execute(()).await
    }

    /// Loads a cat by ID.
    ///
    /// Returns None if the cat doesn't exist.
    pub async fn get_cat(&self, id: CatId) -> Result<Option<Cat>, StorageError> {
        self.get_by_id.execute(id).await
    }

    pub async fn update_cat(&self, id: CatId, changes: CatUpdate) -> CatUseCaseResult<()> {
        self.update
            .execute(UpdateCatRequest::new(id, changes))
            .await
    }

    pub async fn delete_cat(&self, id: CatId) -> CatUseCaseResult<()> {
        self.delete.execute(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::testing::{FakeCatRepository, RecordingEventBus};
    use crate::cat::CatUseCaseError;

    fn service() -> CatService<FakeCatRepository> {
        CatService::new(
            Arc::new(FakeCatRepository::default()),
            Arc::new(RecordingEventBus::default()),
        )
    }

    #[tokio::test]
    async fn full_cat_lifecycle() {
        let service = service();

        let id = service
            .create_cat(CreateCatRequest {
                name: "Mia".to_string(),
                age: 2,
                breed: "Tabby".to_string(),
            })
            .await
            .unwrap()
            .right()
            .unwrap();

        let cat = service.get_cat(id.clone()).await.unwrap().unwrap();
        assert_eq!((cat.name(), cat.age(), cat.breed()), ("Mia", 2, "Tabby"));

        let updated = service
            .update_cat(id.clone(), CatUpdate::default().age(3))
            .await
            .unwrap();
        assert!(updated.is_right());

        let cat = service.get_cat(id.clone()).await.unwrap().unwrap();
        assert_eq!((cat.name(), cat.age(), cat.breed()), ("Mia", 3, "Tabby"));

        assert!(service.delete_cat(id.clone()).await.unwrap().is_right());
        assert!(service.get_cat(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let service = service();
        let id = service
            .create_cat(CreateCatRequest {
                name: "Mia".to_string(),
                age: 2,
                breed: "Tabby".to_string(),
            })
            .await
            .unwrap()
            .right()
            .unwrap();

        assert!(service.delete_cat(id.clone()).await.unwrap().is_right());
        let second = service.delete_cat(id).await.unwrap();

        assert!(matches!(
            second.left(),
            Some(CatUseCaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_cats_starts_empty() {
        assert!(service().list_cats().await.unwrap().is_empty());
    }
}

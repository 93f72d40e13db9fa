//! Cat application use cases.
//!
//! Each use case is a single operation. Expected failures (validation, not
//! found) come back as `Left` values; repository faults propagate as
//! `Err(StorageError)`.

use std::sync::Arc;

use async_trait::async_trait;
use common::{Either, Outcome, UseCase, left, right};
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateRoot;
use crate::error::StorageError;
use crate::event_bus::EventBus;

use super::{
    Cat, CatId, CatNotFoundError, CatProps, CatRepository, CatUpdate, CatUseCaseError,
    ValidationError,
};

/// Return type of the cat write use cases.
pub type CatUseCaseResult<T> = Result<Either<CatUseCaseError, T>, StorageError>;

/// Input of [`CreateCat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCatRequest {
    pub name: String,
    pub age: i64,
    pub breed: String,
}

impl From<CreateCatRequest> for CatProps {
    fn from(req: CreateCatRequest) -> Self {
        CatProps::new(req.name, req.age, req.breed)
    }
}

/// Input of [`UpdateCat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCatRequest {
    pub id: CatId,
    pub changes: CatUpdate,
}

impl UpdateCatRequest {
    pub fn new(id: CatId, changes: CatUpdate) -> Self {
        Self { id, changes }
    }
}

fn record_outcome<T>(use_case: &'static str, result: &CatUseCaseResult<T>) {
    let outcome = match result {
        Ok(Either::Right(_)) => "success",
        Ok(Either::Left(CatUseCaseError::Validation(_))) => "validation_error",
        Ok(Either::Left(CatUseCaseError::NotFound(_))) => "not_found",
        Err(_) => "storage_error",
    };
    metrics::counter!("cat_use_case_total", "use_case" => use_case, "outcome" => outcome)
        .increment(1);
}

/// Validates and stores a new cat, returning its id.
pub struct CreateCat<R: CatRepository> {
    repository: Arc<R>,
    event_bus: Arc<dyn EventBus>,
}

impl<R: CatRepository> CreateCat<R> {
    pub fn new(repository: Arc<R>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    async fn run(&self, request: CreateCatRequest) -> CatUseCaseResult<CatId> {
        let mut cat = match Cat::create(request.into()) {
            Outcome::Ok(cat) => cat,
            Outcome::Fail(message) => {
                tracing::debug!(%message, "cat rejected");
                return Ok(left(ValidationError::new(message).into()));
            }
        };

        let events = cat.pull_domain_events();
        self.repository.save(&cat).await?;
        self.event_bus.publish(&events).await;

        tracing::info!(cat_id = %cat.id(), "cat created");
        Ok(right(cat.id().clone()))
    }
}

#[async_trait]
impl<R: CatRepository> UseCase<CreateCatRequest> for CreateCat<R> {
    type Response = CatUseCaseResult<CatId>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, request: CreateCatRequest) -> Self::Response {
        let result = self.run(request).await;
        record_outcome("create", &result);
        result
    }
}

/// Lists every cat.
pub struct GetAllCats<R: CatRepository> {
    repository: Arc<R>,
}

impl<R: CatRepository> GetAllCats<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CatRepository> UseCase<()> for GetAllCats<R> {
    type Response = Result<Vec<Cat>, StorageError>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, _request: ()) -> Self::Response {
        self.repository.find_all().await
    }
}

/// Looks up a single cat. A missing cat is `Ok(None)`.
pub struct GetCatById<R: CatRepository> {
    repository: Arc<R>,
}

impl<R: CatRepository> GetCatById<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CatRepository> UseCase<CatId> for GetCatById<R> {
    type Response = Result<Option<Cat>, StorageError>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, request: CatId) -> Self::Response {
        self.repository.find_by_id(&request).await
    }
}

/// Applies a partial update to an existing cat.
pub struct UpdateCat<R: CatRepository> {
    repository: Arc<R>,
    event_bus: Arc<dyn EventBus>,
}

impl<R: CatRepository> UpdateCat<R> {
    pub fn new(repository: Arc<R>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    async fn run(&self, request: UpdateCatRequest) -> CatUseCaseResult<()> {
        let Some(existing) = self.repository.find_by_id(&request.id).await? else {
            return Ok(left(CatNotFoundError { id: request.id }.into()));
        };

        let mut updated = match existing.update(&request.changes) {
            Outcome::Ok(cat) => cat,
            Outcome::Fail(message) => {
                tracing::debug!(cat_id = %request.id, %message, "cat update rejected");
                return Ok(left(ValidationError::new(message).into()));
            }
        };

        let events = updated.pull_domain_events();
        self.repository.save(&updated).await?;
        self.event_bus.publish(&events).await;

        tracing::info!(cat_id = %request.id, "cat updated");
        Ok(right(()))
    }
}

#[async_trait]
impl<R: CatRepository> UseCase<UpdateCatRequest> for UpdateCat<R> {
    type Response = CatUseCaseResult<()>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, request: UpdateCatRequest) -> Self::Response {
        let result = self.run(request).await;
        record_outcome("update", &result);
        result
    }
}

/// Removes an existing cat.
pub struct DeleteCat<R: CatRepository> {
    repository: Arc<R>,
    event_bus: Arc<dyn EventBus>,
}

impl<R: CatRepository> DeleteCat<R> {
    pub fn new(repository: Arc<R>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    async fn run(&self, id: CatId) -> CatUseCaseResult<()> {
        let Some(stored) = self.repository.find_by_id(&id).await? else {
            return Ok(left(CatNotFoundError { id }.into()));
        };

        // Only the deletion is published, whatever the repository handed back.
        let mut cat = stored.without_pending_events();
        cat.mark_deleted();
        let events = cat.pull_domain_events();
        self.repository.delete(&id).await?;
        self.event_bus.publish(&events).await;

        tracing::info!(cat_id = %id, "cat deleted");
        Ok(right(()))
    }
}

#[async_trait]
impl<R: CatRepository> UseCase<CatId> for DeleteCat<R> {
    type Response = CatUseCaseResult<()>;

    #[tracing::instrument(skip(self))]
    async fn execute(&self, request: CatId) -> Self::Response {
        let result = self.run(request).await;
        record_outcome("delete", &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::testing::{FailingCatRepository, FakeCatRepository, RecordingEventBus};
    use crate::cat::CatEvent;

    fn create_request(name: &str, age: i64) -> CreateCatRequest {
        CreateCatRequest {
            name: name.to_string(),
            age,
            breed: "Tabby".to_string(),
        }
    }

    #[tokio::test]
    async fn create_saves_and_publishes() {
        let repository = Arc::new(FakeCatRepository::default());
        let bus = Arc::new(RecordingEventBus::default());
        let use_case = CreateCat::new(repository.clone(), bus.clone());

        let id = use_case
            .execute(create_request("Mia", 2))
            .await
            .unwrap()
            .right()
            .unwrap();

        let stored = repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Mia");
        assert!(stored.domain_events().is_empty());
        assert_eq!(bus.names().await, vec![CatEvent::CREATED]);
    }

    #[tokio::test]
    async fn create_returns_validation_error_without_saving() {
        let repository = Arc::new(FakeCatRepository::default());
        let bus = Arc::new(RecordingEventBus::default());
        let use_case = CreateCat::new(repository.clone(), bus.clone());

        let err = use_case
            .execute(create_request("M", 2))
            .await
            .unwrap()
            .left()
            .unwrap();

        assert!(matches!(err, CatUseCaseError::Validation(_)));
        assert!(repository.find_all().await.unwrap().is_empty());
        assert!(bus.names().await.is_empty());
    }

    #[tokio::test]
    async fn create_propagates_storage_fault() {
        let bus = Arc::new(RecordingEventBus::default());
        let use_case = CreateCat::new(Arc::new(FailingCatRepository), bus.clone());

        let result = use_case.execute(create_request("Mia", 2)).await;

        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(bus.names().await.is_empty());
    }

    #[tokio::test]
    async fn update_unknown_cat_is_not_found() {
        let repository = Arc::new(FakeCatRepository::default());
        let bus = Arc::new(RecordingEventBus::default());
        let use_case = UpdateCat::new(repository.clone(), bus.clone());
        let id = CatId::new();

        let err = use_case
            .execute(UpdateCatRequest::new(id.clone(), CatUpdate::default().age(3)))
            .await
            .unwrap()
            .left()
            .unwrap();

        assert_eq!(err, CatUseCaseError::NotFound(CatNotFoundError { id }));
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_invalid_change_keeps_stored_cat() {
        let repository = Arc::new(FakeCatRepository::default());
        let bus = Arc::new(RecordingEventBus::default());
        let cat = Cat::create(CatProps::new("Mia", 2, "Tabby")).into_value();
        repository.save(&cat).await.unwrap();

        let use_case = UpdateCat::new(repository.clone(), bus.clone());
        let err = use_case
            .execute(UpdateCatRequest::new(
                cat.id().clone(),
                CatUpdate::default().age(-1),
            ))
            .await
            .unwrap()
            .left()
            .unwrap();

        assert_eq!(err.to_string(), "age must be a non-negative number");
        let stored = repository.find_by_id(cat.id()).await.unwrap().unwrap();
        assert_eq!(stored.age(), 2);
        assert!(bus.names().await.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_cat_is_not_found() {
        let repository = Arc::new(FakeCatRepository::default());
        let cat = Cat::create(CatProps::new("Mia", 2, "Tabby")).into_value();
        repository.save(&cat).await.unwrap();

        let use_case = DeleteCat::new(repository.clone(), Arc::new(RecordingEventBus::default()));
        let result = use_case.execute(CatId::new()).await.unwrap();

        assert!(result.is_left());
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_and_publishes() {
        let repository = Arc::new(FakeCatRepository::default());
        let bus = Arc::new(RecordingEventBus::default());
        let cat = Cat::create(CatProps::new("Mia", 2, "Tabby")).into_value();
        repository.save(&cat).await.unwrap();

        let use_case = DeleteCat::new(repository.clone(), bus.clone());
        assert!(use_case.execute(cat.id().clone()).await.unwrap().is_right());

        assert!(repository.find_by_id(cat.id()).await.unwrap().is_none());
        assert_eq!(bus.names().await, vec![CatEvent::DELETED]);
    }

    /// Hands back its one cat exactly as built, pending events included.
    struct UndrainedCatRepository(Cat);

    #[async_trait]
    impl CatRepository for UndrainedCatRepository {
        async fn save(&self, _cat: &Cat) -> Result<(), StorageError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &CatId) -> Result<Option<Cat>, StorageError> {
            Ok((self.0.id() == id).then(|| self.0.clone()))
        }

        async fn find_all(&self) -> Result<Vec<Cat>, StorageError> {
            Ok(vec![self.0.clone()])
        }

        async fn delete(&self, _id: &CatId) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn delete_publishes_only_the_deletion() {
        let cat = Cat::create(CatProps::new("Mia", 2, "Tabby")).into_value();
        let id = cat.id().clone();
        let bus = Arc::new(RecordingEventBus::default());
        let use_case = DeleteCat::new(Arc::new(UndrainedCatRepository(cat)), bus.clone());

        assert!(use_case.execute(id).await.unwrap().is_right());

        assert_eq!(bus.names().await, vec![CatEvent::DELETED]);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown() {
        let use_case = GetCatById::new(Arc::new(FakeCatRepository::default()));
        assert!(use_case.execute(CatId::new()).await.unwrap().is_none());
    }
}

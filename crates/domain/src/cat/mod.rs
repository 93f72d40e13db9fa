//! Cat aggregate, its repository contract and its use cases.

mod aggregate;
mod events;
mod mapper;
mod repository;
mod service;
#[cfg(test)]
mod testing;
mod use_cases;
mod value_objects;

pub use aggregate::Cat;
pub use events::{CatCreatedData, CatDeletedData, CatEvent, CatUpdatedData};
pub use mapper::{CatDto, CatMapper};
pub use repository::CatRepository;
pub use service::CatService;
pub use use_cases::{
    CatUseCaseResult, CreateCat, CreateCatRequest, DeleteCat, GetAllCats, GetCatById, UpdateCat,
    UpdateCatRequest,
};
pub use value_objects::{CatId, CatProps, CatUpdate};

use common::UseCaseError;
use thiserror::Error;

/// The requested cat does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cat not found")]
pub struct CatNotFoundError {
    pub id: CatId,
}

impl UseCaseError for CatNotFoundError {
    fn name(&self) -> &'static str {
        "CatNotFoundError"
    }
}

/// Input or invariant violation reported by the cat aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl UseCaseError for ValidationError {
    fn name(&self) -> &'static str {
        "ValidationError"
    }
}

/// Expected failures of the cat use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatUseCaseError {
    #[error(transparent)]
    NotFound(#[from] CatNotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl UseCaseError for CatUseCaseError {
    fn name(&self) -> &'static str {
        match self {
            CatUseCaseError::NotFound(err) => err.name(),
            CatUseCaseError::Validation(err) => err.name(),
        }
    }
}

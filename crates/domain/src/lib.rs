//! Domain layer for the cat service.
//!
//! This crate provides the core domain abstractions including:
//! - Identifier / UniqueEntityId typed identities
//! - ValueObject and Entity base types
//! - AggregateRoot trait and DomainEvent records
//! - EventBus and DomainEventSubscriber contracts
//! - Cat aggregate, repository contract, use cases and DTO mapper

pub mod aggregate;
pub mod cat;
pub mod entity;
pub mod error;
pub mod event_bus;
pub mod identifier;
pub mod value_object;

pub use aggregate::{AggregateRoot, DomainEvent, DomainEvents};
pub use cat::{
    Cat, CatDto, CatEvent, CatId, CatMapper, CatNotFoundError, CatProps, CatRepository,
    CatService, CatUpdate, CatUseCaseError, CatUseCaseResult, CreateCat, CreateCatRequest,
    DeleteCat, GetAllCats, GetCatById, UpdateCat, UpdateCatRequest, ValidationError,
};
pub use entity::Entity;
pub use error::{InvalidIdentifier, StorageError};
pub use event_bus::{DomainEventSubscriber, EventBus, SubscriberError};
pub use identifier::{Identifier, UniqueEntityId};
pub use value_object::ValueObject;

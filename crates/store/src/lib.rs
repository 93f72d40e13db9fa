//! In-memory adapters for the cat domain.
//!
//! - [`InMemoryCatRepository`] implements [`domain::CatRepository`]
//! - [`InMemoryEventBus`] implements [`domain::EventBus`]

pub mod event_bus;
pub mod memory;

pub use event_bus::InMemoryEventBus;
pub use memory::InMemoryCatRepository;

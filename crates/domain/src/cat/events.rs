//! Cat domain events.

use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{CatId, CatProps, CatUpdate};

/// Events that can occur on a cat aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CatEvent {
    /// Cat was registered.
    CatCreated(CatCreatedData),

    /// One or more cat properties changed.
    CatUpdated(CatUpdatedData),

    /// Cat was removed.
    CatDeleted(CatDeletedData),
}

impl CatEvent {
    pub const CREATED: &'static str = "cat.created";
    pub const UPDATED: &'static str = "cat.updated";
    pub const DELETED: &'static str = "cat.deleted";

    /// Returns the routing name of the event.
    pub fn event_name(&self) -> &'static str {
        match self {
            CatEvent::CatCreated(_) => Self::CREATED,
            CatEvent::CatUpdated(_) => Self::UPDATED,
            CatEvent::CatDeleted(_) => Self::DELETED,
        }
    }

    /// Wraps the event for publication.
    pub fn into_domain_event(self, cat_id: &CatId) -> DomainEvent {
        let name = self.event_name();
        let payload = match self {
            CatEvent::CatCreated(data) => serde_json::json!(data),
            CatEvent::CatUpdated(data) => serde_json::json!(data),
            CatEvent::CatDeleted(data) => serde_json::json!(data),
        };
        DomainEvent::new(name, cat_id).with_payload(payload)
    }

    /// Reads a cat event back out of a published domain event.
    pub fn from_domain_event(event: &DomainEvent) -> Option<Self> {
        let payload = event.payload().clone();
        match event.event_name() {
            Self::CREATED => serde_json::from_value(payload).ok().map(CatEvent::CatCreated),
            Self::UPDATED => serde_json::from_value(payload).ok().map(CatEvent::CatUpdated),
            Self::DELETED => serde_json::from_value(payload).ok().map(CatEvent::CatDeleted),
            _ => None,
        }
    }

    pub fn created(props: &CatProps) -> Self {
        CatEvent::CatCreated(CatCreatedData {
            name: props.name.clone(),
            age: props.age,
            breed: props.breed.clone(),
        })
    }

    /// Records only the fields whose value actually changed.
    pub fn updated(before: &CatProps, after: &CatProps) -> Self {
        let mut changes = CatUpdate::default();
        if before.name != after.name {
            changes = changes.name(after.name.clone());
        }
        if before.age != after.age {
            changes = changes.age(after.age);
        }
        if before.breed != after.breed {
            changes = changes.breed(after.breed.clone());
        }
        CatEvent::CatUpdated(CatUpdatedData { changes })
    }

    pub fn deleted(props: &CatProps) -> Self {
        CatEvent::CatDeleted(CatDeletedData {
            name: props.name.clone(),
        })
    }
}

/// Data for CatCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatCreatedData {
    pub name: String,
    pub age: i64,
    pub breed: String,
}

/// Data for CatUpdated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatUpdatedData {
    pub changes: CatUpdate,
}

/// Data for CatDeleted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatDeletedData {
    pub name: String,
}

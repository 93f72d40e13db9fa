//! Entities: identity + continuity across state changes.

use crate::identifier::UniqueEntityId;
use crate::value_object::ValueObject;

/// An identity-compared object with frozen properties.
///
/// The id is assigned at construction (generated when not supplied). Props are
/// never mutated in place: [`Entity::with_props`] returns a new instance that
/// keeps the same identity.
#[derive(Debug, Clone)]
pub struct Entity<P, Id = UniqueEntityId> {
    id: Id,
    props: ValueObject<P>,
}

impl<P, Id: Default> Entity<P, Id> {
    /// Creates an entity with a freshly generated id.
    pub fn new(props: P) -> Self {
        Self::with_id(Id::default(), props)
    }
}

impl<P, Id> Entity<P, Id> {
    /// Creates an entity with a known id.
    pub fn with_id(id: Id, props: P) -> Self {
        Self {
            id,
            props: ValueObject::new(props),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn props(&self) -> &P {
        self.props.props()
    }

    /// Returns a new entity with the same identity and replaced props.
    pub fn with_props(&self, props: P) -> Self
    where
        Id: Clone,
    {
        Self::with_id(self.id.clone(), props)
    }

    /// Returns true if both entities carry the same props, ignoring identity.
    pub fn has_same_props(&self, other: &Self) -> bool
    where
        P: PartialEq,
    {
        self.props == other.props
    }
}

impl<P, Id: PartialEq> PartialEq for Entity<P, Id> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.id == other.id
    }
}

impl<P, Id: Eq> Eq for Entity<P, Id> {}

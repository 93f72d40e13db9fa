//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

/// Immutable, structurally compared property bag.
///
/// Equality delegates to `P: PartialEq`, so it is a deep structural comparison
/// that does not depend on field or map-key order. There are no mutable
/// accessors; build a new value object to change anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueObject<P> {
    props: P,
}

impl<P> ValueObject<P> {
    pub fn new(props: P) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }
}

impl<P> AsRef<P> for ValueObject<P> {
    fn as_ref(&self) -> &P {
        &self.props
    }
}

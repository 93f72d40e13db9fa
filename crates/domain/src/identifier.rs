//! Typed identity values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidIdentifier;

/// Wraps an opaque value as a typed, comparable identity.
///
/// Two identifiers are equal when they are of the same kind and carry equal
/// values. Kinds are distinct Rust types, so a `CatId` and a bare
/// `UniqueEntityId` can never be compared at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier<T>(T);

impl<T> Identifier<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for Identifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique string identity for entities.
///
/// [`UniqueEntityId::new`] generates a UUID v4. A supplied value must be a
/// non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId(Identifier<String>);

impl UniqueEntityId {
    /// Generates a new globally unique id.
    pub fn new() -> Self {
        Self(Identifier::new(Uuid::new_v4().to_string()))
    }

    /// Wraps a caller-supplied id, rejecting empty strings.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(InvalidIdentifier::Empty);
        }
        Ok(Self(Identifier::new(value)))
    }

    /// Wraps a caller-supplied id that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `value` is empty. An empty id is a programming error; use
    /// [`parse`](Self::parse) for untrusted input.
    pub fn from_trusted(value: impl Into<String>) -> Self {
        match Self::parse(value) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.value()
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UniqueEntityId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<UniqueEntityId> for String {
    fn from(id: UniqueEntityId) -> Self {
        id.0.into_value()
    }
}

impl AsRef<str> for UniqueEntityId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

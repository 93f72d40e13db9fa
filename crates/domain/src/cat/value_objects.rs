//! Value objects for the cat domain.

use serde::{Deserialize, Serialize};

use crate::error::InvalidIdentifier;
use crate::identifier::UniqueEntityId;

/// Unique identifier for a cat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatId(UniqueEntityId);

impl CatId {
    /// Generates a new random cat ID.
    pub fn new() -> Self {
        Self(UniqueEntityId::new())
    }

    /// Parses a caller-supplied ID, rejecting empty strings.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        UniqueEntityId::parse(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for CatId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CatId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<UniqueEntityId> for CatId {
    fn from(id: UniqueEntityId) -> Self {
        Self(id)
    }
}

impl From<CatId> for UniqueEntityId {
    fn from(id: CatId) -> Self {
        id.0
    }
}

/// The properties of a cat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatProps {
    pub name: String,
    pub age: i64,
    pub breed: String,
}

impl CatProps {
    pub fn new(name: impl Into<String>, age: i64, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            breed: breed.into(),
        }
    }

    /// Overlays the fields present in `changes` on a copy of these props.
    pub fn merge(&self, changes: &CatUpdate) -> Self {
        Self {
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            age: changes.age.unwrap_or(self.age),
            breed: changes.breed.clone().unwrap_or_else(|| self.breed.clone()),
        }
    }
}

/// A partial set of cat properties; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
}

impl CatUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.breed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_id_new_creates_unique_ids() {
        assert_ne!(CatId::new(), CatId::new());
    }

    #[test]
    fn cat_id_parse_round_trips_through_display() {
        let id = CatId::parse("cat-42").unwrap();
        assert_eq!(id.to_string(), "cat-42");
        assert_eq!("cat-42".parse::<CatId>().unwrap(), id);
        assert!(CatId::parse("").is_err());
    }

    #[test]
    fn merge_overlays_only_present_fields() {
        let props = CatProps::new("Mia", 2, "Tabby");

        let merged = props.merge(&CatUpdate::default().age(3));
        assert_eq!(merged, CatProps::new("Mia", 3, "Tabby"));

        let merged = props.merge(&CatUpdate::default().name("Luna").breed("Siamese"));
        assert_eq!(merged, CatProps::new("Luna", 2, "Siamese"));
    }

    #[test]
    fn update_deserializes_partial_body() {
        let update: CatUpdate = serde_json::from_str(r#"{"age":3}"#).unwrap();
        assert_eq!(update, CatUpdate::default().age(3));
        assert!(!update.is_empty());

        let empty: CatUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}

//! Flat transport projection of a cat.

use serde::{Deserialize, Serialize};

use super::Cat;

/// Cat as exposed to transport layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatDto {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub breed: String,
}

impl From<&Cat> for CatDto {
    fn from(cat: &Cat) -> Self {
        Self {
            id: cat.id().to_string(),
            name: cat.name().to_string(),
            age: cat.age(),
            breed: cat.breed().to_string(),
        }
    }
}

/// Maps cat aggregates to DTOs.
pub struct CatMapper;

impl CatMapper {
    pub fn to_dto(cat: &Cat) -> CatDto {
        CatDto::from(cat)
    }

    pub fn to_dto_list(cats: &[Cat]) -> Vec<CatDto> {
        cats.iter().map(Self::to_dto).collect()
    }
}

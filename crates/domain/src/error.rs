//! Domain error types.

use thiserror::Error;

/// A malformed identifier was supplied at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIdentifier {
    #[error("Invalid UniqueEntityId: must be a non-empty string")]
    Empty,
}

/// Errors raised by a repository backend.
///
/// These are infrastructure faults, not domain outcomes: use cases propagate
/// them instead of encoding them as `Left` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store could not be reached or refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

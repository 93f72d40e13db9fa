//! Shared building blocks for the cat service.
//!
//! - [`Outcome`]: success-or-failure with a string message
//! - [`Either`]: two-track value returned by use cases
//! - [`guard`]: argument checks producing [`Outcome`] values
//! - [`UseCase`] and [`UseCaseError`]: application-layer contracts

pub mod either;
pub mod guard;
pub mod result;
pub mod use_case;

pub use either::{Either, left, right};
pub use result::Outcome;
pub use use_case::{UseCase, UseCaseError};

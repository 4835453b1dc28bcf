//! `seedwork-core` — domain building blocks shared by entity modules.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! an identifier value object, a generic entity base and a fluent validator
//! for single property values.

pub mod entity;
pub mod error;
pub mod id;
pub mod object;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::UniqueEntityId;
pub use object::{Frozen, deep_freeze};
pub use validation::{ValidationError, ValidatorRules};
pub use value_object::ValueObject;

//! Catalog domain module.
//!
//! Concrete entities built on `seedwork-core`, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;

pub use category::{Category, CategoryProperties, CategoryProps, NAME_MAX_LENGTH};

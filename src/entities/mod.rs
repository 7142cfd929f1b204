//! Entities module - Domain entities
//!
//! An entity is the in-memory form of a persisted record. The storage row
//! shape lives next to its repository.

pub mod enums;
pub mod pet;

// Re-exports
pub use enums::Species;
pub use pet::{FieldErrors, Pet, ValidationScope};

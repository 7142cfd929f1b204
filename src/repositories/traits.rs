//! Repository port
//!
//! Storage-agnostic contract for pet persistence. Every operation returns
//! either a value or a [`PetError`], never both.

use crate::core::PetError;
use crate::entities::Pet;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Outcome of a bulk delete by guardian
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedPets {
    pub count: u64,
}

impl DeletedPets {
    /// Human-readable confirmation including the number of removed rows
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeletedPets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pet(s) deleted", self.count)
    }
}

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Inserts a new pet
    ///
    /// # Returns
    /// * `Ok(Pet)` - The stored pet with its sequential id assigned by the store
    /// * `Err(PetError::StoreFailure)` - Any store error, constraint violations included
    async fn save(&self, pet: &Pet) -> Result<Pet, PetError>;

    /// Reads a pet by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Pet)` - Pet found
    /// * `Err(PetError::StoreFailure)` - Store error, or no row matched
    async fn get(&self, uuid: &Uuid) -> Result<Pet, PetError>;

    /// Overwrites the mutable fields of the pet addressed by `pet.uuid`
    ///
    /// # Returns
    /// * `Ok(Pet)` - Current state of the row after the write
    /// * `Err(PetError::NotFound)` - No row matched the unique identifier
    /// * `Err(PetError::StoreFailure)` - Store error
    async fn update(&self, pet: &Pet) -> Result<Pet, PetError>;

    /// Removes every pet belonging to a guardian
    ///
    /// # Returns
    /// * `Ok(DeletedPets)` - Number of removed rows, at least one
    /// * `Err(PetError::NotFound)` - The guardian has no pets
    /// * `Err(PetError::StoreFailure)` - Store error
    async fn delete(&self, uuid_guardian: &Uuid) -> Result<DeletedPets, PetError>;
}

//! DTOs module - Data Transfer Objects
//!
//! Wire representations kept apart from the entities.

pub mod pet;

pub use pet::{
    CreatePetRequest, DeletePetRequest, DeletePetResponse, GetPetRequest, PetResponse,
    UpdatePetRequest,
};

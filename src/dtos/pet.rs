//! Pet DTOs - Wire messages of the pet gRPC service
//!
//! Plain prost messages (standard protobuf encoding), paired with the stubs
//! generated by `build.rs`.

use crate::entities::Pet;
use crate::repositories::DeletedPets;

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreatePetRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub uuid_guardian: String,
    #[prost(int32, tag = "3")]
    pub birth_year: i32,
    #[prost(string, tag = "4")]
    pub breed: String,
    #[prost(int32, tag = "5")]
    pub specie: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdatePetRequest {
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub birth_year: i32,
    #[prost(string, tag = "4")]
    pub breed: String,
    #[prost(int32, tag = "5")]
    pub specie: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetPetRequest {
    #[prost(string, tag = "1")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeletePetRequest {
    #[prost(string, tag = "1")]
    pub uuid_guardian: String,
}

/// Shared by Create, Update and Get
#[derive(Clone, PartialEq, prost::Message)]
pub struct PetResponse {
    #[prost(int64, tag = "1")]
    pub n_identification: i64,
    #[prost(string, tag = "2")]
    pub uuid: String,
    #[prost(string, tag = "3")]
    pub uuid_guardian: String,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(int32, tag = "5")]
    pub birth_year: i32,
    #[prost(string, tag = "6")]
    pub breed: String,
    // decimal code, "0" for Dog
    #[prost(string, tag = "7")]
    pub specie: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeletePetResponse {
    #[prost(string, tag = "1")]
    pub message: String,
}

impl From<Pet> for PetResponse {
    fn from(value: Pet) -> Self {
        Self {
            n_identification: value.n_identification,
            uuid: value.uuid.to_string(),
            uuid_guardian: value.uuid_guardian.to_string(),
            name: value.name,
            birth_year: value.birth_year,
            breed: value.breed,
            specie: value.specie.to_string(),
        }
    }
}

impl From<DeletedPets> for DeletePetResponse {
    fn from(value: DeletedPets) -> Self {
        Self {
            message: value.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Species;
    use uuid::Uuid;

    #[test]
    fn every_field_is_projected() {
        let pet = Pet {
            n_identification: 7,
            uuid: Uuid::new_v4(),
            uuid_guardian: Uuid::new_v4(),
            name: "Rex".to_string(),
            birth_year: 2020,
            breed: "SRD".to_string(),
            specie: Species::Cat,
        };

        let response = PetResponse::from(pet.clone());

        assert_eq!(response.n_identification, 7);
        assert_eq!(response.uuid, pet.uuid.to_string());
        assert_eq!(response.uuid_guardian, pet.uuid_guardian.to_string());
        assert_eq!(response.name, "Rex");
        assert_eq!(response.birth_year, 2020);
        assert_eq!(response.breed, "SRD");
        assert_eq!(response.specie, "1");
    }

    #[test]
    fn delete_response_carries_the_count() {
        let response = DeletePetResponse::from(DeletedPets { count: 3 });
        assert_eq!(response.message, "3 pet(s) deleted");
    }
}

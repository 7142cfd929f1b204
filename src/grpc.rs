//! gRPC transport - Maps `pet.PetService` calls onto the pet service
//!
//! Each handler builds or parses the entity from the wire fields, validates
//! mutations before touching the service, and projects the outcome back onto
//! the wire. Failures leave as `tonic::Status`, see `From<PetError> for Status`.

use crate::core::PetError;
use crate::dtos::{
    CreatePetRequest, DeletePetRequest, DeletePetResponse, GetPetRequest, PetResponse,
    UpdatePetRequest,
};
use crate::entities::{Pet, Species, ValidationScope};
use crate::services::PetService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/pet.PetService.rs"));

pub use pet_service_client::PetServiceClient;
pub use pet_service_server::{PetService as PetRpc, PetServiceServer};

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

pub struct PetGrpcHandler {
    service: Arc<dyn PetService>,
}

impl PetGrpcHandler {
    pub fn new(service: Arc<dyn PetService>) -> Self {
        Self { service }
    }
}

fn parse_uuid(field: &str, value: &str) -> Result<Uuid, PetError> {
    Uuid::parse_str(value)
        .map_err(|_| PetError::Validation(format!("{}: '{}' is not a valid uuid", field, value)))
}

/// Rejects the pet when any rule fails
fn validated(pet: Pet) -> Result<Pet, PetError> {
    let errors = pet.validate(ValidationScope::All);
    if errors.is_empty() {
        Ok(pet)
    } else {
        warn!("Validation failed: {}", errors);
        Err(errors.into())
    }
}

#[tonic::async_trait]
impl PetRpc for PetGrpcHandler {
    #[instrument(skip(self, request))]
    async fn create(
        &self,
        request: Request<CreatePetRequest>,
    ) -> Result<Response<PetResponse>, Status> {
        let input = request.into_inner();
        let pet = validated(Pet {
            n_identification: 0,
            uuid: Uuid::new_v4(),
            uuid_guardian: parse_uuid("uuid_guardian", &input.uuid_guardian)?,
            name: input.name,
            birth_year: input.birth_year,
            breed: input.breed,
            specie: Species::from(input.specie),
        })?;
        debug!(uuid = %pet.uuid, "Creating pet");

        let saved = self.service.save(&pet).await?;
        info!(uuid = %saved.uuid, "Pet created");
        Ok(Response::new(saved.into()))
    }

    #[instrument(skip(self, request))]
    async fn update(
        &self,
        request: Request<UpdatePetRequest>,
    ) -> Result<Response<PetResponse>, Status> {
        let input = request.into_inner();
        // the guardian is not part of an update, the store keeps its own
        let pet = validated(Pet {
            n_identification: 0,
            uuid: parse_uuid("uuid", &input.uuid)?,
            uuid_guardian: Uuid::nil(),
            name: input.name,
            birth_year: input.birth_year,
            breed: input.breed,
            specie: Species::from(input.specie),
        })?;

        let updated = self.service.update(&pet).await?;
        info!(uuid = %updated.uuid, "Pet updated");
        Ok(Response::new(updated.into()))
    }

    #[instrument(skip(self, request))]
    async fn get(&self, request: Request<GetPetRequest>) -> Result<Response<PetResponse>, Status> {
        let uuid = parse_uuid("uuid", &request.get_ref().uuid)?;
        let pet = self.service.get(&uuid).await?;
        Ok(Response::new(pet.into()))
    }

    #[instrument(skip(self, request))]
    async fn delete(
        &self,
        request: Request<DeletePetRequest>,
    ) -> Result<Response<DeletePetResponse>, Status> {
        let guardian = parse_uuid("uuid_guardian", &request.get_ref().uuid_guardian)?;
        let deleted = self.service.delete(&guardian).await?;
        info!(guardian = %guardian, count = deleted.count, "Pets deleted");
        Ok(Response::new(deleted.into()))
    }
}

/// Wraps a service into the tonic server type
pub fn grpc_server(service: Arc<dyn PetService>) -> PetServiceServer<PetGrpcHandler> {
    PetServiceServer::new(PetGrpcHandler::new(service))
}

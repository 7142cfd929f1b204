//! Pet server library - exposes the main modules to the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod grpc;
pub mod repositories;
pub mod services;

// Re-exports of the main types
pub use crate::core::{AppState, Config, ErrorKind, PetError};
pub use grpc::{PetGrpcHandler, PetServiceClient, PetServiceServer};

/// Builds the gRPC service for the application
pub fn create_grpc_server(state: AppState) -> PetServiceServer<PetGrpcHandler> {
    grpc::grpc_server(state.pets)
}

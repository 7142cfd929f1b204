//! Application State - Wiring shared by the server and the tests
//!
//! The pool is handed to the repository once; everything above it only sees
//! the traits.

use crate::repositories::{PetRepository, PoolType, SqlPetRepository};
use crate::services::{PetApplication, PetService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Pet service backed by the relational repository
    pub pets: Arc<dyn PetService>,
}

impl AppState {
    /// Builds the repository and the service on top of the given pool
    ///
    /// # Arguments
    /// * `pool` - Shared connection pool
    pub fn new(pool: PoolType) -> Self {
        let repository: Arc<dyn PetRepository> = Arc::new(SqlPetRepository::new(pool));
        Self::with_service(Arc::new(PetApplication::new(repository)))
    }

    /// Uses an already built service, e.g. a test double
    pub fn with_service(pets: Arc<dyn PetService>) -> Self {
        Self { pets }
    }
}

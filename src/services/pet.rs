//! Pet services - Application layer between the transport and the repository

use crate::core::PetError;
use crate::entities::Pet;
use crate::repositories::{DeletedPets, PetRepository};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Operations the transport depends on
#[async_trait]
pub trait PetService: Send + Sync {
    async fn save(&self, pet: &Pet) -> Result<Pet, PetError>;
    async fn get(&self, uuid: &Uuid) -> Result<Pet, PetError>;
    async fn update(&self, pet: &Pet) -> Result<Pet, PetError>;
    async fn delete(&self, uuid_guardian: &Uuid) -> Result<DeletedPets, PetError>;
}

/// Forwards every call unchanged to the repository it was built with
pub struct PetApplication {
    repository: Arc<dyn PetRepository>,
}

impl PetApplication {
    pub fn new(repository: Arc<dyn PetRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PetService for PetApplication {
    async fn save(&self, pet: &Pet) -> Result<Pet, PetError> {
        self.repository.save(pet).await
    }

    async fn get(&self, uuid: &Uuid) -> Result<Pet, PetError> {
        self.repository.get(uuid).await
    }

    async fn update(&self, pet: &Pet) -> Result<Pet, PetError> {
        self.repository.update(pet).await
    }

    async fn delete(&self, uuid_guardian: &Uuid) -> Result<DeletedPets, PetError> {
        self.repository.delete(uuid_guardian).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Species;
    use std::sync::Mutex;

    /// Records every call and answers with canned results
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<String>>,
        fail_with: Option<PetError>,
    }

    impl RecordingRepository {
        fn record(&self, call: String) -> Result<(), PetError> {
            self.calls.lock().unwrap().push(call);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl PetRepository for RecordingRepository {
        async fn save(&self, pet: &Pet) -> Result<Pet, PetError> {
            self.record(format!("save {}", pet.uuid))?;
            Ok(Pet {
                n_identification: 123,
                ..pet.clone()
            })
        }

        async fn get(&self, uuid: &Uuid) -> Result<Pet, PetError> {
            self.record(format!("get {}", uuid))?;
            Ok(Pet {
                uuid: *uuid,
                ..sample()
            })
        }

        async fn update(&self, pet: &Pet) -> Result<Pet, PetError> {
            self.record(format!("update {}", pet.uuid))?;
            Ok(pet.clone())
        }

        async fn delete(&self, uuid_guardian: &Uuid) -> Result<DeletedPets, PetError> {
            self.record(format!("delete {}", uuid_guardian))?;
            Ok(DeletedPets { count: 2 })
        }
    }

    fn sample() -> Pet {
        Pet {
            n_identification: 101,
            uuid: Uuid::new_v4(),
            uuid_guardian: Uuid::new_v4(),
            name: "Mingau".to_string(),
            birth_year: 2020,
            breed: "SRD".to_string(),
            specie: Species::Cat,
        }
    }

    #[tokio::test]
    async fn every_operation_is_forwarded_unchanged() {
        let repository = Arc::new(RecordingRepository::default());
        let service = PetApplication::new(repository.clone());
        let pet = sample();

        let saved = service.save(&pet).await.unwrap();
        assert_eq!(saved.n_identification, 123);
        assert_eq!(saved.name, pet.name);

        let got = service.get(&pet.uuid).await.unwrap();
        assert_eq!(got.uuid, pet.uuid);

        let updated = service.update(&pet).await.unwrap();
        assert_eq!(updated, pet);

        let deleted = service.delete(&pet.uuid_guardian).await.unwrap();
        assert_eq!(deleted.count, 2);

        let calls = repository.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                format!("save {}", pet.uuid),
                format!("get {}", pet.uuid),
                format!("update {}", pet.uuid),
                format!("delete {}", pet.uuid_guardian),
            ]
        );
    }

    #[tokio::test]
    async fn errors_are_passed_through() {
        let repository = Arc::new(RecordingRepository {
            fail_with: Some(PetError::NotFound("pet not found".to_string())),
            ..Default::default()
        });
        let service = PetApplication::new(repository);

        let err = service.update(&sample()).await.unwrap_err();
        assert_eq!(err, PetError::NotFound("pet not found".to_string()));

        let err = service.delete(&Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, PetError::NotFound("pet not found".to_string()));
    }
}

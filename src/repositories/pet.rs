//! SqlPetRepository - Relational adapter for the pet repository port

use super::{DeletedPets, PetRepository, PoolType};
use crate::core::PetError;
use crate::entities::{Pet, Species};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

const SELECT_BY_UUID: &str = r#"
    SELECT n_identification, uuid, uuid_guardian, name, birth_year, breed, specie
    FROM pets
    WHERE uuid = ?
"#;

/// Storage shape of a pet: identifiers are kept as text, the species as its code
#[derive(Debug, sqlx::FromRow)]
struct PetRow {
    n_identification: i64,
    uuid: String,
    uuid_guardian: String,
    name: String,
    birth_year: i32,
    breed: String,
    specie: i32,
}

impl TryFrom<PetRow> for Pet {
    type Error = PetError;

    fn try_from(row: PetRow) -> Result<Self, Self::Error> {
        let parse = |column: &str, value: &str| {
            Uuid::parse_str(value).map_err(|e| {
                PetError::StoreFailure(format!("malformed {} '{}' in store: {}", column, value, e))
            })
        };

        Ok(Pet {
            n_identification: row.n_identification,
            uuid: parse("uuid", &row.uuid)?,
            uuid_guardian: parse("uuid_guardian", &row.uuid_guardian)?,
            name: row.name,
            birth_year: row.birth_year,
            breed: row.breed,
            specie: Species::from(row.specie),
        })
    }
}

// PET REPOSITORY
pub struct SqlPetRepository {
    connection_pool: PoolType,
}

impl SqlPetRepository {
    pub fn new(connection_pool: PoolType) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl PetRepository for SqlPetRepository {
    #[instrument(skip(self, pet), fields(uuid = %pet.uuid, guardian = %pet.uuid_guardian))]
    async fn save(&self, pet: &Pet) -> Result<Pet, PetError> {
        debug!("Inserting pet");
        // n_identification is left to the store
        let result = sqlx::query(
            r#"
            INSERT INTO pets (uuid, uuid_guardian, name, birth_year, breed, specie)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(pet.uuid.to_string())
        .bind(pet.uuid_guardian.to_string())
        .bind(&pet.name)
        .bind(pet.birth_year)
        .bind(&pet.breed)
        .bind(pet.specie.code())
        .execute(&self.connection_pool)
        .await
        .inspect_err(|e| warn!("Insert failed: {}", e))?;

        let n_identification = result.last_insert_rowid();
        info!("Pet saved with n_identification {}", n_identification);

        Ok(Pet {
            n_identification,
            ..pet.clone()
        })
    }

    #[instrument(skip(self), fields(uuid = %uuid))]
    async fn get(&self, uuid: &Uuid) -> Result<Pet, PetError> {
        debug!("Reading pet by uuid");
        // fetch_one: an unmatched uuid surfaces as the store's RowNotFound
        let row = sqlx::query_as::<_, PetRow>(SELECT_BY_UUID)
            .bind(uuid.to_string())
            .fetch_one(&self.connection_pool)
            .await
            .inspect_err(|e| debug!("Read failed: {}", e))?;

        Pet::try_from(row)
    }

    #[instrument(skip(self, pet), fields(uuid = %pet.uuid))]
    async fn update(&self, pet: &Pet) -> Result<Pet, PetError> {
        debug!("Updating pet");
        let result = sqlx::query(
            r#"
            UPDATE pets
            SET name = ?, birth_year = ?, breed = ?, specie = ?
            WHERE uuid = ?
            "#,
        )
        .bind(&pet.name)
        .bind(pet.birth_year)
        .bind(&pet.breed)
        .bind(pet.specie.code())
        .bind(pet.uuid.to_string())
        .execute(&self.connection_pool)
        .await
        .inspect_err(|e| warn!("Update failed: {}", e))?;

        if result.rows_affected() == 0 {
            debug!("No pet matched");
            return Err(PetError::NotFound("pet not found".to_string()));
        }

        let row = sqlx::query_as::<_, PetRow>(SELECT_BY_UUID)
            .bind(pet.uuid.to_string())
            .fetch_one(&self.connection_pool)
            .await?;

        info!("Pet updated");
        Pet::try_from(row)
    }

    #[instrument(skip(self), fields(guardian = %uuid_guardian))]
    async fn delete(&self, uuid_guardian: &Uuid) -> Result<DeletedPets, PetError> {
        debug!("Deleting pets of guardian");
        let result = sqlx::query("DELETE FROM pets WHERE uuid_guardian = ?")
            .bind(uuid_guardian.to_string())
            .execute(&self.connection_pool)
            .await
            .inspect_err(|e| warn!("Delete failed: {}", e))?;

        let count = result.rows_affected();
        if count == 0 {
            return Err(PetError::NotFound(format!(
                "no pets found for guardian {}",
                uuid_guardian
            )));
        }

        info!("Deleted {} pets", count);
        Ok(DeletedPets { count })
    }
}

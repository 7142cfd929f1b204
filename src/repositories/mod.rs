//! Repositories module - Persistence layer
//!
//! The port lives in [`traits`], the sqlx adapter in [`pet`]. This module
//! also owns pool construction and the schema bootstrap.

// ************************* NOTE ON QUERIES ************************* //

/*
   Queries use the runtime-checked `sqlx::query` / `sqlx::query_as` builders,
   so the crate builds without a live database.
   Which terminal call to use:
   Number of Rows   Method              Returns
   None             .execute(...)       QueryResult, read rows_affected() / last_insert_rowid()
   Zero or One      .fetch_optional()   Option<T>
   Exactly One      .fetch_one()        T, RowNotFound when nothing matched
   Multiple         .fetch_all()        Vec<T>
*/

pub mod pet;
pub mod traits;

pub use pet::SqlPetRepository;
pub use traits::{DeletedPets, PetRepository};

use crate::core::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

// pool type alias, the single place to touch when switching engine
pub type PoolType = SqlitePool;

const CREATE_PETS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS pets (
        n_identification INTEGER PRIMARY KEY AUTOINCREMENT,
        uuid             TEXT    NOT NULL UNIQUE,
        uuid_guardian    TEXT    NOT NULL,
        name             TEXT    NOT NULL,
        birth_year       INTEGER NOT NULL,
        breed            TEXT    NOT NULL,
        specie           INTEGER NOT NULL
    )
"#;

const CREATE_GUARDIAN_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_pets_uuid_guardian ON pets (uuid_guardian)";

/// Opens the connection pool described by the configuration
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &Config) -> Result<PoolType, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_with(options)
        .await?;

    info!("Database pool ready");
    Ok(pool)
}

/// Creates the pets table and its guardian index when missing
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PoolType) -> Result<(), sqlx::Error> {
    debug!("Ensuring pets schema");
    sqlx::query(CREATE_PETS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_GUARDIAN_INDEX).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Single-connection in-memory pool with the schema applied.
    /// Every connection to `sqlite::memory:` is a separate database, so the
    /// pool must never open a second one.
    pub async fn memory_pool() -> PoolType {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        ensure_schema(&pool).await.expect("schema");
        pool
    }
}

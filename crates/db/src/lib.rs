//! Order Store: connection pool, schema bootstrap, and order persistence.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StorageError;
pub use store::{OrderStore, PgOrderStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create the `orders` table if it does not exist yet.
///
/// Safe to call on every start: applied migrations are skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Round-trip `SELECT 1` and require the scalar back.
pub async fn health_check(pool: &DbPool) -> Result<(), StorageError> {
    let value = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    if value != 1 {
        return Err(StorageError::UnexpectedResult(value));
    }
    Ok(())
}

//! The Order Store seam consumed by the HTTP facade.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::order::{CreateOrder, Order};
use crate::repositories::OrderRepo;
use crate::DbPool;

/// Durable order persistence.
///
/// Every call borrows its own connection for the duration of the call and
/// returns it on every exit path; nothing is held between calls.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist one order atomically. The assigned id is not returned.
    async fn create(&self, input: &CreateOrder) -> Result<(), StorageError>;

    /// Every stored order, ordered by id.
    async fn list(&self) -> Result<Vec<Order>, StorageError>;

    /// Connectivity round-trip.
    async fn ping(&self) -> Result<(), StorageError>;
}

/// PostgreSQL-backed [`OrderStore`] sharing one injected pool.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: DbPool,
}

impl PgOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(&self, input: &CreateOrder) -> Result<(), StorageError> {
        // Dropping an uncommitted transaction rolls it back.
        let mut tx = self.pool.begin().await?;
        OrderRepo::insert(&mut *tx, input).await?;
        tx.commit().await?;
        tracing::debug!(user_id = input.user_id, "Order committed");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Order>, StorageError> {
        Ok(OrderRepo::list(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool).await
    }
}

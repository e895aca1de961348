//! Repository for the `orders` table.

use sqlx::{PgConnection, PgPool};

use crate::models::order::{CreateOrder, Order};

/// Column list for `orders` queries.
const COLUMNS: &str = "id, user_id, lunch_item, created_at";

/// Insert and list operations for lunch orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order on the given connection.
    ///
    /// `id` and `created_at` are assigned by the database. Callers own the
    /// surrounding transaction.
    pub async fn insert(conn: &mut PgConnection, input: &CreateOrder) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO orders (user_id, lunch_item) VALUES ($1, $2)")
            .bind(input.user_id)
            .bind(&input.lunch_item)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// List every order, oldest identity first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY id ASC");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }
}

//! Order row and creation DTO.

use lunchbox_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `orders` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: UserId,
    pub lunch_item: String,
    pub created_at: Timestamp,
}

/// Payload for placing an order. `id` and `created_at` are store-assigned.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrder {
    pub user_id: UserId,
    #[validate(length(min = 1, message = "lunch_item must not be empty"))]
    pub lunch_item: String,
}

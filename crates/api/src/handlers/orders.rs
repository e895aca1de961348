//! Handlers for placing and listing lunch orders.

use axum::extract::State;
use axum::Json;
use lunchbox_db::models::order::{CreateOrder, Order};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::Acknowledgement;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

/// GET /orders
///
/// Every stored order, ordered by id.
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<OrderList>> {
    let orders = state.orders.list().await?;
    tracing::debug!(count = orders.len(), "Listed orders");
    Ok(Json(OrderList { orders }))
}

/// POST /orders
///
/// Persist one order. Invalid payloads are rejected by the extractor before
/// the store is touched.
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> AppResult<Json<Acknowledgement>> {
    state.orders.create(&input).await?;

    tracing::info!(user_id = input.user_id, lunch_item = %input.lunch_item, "Order saved");

    Ok(Json(Acknowledgement::success("Order saved")))
}

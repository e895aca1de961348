use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// ```text
/// GET  /orders  -> list_orders
/// POST /orders  -> create_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/orders",
        get(orders::list_orders).post(orders::create_order),
    )
}

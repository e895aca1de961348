pub mod health;
pub mod orders;
pub mod recommendation;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// GET  /                 greeting
/// GET  /orders           list orders
/// POST /orders           place an order
/// GET  /recommendation   proxy to the recommendation service
/// GET  /health           aggregated dependency health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::greet))
        .merge(orders::router())
        .merge(recommendation::router())
        .merge(health::router())
}

use axum::routing::get;
use axum::Router;

use crate::handlers::recommendation;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/recommendation", get(recommendation::get_recommendation))
}

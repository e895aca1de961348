use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /recommendation
///
/// Proxies the recommendation service; its JSON body is returned unchanged.
pub async fn get_recommendation(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let body = state.recommendation.fetch().await?;
    Ok(Json(body))
}

//! Aggregated health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lunchbox_core::health::{HealthComponent, HealthReport};

use crate::state::AppState;

/// Check the order store, then the recommendation service.
///
/// Sequential AND-gate: the recommendation probe is skipped when the store
/// round-trip fails, and the report names the first failing component.
pub async fn check_dependencies(state: &AppState) -> HealthReport {
    if let Err(e) = state.orders.ping().await {
        tracing::error!(error = %e, "Database connection failed");
        return HealthReport::failed(HealthComponent::Database, e);
    }
    tracing::debug!("Database connection OK");

    if let Err(e) = state.recommendation.probe().await {
        tracing::error!(error = %e, "Recommendation service unreachable");
        return HealthReport::failed(HealthComponent::Recommendation, e);
    }
    tracing::debug!("Recommendation service reachable");

    HealthReport::ok()
}

/// HTTP status for a report: one distinct code per failing component.
pub fn status_code(report: &HealthReport) -> StatusCode {
    match report.failed {
        None => StatusCode::OK,
        Some(HealthComponent::Database) => StatusCode::INTERNAL_SERVER_ERROR,
        Some(HealthComponent::Recommendation) => StatusCode::BAD_GATEWAY,
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = check_dependencies(&state).await;
    (status_code(&report), Json(report))
}

//! Lunch recommendation service.
//!
//! The downstream dependency of the order API: answers
//! `GET /recommendation` with one lunch picked at random.

use axum::routing::get;
use axum::{Json, Router};
use rand::seq::IndexedRandom;
use serde::Serialize;

/// Lunches the service may recommend.
pub const LUNCH_OPTIONS: [&str; 5] = ["Sushi", "Pizza", "Burrito", "Ramen", "Tacos"];

#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub recommendation: &'static str,
}

/// Pick one entry of [`LUNCH_OPTIONS`] uniformly at random.
pub fn pick() -> &'static str {
    LUNCH_OPTIONS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(LUNCH_OPTIONS[0])
}

/// GET /recommendation
async fn recommend() -> Json<Recommendation> {
    let recommendation = pick();
    tracing::debug!(recommendation, "Serving recommendation");
    Json(Recommendation { recommendation })
}

pub fn router() -> Router {
    Router::new().route("/recommendation", get(recommend))
}

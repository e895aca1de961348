use std::sync::Arc;

use lunchbox_db::OrderStore;

use crate::recommendation::RecommendationSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Order persistence, constructed once at startup around the shared pool.
    pub orders: Arc<dyn OrderStore>,
    /// Downstream recommendation service.
    pub recommendation: Arc<dyn RecommendationSource>,
}

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use lunchbox_api::config::{RecommendationConfig, ServerConfig};
use lunchbox_api::recommendation::{
    RecommendationClient, RecommendationError, RecommendationSource,
};
use lunchbox_api::router::build_app_router;
use lunchbox_api::state::AppState;
use lunchbox_db::models::order::{CreateOrder, Order};
use lunchbox_db::{OrderStore, StorageError};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` pointing the recommendation client at `url`.
pub fn test_config(url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        recommendation: RecommendationConfig {
            url: url.to_string(),
            timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(2),
        },
    }
}

// ---------------------------------------------------------------------------
// In-memory order store
// ---------------------------------------------------------------------------

/// [`OrderStore`] kept in a `Vec`, with a switch to simulate an outage.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<Order>>,
    unavailable: AtomicBool,
    pings: AtomicUsize,
}

impl InMemoryOrderStore {
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_unavailable(true);
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, input: &CreateOrder) -> Result<(), StorageError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        let id = orders.last().map_or(1, |o| o.id + 1);
        orders.push(Order {
            id,
            user_id: input.user_id,
            lunch_item: input.lunch_item.clone(),
            created_at: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Order>, StorageError> {
        self.check()?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        self.check()
    }
}

// ---------------------------------------------------------------------------
// Scripted recommendation source
// ---------------------------------------------------------------------------

/// [`RecommendationSource`] that answers from a fixed script and counts calls.
pub struct ScriptedRecommendation {
    body: Option<serde_json::Value>,
    fetches: AtomicUsize,
    probes: AtomicUsize,
}

impl ScriptedRecommendation {
    pub fn answering(body: serde_json::Value) -> Self {
        Self {
            body: Some(body),
            fetches: AtomicUsize::new(0),
            probes: AtomicUsize::new(0),
        }
    }

    /// Every call fails with `HTTP 503`.
    pub fn down() -> Self {
        Self {
            body: None,
            fetches: AtomicUsize::new(0),
            probes: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationSource for ScriptedRecommendation {
    async fn fetch(&self) -> Result<serde_json::Value, RecommendationError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or(RecommendationError::HttpStatus(503))
    }

    async fn probe(&self) -> Result<(), RecommendationError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.body
            .as_ref()
            .map(|_| ())
            .ok_or(RecommendationError::HttpStatus(503))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router around the given collaborators.
pub fn build_test_app(
    orders: Arc<dyn OrderStore>,
    recommendation: Arc<dyn RecommendationSource>,
) -> Router {
    let config = test_config("http://127.0.0.1:9/recommendation");
    let state = AppState {
        orders,
        recommendation,
    };
    build_app_router(state, &config)
}

/// Serve `router` on an ephemeral local port and return its address.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An upstream whose `/recommendation` never answers within a test's lifetime.
pub async fn hanging_upstream() -> SocketAddr {
    spawn_upstream(Router::new().route(
        "/recommendation",
        axum::routing::get(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            "too late"
        }),
    ))
    .await
}

/// HTTP client for `addr` with explicit proxy and probe timeouts.
pub fn client_with_timeouts(
    addr: SocketAddr,
    timeout: Duration,
    probe_timeout: Duration,
) -> RecommendationClient {
    let mut config = test_config(&format!("http://{addr}/recommendation")).recommendation;
    config.timeout = timeout;
    config.probe_timeout = probe_timeout;
    RecommendationClient::new(&config)
}

/// An address on which nothing is listening.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the uniform error body and return its `detail`.
pub async fn expect_error(response: Response<Body>, status: StatusCode, code: &str) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], code);
    json["detail"].as_str().unwrap().to_string()
}

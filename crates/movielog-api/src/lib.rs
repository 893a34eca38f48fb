//! Movielog API
//!
//! JSON-over-HTTP access to the movie log. Routes are served both path-style
//! (`/api/movies/3`) and query-style (`/api?path=movies/3`).

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::Method,
    middleware,
    response::Response,
    routing::{any, get, post},
    Json, Router,
};
use movielog_core::MovieCatalog;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{debug, info, instrument, warn};

pub mod cors;
pub mod envelope;
pub mod error;
pub mod handlers;

pub use envelope::{Envelope, Message};
pub use error::ApiError;
use handlers::ListParams;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
    start_time: Instant,
}

impl AppState {
    pub fn new(catalog: MovieCatalog) -> Self {
        Self {
            catalog,
            start_time: Instant::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", any(dispatch_handler))
        .route(
            "/api/movies",
            get(list_movies_handler)
                .post(create_movie_handler)
                .fallback(not_found_handler),
        )
        .route(
            "/api/movies/{id}",
            get(get_movie_handler)
                .put(update_movie_handler)
                .delete(delete_movie_handler)
                .fallback(not_found_handler),
        )
        .route("/api/stats", get(stats_handler).fallback(not_found_handler))
        .route("/api/genres", get(genres_handler).fallback(not_found_handler))
        .route("/api/init", post(init_handler).fallback(not_found_handler))
        .route("/api/health", get(health_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(cors::allow_all))
        .with_state(state)
}

async fn list_movies_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    handlers::list(&state, &ListParams::from_pairs(&pairs)).await
}

async fn get_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    handlers::show(&state, &id).await
}

async fn create_movie_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    handlers::create(&state, &body).await
}

async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    handlers::update(&state, &id, &body).await
}

async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    handlers::remove(&state, &id).await
}

async fn stats_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    handlers::stats(&state).await
}

async fn genres_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    handlers::genres(&state).await
}

async fn init_handler(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    handlers::init(&state, &body).await
}

/// Health check handler
#[instrument(skip(state))]
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

async fn not_found_handler() -> ApiError {
    ApiError::EndpointNotFound
}

/// Serverless-style routing: the sub-path arrives as `?path=movies/12`
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let path = handlers::last_value(&pairs, "path").unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    debug!(method = %method, path = %path, "Dispatching query-routed request");

    match (method, segments.as_slice()) {
        (Method::GET, ["movies"]) => handlers::list(&state, &ListParams::from_pairs(&pairs)).await,
        (Method::POST, ["movies"]) => handlers::create(&state, &body).await,
        (Method::GET, ["movies", id]) => handlers::show(&state, id).await,
        (Method::PUT, ["movies", id]) => handlers::update(&state, id, &body).await,
        (Method::DELETE, ["movies", id]) => handlers::remove(&state, id).await,
        (Method::GET, ["stats"]) => handlers::stats(&state).await,
        (Method::GET, ["genres"]) => handlers::genres(&state).await,
        (Method::POST, ["init"]) => handlers::init(&state, &body).await,
        _ => Err(ApiError::EndpointNotFound),
    }
}

/// Start the API server and run until Ctrl-C
pub async fn serve(addr: &str, state: AppState) -> Result<(), std::io::Error> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(
        operation = "server_started",
        address = %listener.local_addr()?,
        "Movielog API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(operation = "server_stopped", "Movielog API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(operation = "shutdown_requested", "Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

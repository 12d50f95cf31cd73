//! HTTP surface: `POST /` answers a query, `GET /health` reports liveness.
//!
//! The dataset is reloaded from the engine's source on every request; the
//! only thing shared between requests is the engine itself.

mod error;

pub use error::ApiError;

use crate::application::engine::QueryEngine;
use crate::domain::summary::QueryResult;
use crate::interfaces::json::transaction_reader::read_request;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /
///
/// Body is an optional JSON query. A missing or empty body returns every
/// transaction.
async fn query_transactions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QueryResult>, ApiError> {
    let request = read_request(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let result = state.engine.run(&request).await?;
    Ok(Json(result))
}

pub fn router(engine: QueryEngine) -> Router {
    let state = AppState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/", post(query_transactions))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(engine: QueryEngine, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(engine)).await
}

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::page;
use crate::domain::collector::SnapshotCollector;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub collector: SnapshotCollector,
    pub refresh_interval: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/info", get(api_info))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: &'static str,
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(state.refresh_interval))
}

/// Encoded straight from the typed snapshot so fields keep declaration order.
async fn api_info(State(state): State<AppState>, parts: Parts) -> Result<Response, ApiError> {
    let snapshot = state.collector.collect(Some(&parts)).await;
    let body = serde_json::to_vec(&snapshot)?;
    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

/// Liveness: never touches the collector.
async fn health() -> Json<StatusBody> {
    Json(StatusBody { status: "healthy" })
}

async fn ready() -> Json<StatusBody> {
    Json(StatusBody { status: "ready" })
}

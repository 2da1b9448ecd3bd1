//! Cache administration endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::ApiResponse;
use crate::api::state::AppState;

/// GET /api/cache/stats - Cache size and hit counters
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(json!({
        "cache": state.index.cache_stats(),
        "metrics": state.index.metrics()
    })))
}

/// DELETE /api/cache - Drop all cached results
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.index.clear_cache();
    StatusCode::NO_CONTENT
}

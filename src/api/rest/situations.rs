//! Situation lookup and corpus status endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;

/// GET /api/situations/:id - Get a single situation
pub async fn get_situation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.index.get_situation(&id) {
        Some(situation) => (StatusCode::OK, Json(ApiResponse::new(situation))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Situation '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// GET /api/status - Corpus load status
pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(json!({
        "corpus": state.index.status(),
        "categories": state.index.categories()
    })))
}

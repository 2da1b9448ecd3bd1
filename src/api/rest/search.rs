//! Search and coaching endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{not_ready, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::coaching::coach;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    #[serde(default)]
    pub q: String,
}

/// Body for the talk endpoint
#[derive(Debug, Deserialize)]
pub struct TalkRequest {
    pub query: String,
}

/// GET /api/search - Search life situations
pub async fn search_situations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    if params.q.trim().is_empty() {
        let error = ApiError::bad_request("Query parameter 'q' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let status = state.index.status();
    if !status.is_ready() {
        return not_ready(&status);
    }

    let index = Arc::clone(&state.index);
    match tokio::task::spawn_blocking(move || index.search(&params.q)).await {
        Ok(results) => {
            let total = results.len();
            (StatusCode::OK, Json(ApiResponse::with_total(results, total))).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// POST /api/talk - Coaching grounded in the top matching situations
pub async fn talk_to_me(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TalkRequest>,
) -> impl IntoResponse {
    if request.query.trim().is_empty() {
        let error = ApiError::bad_request("Field 'query' must not be empty");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let status = state.index.status();
    if !status.is_ready() {
        return not_ready(&status);
    }

    let index = Arc::clone(&state.index);
    let outcome = tokio::task::spawn_blocking(move || {
        let results = index.search(&request.query);
        coach(&request.query, &results)
    })
    .await;

    match outcome {
        Ok(response) => (StatusCode::OK, Json(ApiResponse::new(response))).into_response(),
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

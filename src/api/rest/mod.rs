//! REST API module for HTTP endpoints
//!
//! - `GET /api/status` - Corpus load status
//! - `GET /api/search?q=` - Search situations
//! - `GET /api/situations/:id` - Get single situation
//! - `POST /api/talk` - Offline coaching for a question
//! - `GET /api/cache/stats` - Cache statistics
//! - `DELETE /api/cache` - Clear the result cache

pub mod cache;
pub mod search;
pub mod situations;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::types::CorpusStatus;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNAVAILABLE".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// 503 response for a corpus that is not searchable yet
pub(crate) fn not_ready(status: &CorpusStatus) -> axum::response::Response {
    let message = match status {
        CorpusStatus::Failed { reason } => format!("Corpus failed to load: {}", reason),
        _ => "Corpus is still loading".to_string(),
    };
    (StatusCode::SERVICE_UNAVAILABLE, Json(ApiError::unavailable(message))).into_response()
}

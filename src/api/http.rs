//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::rest::{cache, search, situations};
use super::state::AppState;
use crate::types::McpResult;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/status", get(situations::get_status))
        .route("/api/search", get(search::search_situations))
        .route("/api/situations/:id", get(situations::get_situation))
        .route("/api/talk", post(search::talk_to_me))
        .route("/api/cache/stats", get(cache::get_stats))
        .route("/api/cache", delete(cache::clear_cache))
        .layer(cors)
        .with_state(state)
}

/// Serve the REST API until Ctrl+C
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> McpResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchIndex;
    use crate::types::LifeSituation;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn ready_state() -> Arc<AppState> {
        let index = SearchIndex::from_situations(vec![
            LifeSituation::new("work-stress", "Dealing with workplace stress")
                .with_category("Work")
                .with_tags(["stress", "work"])
                .with_key_insights(["Pause before reacting"]),
            LifeSituation::new("sleep", "Sleep issues").with_tags(["sleep"]),
        ]);
        Arc::new(AppState::new(Arc::new(index)))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(ready_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let (status, json) = send(
            create_router(ready_state()),
            Method::GET,
            "/api/search?q=stress",
            Body::empty(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["data"][0]["id"], "work-stress");
        assert!(json["data"][0]["relevanceScore"].as_f64().unwrap() > 0.1);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (status, json) = send(
            create_router(ready_state()),
            Method::GET,
            "/api/search?q=%20%20",
            Body::empty(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_search_while_loading_is_unavailable() {
        let state = Arc::new(AppState::new(Arc::new(SearchIndex::new())));
        let (status, json) = send(
            create_router(state),
            Method::GET,
            "/api/search?q=stress",
            Body::empty(),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["code"], "UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_get_situation() {
        let state = ready_state();
        let (status, json) = send(
            create_router(state.clone()),
            Method::GET,
            "/api/situations/sleep",
            Body::empty(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["title"], "Sleep issues");

        let (status, _) = send(
            create_router(state),
            Method::GET,
            "/api/situations/missing",
            Body::empty(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cache_stats_and_clear() {
        let state = ready_state();
        send(create_router(state.clone()), Method::GET, "/api/search?q=stress", Body::empty()).await;

        let (_, json) = send(
            create_router(state.clone()),
            Method::GET,
            "/api/cache/stats",
            Body::empty(),
        )
        .await;
        assert_eq!(json["data"]["cache"]["entries"], 1);
        assert_eq!(json["data"]["cache"]["cachedResults"], 1);

        let (status, _) =
            send(create_router(state.clone()), Method::DELETE, "/api/cache", Body::empty()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.index.cache_stats().entries, 0);
    }

    #[tokio::test]
    async fn test_talk_endpoint() {
        let (status, json) = send(
            create_router(ready_state()),
            Method::POST,
            "/api/talk",
            Body::from(r#"{"query":"work stress"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["retrievedScenarios"][0]["id"], "work-stress");
        assert_eq!(json["data"]["practicalSteps"][0], "Pause before reacting");
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let (status, json) =
            send(create_router(ready_state()), Method::GET, "/api/status", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["corpus"]["state"], "ready");
        assert_eq!(json["data"]["corpus"]["count"], 2);
    }
}

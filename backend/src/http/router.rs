//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (panic recovery, CORS, compression,
//! tracing, body limit).

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::error::panic_response;
use super::handlers;
use super::state::AppState;

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/addSchool", post(handlers::add_school))
        .route("/listSchools", get(handlers::list_schools));

    with_middleware(routes).with_state(state)
}

/// Wrap `routes` in the middleware stack shared by every endpoint.
fn with_middleware(routes: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::LocalRepository;
    use crate::services::ValidationOptions;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(Arc::new(LocalRepository::new()), ValidationOptions::default())
    }

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[test]
    fn test_router_creation() {
        let _router = create_router(state());
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_internal_error() {
        let app = with_middleware(Router::new().route("/explode", get(explode))).with_state(state());

        let request = Request::builder()
            .uri("/explode")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Database error"}));
    }
}

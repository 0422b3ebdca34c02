//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{CacheConfig, ServerConfig};

use super::handlers::{
    board_options, boards_options, create_board, delete_board, get_board, list_boards,
    update_board, AppState,
};
use super::middleware::{cache_headers, create_cors_layer};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    server_config: &ServerConfig,
    cache_config: &CacheConfig,
) -> Router {
    let max_age = cache_config.max_age_secs;

    // Board resource routes, all behind the public cache header
    let board_routes = Router::new()
        .route(
            "/boards",
            get(list_boards).post(create_board).options(boards_options),
        )
        .route(
            "/boards/:id",
            get(get_board)
                .put(update_board)
                .patch(update_board)
                .delete(delete_board)
                .options(board_options),
        )
        .layer(middleware::from_fn(move |req, next| {
            cache_headers(max_age, req, next)
        }));

    Router::new()
        .merge(board_routes)
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&server_config.cors_origins)),
        )
        .with_state(app_state)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let pool = db::connect_in_memory().await.unwrap();
        let app_state = Arc::new(AppState::new(pool));
        let router = create_router(
            app_state,
            &ServerConfig::default(),
            &CacheConfig::default(),
        );

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

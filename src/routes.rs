// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    routing::{get, patch, post, put},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{analytics, calendar, posts, sync},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (posts, calendar, analytics, sync).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, config, HTTP client).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let post_routes = Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{id}", put(posts::update_post).delete(posts::delete_post));

    let calendar_routes = Router::new()
        .route("/", get(calendar::list_items).post(calendar::create_item))
        .route(
            "/{id}",
            put(calendar::update_item).delete(calendar::delete_item),
        )
        .route("/{id}/status", patch(calendar::update_status));

    let analytics_routes = Router::new()
        .route("/summary", get(analytics::summary))
        .route("/platform", get(analytics::platform_breakdown))
        .route("/content", get(analytics::content_breakdown));

    Router::new()
        .route("/", get(health))
        .nest("/api/posts", post_routes)
        .nest("/api/calendar", calendar_routes)
        .nest("/api/analytics", analytics_routes)
        .route("/api/sync", post(sync::accept_sync))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "message": "Content planner API is running" }))
}

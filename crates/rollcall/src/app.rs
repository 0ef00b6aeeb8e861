use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        attendance::{list_attendance, mark_attendance, unmark_attendance},
        cache::clear_cache,
        health::{healthz, livez},
        members::list_members,
        pages::{index, redirect_home},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/members", get(list_members))
        .route(
            "/attendance",
            get(list_attendance)
                .post(mark_attendance)
                .delete(unmark_attendance),
        )
        .route("/clear-cache", get(clear_cache))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(api_routes)
        .fallback(redirect_home)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

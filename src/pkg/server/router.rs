use axum::routing::{delete, patch, post, put};
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/jobs", post(handlers::jobs::create))
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/jobs/{id}", get(handlers::jobs::retrieve))
        .route("/api/jobs/{id}", put(handlers::jobs::update))
        .route("/api/jobs/{id}", patch(handlers::jobs::update))
        .route("/api/jobs/{id}", delete(handlers::jobs::destroy))
        .route("/api/notes", post(handlers::notes::create))
        .route("/api/notes", get(handlers::notes::list))
        .route("/api/notes/{id}", get(handlers::notes::retrieve))
        .route("/api/notes/{id}", put(handlers::notes::update))
        .route("/api/notes/{id}", patch(handlers::notes::update))
        .route("/api/notes/{id}", delete(handlers::notes::destroy))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}

//! HTTP API server for linksaver.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
pub mod auth;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use linksaver_service::BookmarkService;
use tower_http::trace::TraceLayer;

pub use auth::{CallerId, IdentityProvider, StaticTokenIdentity};
pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Ingestion, listing and reordering of bookmarks
    pub bookmark_service: Arc<BookmarkService>,
    /// Maps bearer tokens to user ids
    pub identity: Arc<dyn IdentityProvider>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route(
            "/api/bookmarks",
            get(handlers::bookmarks::list_bookmarks).post(handlers::bookmarks::create_bookmark),
        )
        .route("/api/bookmarks/reorder", put(handlers::bookmarks::reorder_bookmarks))
        .route(
            "/api/bookmarks/{id}",
            get(handlers::bookmarks::get_bookmark).delete(handlers::bookmarks::delete_bookmark),
        )
        .route("/api/tags", get(handlers::tags::list_tags))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    let storage = state.bookmark_service.storage().kind();
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", storage }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

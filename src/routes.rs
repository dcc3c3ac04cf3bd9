//! Top-level router.
//!
//! # Route Structure
//!
//! - Page routes from [`crate::web::routes`], with `GET /{link}` last in priority
//! - `/static/*` - Static assets from `static/`
//! - Anything else - Not-found page
//!
//! # Middleware
//!
//! - **CORS preflight** - Answers every `OPTIONS` request before routing
//! - **Tracing** - Request span with status and latency
//! - **Path normalization** - Trailing slashes trimmed

use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::{cors, tracing};

/// Builds the router with every route and layer, without path normalization.
///
/// Integration tests drive this directly.
pub fn build_router(state: AppState) -> Router {
    web::routes::routes()
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(cors::preflight))
        .layer(tracing::layer())
        .with_state(state)
}

/// Router served in production, with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

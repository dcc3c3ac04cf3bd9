//! Fixed status pages.

use axum::{http::StatusCode, response::IntoResponse};

use crate::web::pages::{DeletedTemplate, FailureTemplate, NotFoundTemplate};

/// `GET /failure`
pub async fn failure_handler() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, FailureTemplate {})
}

/// `GET /deleted`
pub async fn deleted_handler() -> impl IntoResponse {
    DeletedTemplate {}
}

/// Fallback for anything no route claims.
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}

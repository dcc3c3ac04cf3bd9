//! Route table for the web surface.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::web::handlers::{
    create_form_handler, create_redirect_handler, delete_redirect_handler, deleted_handler,
    failure_handler, identify_handler, redirect_handler, view_redirect_handler,
};

/// All page routes.
///
/// # Endpoints
///
/// - `GET /` - Creation form
/// - `POST /` - Create a redirect
/// - `GET /redirects/{access_code}` - Management page with visit history
/// - `POST /redirects/{access_code}/delete` - Soft delete
/// - `GET /failure` - Failure page
/// - `GET /deleted` - Deletion confirmation
/// - `GET /identify` - Caller IP and location as JSON
/// - `GET /{link}` - Redirect to the stored URL
///
/// Fixed paths take priority over `/{link}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(create_form_handler).post(create_redirect_handler))
        .route("/redirects/{access_code}", get(view_redirect_handler))
        .route(
            "/redirects/{access_code}/delete",
            post(delete_redirect_handler),
        )
        .route("/failure", get(failure_handler))
        .route("/deleted", get(deleted_handler))
        .route("/identify", get(identify_handler))
        .route("/{link}", get(redirect_handler))
}

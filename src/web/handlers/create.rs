//! Creation form handlers.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::CreateRedirectForm;
use crate::web::pages::CreateTemplate;

/// Renders the empty creation form.
///
/// # Endpoint
///
/// `GET /`
pub async fn create_form_handler() -> impl IntoResponse {
    CreateTemplate::blank()
}

/// Handles a creation form submission.
///
/// # Endpoint
///
/// `POST /` with `application/x-www-form-urlencoded` fields `link` and `url`.
///
/// # Responses
///
/// - `303 See Other` to `/redirects/{access_code}` on success
/// - `400 Bad Request` with the form re-rendered when the link or URL is refused
/// - `303 See Other` to `/failure` when the redirect could not be stored
/// - `500` failure page when the body cannot be parsed
pub async fn create_redirect_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateRedirectForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::internal(
            "Failed to parse form",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    match state
        .redirect_service
        .create_redirect(form.link, form.url)
        .await
    {
        Ok(redirect) => {
            let location = format!("/redirects/{}", redirect.access_code);
            Ok(Redirect::to(&location).into_response())
        }
        Err(e) if e.is_validation() => Err(e),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create redirect");
            Ok(Redirect::to("/failure").into_response())
        }
    }
}

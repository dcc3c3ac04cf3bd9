//! Management page and deletion, both addressed by access code.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::access_code::is_access_code_format;
use crate::web::pages::ViewRedirectTemplate;

fn ensure_access_code_format(access_code: &str) -> Result<(), AppError> {
    if is_access_code_format(access_code) {
        return Ok(());
    }

    Err(AppError::not_found(
        "Malformed access code",
        json!({ "access_code": access_code }),
    ))
}

/// Renders a redirect with its visit history.
///
/// # Endpoint
///
/// `GET /redirects/{access_code}`
///
/// # Responses
///
/// - `200 OK` management page
/// - `404 Not Found` page for malformed, unknown or deleted codes
/// - `500` failure page on database errors
pub async fn view_redirect_handler(
    State(state): State<AppState>,
    Path(access_code): Path<String>,
) -> Result<Response, AppError> {
    ensure_access_code_format(&access_code)?;

    let redirect = state
        .redirect_service
        .get_by_access_code(&access_code)
        .await?;

    Ok(ViewRedirectTemplate::new(&redirect, &state.host).into_response())
}

/// Soft-deletes a redirect.
///
/// # Endpoint
///
/// `POST /redirects/{access_code}/delete`
///
/// # Responses
///
/// - `303 See Other` to `/deleted` on success
/// - `303 See Other` to `/failure` if nothing was deleted or the write failed
/// - `404 Not Found` page for malformed codes
pub async fn delete_redirect_handler(
    State(state): State<AppState>,
    Path(access_code): Path<String>,
) -> Result<Response, AppError> {
    ensure_access_code_format(&access_code)?;

    match state
        .redirect_service
        .delete_by_access_code(&access_code)
        .await
    {
        Ok(()) => Ok(Redirect::to("/deleted").into_response()),
        Err(AppError::NoRowsAffected { message, .. }) => {
            tracing::warn!(%access_code, %message, "Nothing to delete");
            Ok(Redirect::to("/failure").into_response())
        }
        Err(e) => {
            tracing::error!(%access_code, error = %e, "Failed to delete redirect");
            Ok(Redirect::to("/failure").into_response())
        }
    }
}

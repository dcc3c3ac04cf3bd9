//! The redirect hot path.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::utils::link_rules::check_static_rules;

/// Sends the visitor to the destination behind `link`.
///
/// Links that could never have been created (bad format or reserved) are
/// answered with the not-found page without touching the database. A visit
/// is recorded on the way out; failing to record it never blocks the
/// redirect.
///
/// # Endpoint
///
/// `GET /{link}`
///
/// # Responses
///
/// - `302 Found` with `Location` set to the stored URL
/// - `404 Not Found` page if no live redirect uses the link
/// - `500` failure page on database errors
pub async fn redirect_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(link): Path<String>,
) -> Result<Response, AppError> {
    if let Err(reason) = check_static_rules(&link) {
        return Err(AppError::not_found(
            "Link cannot exist",
            json!({ "link": link, "reason": reason.to_string() }),
        ));
    }

    let resolution = state
        .redirect_service
        .resolve(&link, client_ip(&addr))
        .await?;

    found(&resolution.redirect.url)
}

/// Builds a `302 Found` response to `url`.
fn found(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid header value",
            json!({ "url": url, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

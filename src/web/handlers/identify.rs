//! `/identify`: tells a browser on an allowed origin where it appears to be.

use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, HeaderValue, header::ORIGIN},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::web::dto::IdentifyResponse;
use crate::web::middleware::cors::apply_cors_headers;

/// Returns the caller's IP and location as JSON.
///
/// Each guard ends the request on failure.
///
/// # Endpoint
///
/// `GET /identify`
///
/// # Responses
///
/// - `200 OK` with `{"IPAddress", "country", "regionName", "city", "isp", "CreatedAt"}` and
///   `Access-Control-Allow-Origin` echoing the caller's origin
/// - `500` failure page if the `Origin` header is missing or not allowed, or
///   the lookup fails
pub async fn identify_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let origin = allowed_origin(&headers, &state.allowed_origins)?;

    let visitor = state
        .visit_service
        .identify(client_ip(&addr))
        .await
        .map_err(|e| {
            AppError::internal("Failed to identify visitor", json!({ "reason": e.to_string() }))
        })?;

    let mut response = Json(IdentifyResponse::new(visitor, Utc::now())).into_response();
    apply_cors_headers(response.headers_mut(), origin);
    Ok(response)
}

fn allowed_origin(headers: &HeaderMap, allowed: &[String]) -> Result<HeaderValue, AppError> {
    let Some(origin) = headers.get(ORIGIN) else {
        return Err(AppError::internal("Missing Origin header", json!({})));
    };

    let matches = origin
        .to_str()
        .is_ok_and(|value| allowed.iter().any(|a| a == value));

    if !matches {
        return Err(AppError::internal(
            "Origin not allowed",
            json!({ "origin": String::from_utf8_lossy(origin.as_bytes()) }),
        ));
    }

    Ok(origin.clone())
}

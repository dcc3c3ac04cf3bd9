//! CORS preflight handling.
//!
//! Every `OPTIONS` request is answered here, whatever its path, so browsers
//! calling `/identify` from another origin can complete the preflight.

use axum::{
    Json,
    extract::Request,
    http::{
        HeaderMap, HeaderValue, Method,
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Request headers a cross-origin caller may send.
pub const ALLOWED_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, \
     Authorization, accept, origin, Cache-Control, X-Requested-With";

/// Writes the CORS response headers, echoing `origin` as the allowed origin.
pub fn apply_cors_headers(headers: &mut HeaderMap, origin: HeaderValue) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
}

/// Short-circuits `OPTIONS` requests with a permissive preflight answer.
///
/// Other methods pass through untouched.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/identify", get(identify_handler))
///     .layer(axum::middleware::from_fn(cors::preflight));
/// ```
pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() != Method::OPTIONS {
        return next.run(req).await;
    }

    tracing::debug!(path = %req.uri().path(), "Answering CORS preflight");

    let mut response = Json(json!({ "message": "success" })).into_response();
    apply_cors_headers(response.headers_mut(), HeaderValue::from_static("*"));
    response
}

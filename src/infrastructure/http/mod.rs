//! Outbound HTTP gateways.
//!
//! Both gateways share one pooled [`reqwest::Client`] and apply their own
//! per-request timeout; a timeout counts as a failure of that call.
//!
//! - [`IpApiGeoLocator`] - ip-api.com compatible geolocation lookups
//! - [`HttpUrlLiveness`] - GET probe for destination URLs

pub mod ip_api;
pub mod liveness;

pub use ip_api::IpApiGeoLocator;
pub use liveness::HttpUrlLiveness;

use reqwest::Client;

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}

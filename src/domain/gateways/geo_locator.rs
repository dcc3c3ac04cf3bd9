//! Geolocation gateway used to enrich visits.

use async_trait::async_trait;
use serde::Deserialize;

/// Location and network data resolved for an IP address.
///
/// Field names follow the ip-api.com JSON response. Every field is optional:
/// lookups for private or reserved addresses come back without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub country: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
}

/// Reasons a geolocation lookup can fail.
///
/// These never reach the client: enrichment failures are logged and the
/// visit is skipped.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("geolocation request failed: {0}")]
    Request(String),

    #[error("geolocation service responded with status {0}")]
    Status(u16),

    #[error("failed to decode geolocation response: {0}")]
    Decode(String),

    #[error("geolocation lookup timed out")]
    Timeout,
}

/// Resolves an IP address to a [`Location`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Looks up the given IP address.
    ///
    /// # Errors
    ///
    /// Returns an [`EnrichmentError`] on network failure, timeout, or an
    /// undecodable response.
    async fn locate(&self, ip_address: &str) -> Result<Location, EnrichmentError>;
}

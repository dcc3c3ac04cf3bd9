//! Geolocation lookups against an ip-api.com compatible endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::gateways::{EnrichmentError, GeoLocator, Location};

/// Geolocation gateway that appends the IP to a base URL, e.g.
/// `http://ip-api.com/json/` + `24.48.0.1`.
pub struct IpApiGeoLocator {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl IpApiGeoLocator {
    /// Creates a new locator. A trailing `/` is added to `base_url` if missing.
    pub fn new(client: Client, base_url: &str, timeout: Duration) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Self {
            client,
            base_url,
            timeout,
        }
    }

    fn lookup_url(&self, ip_address: &str) -> String {
        format!("{}{}", self.base_url, ip_address)
    }
}

fn classify(e: reqwest::Error) -> EnrichmentError {
    if e.is_timeout() {
        EnrichmentError::Timeout
    } else if e.is_decode() {
        EnrichmentError::Decode(e.to_string())
    } else {
        EnrichmentError::Request(e.to_string())
    }
}

#[async_trait]
impl GeoLocator for IpApiGeoLocator {
    async fn locate(&self, ip_address: &str) -> Result<Location, EnrichmentError> {
        let url = self.lookup_url(ip_address);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        let location = response.json::<Location>().await.map_err(classify)?;

        tracing::debug!(%ip_address, ?location, "Geolocation lookup succeeded");

        Ok(location)
    }
}

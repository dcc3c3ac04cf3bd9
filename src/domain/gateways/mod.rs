//! Outbound gateway traits.
//!
//! Both gateways perform live network calls; implementations live in
//! `crate::infrastructure::http` and are swapped for fakes in tests.
//!
//! - [`GeoLocator`] - IP geolocation lookups used to enrich visits
//! - [`UrlLiveness`] - Reachability probe used when validating destinations

pub mod geo_locator;
pub mod url_liveness;

pub use geo_locator::{EnrichmentError, GeoLocator, Location};
pub use url_liveness::UrlLiveness;

#[cfg(test)]
pub use geo_locator::MockGeoLocator;
#[cfg(test)]
pub use url_liveness::MockUrlLiveness;

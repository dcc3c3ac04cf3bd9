//! Visit enrichment and recording.

use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::gateways::{EnrichmentError, GeoLocator, Location};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// Caller address together with its resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiedVisitor {
    pub ip_address: String,
    pub location: Location,
}

/// Service for enriching callers with geolocation data and storing visits.
///
/// Recording is a best-effort side channel: failures are logged and never
/// returned to the redirect path.
pub struct VisitService {
    visit_repository: Arc<dyn VisitRepository>,
    geo_locator: Arc<dyn GeoLocator>,
    ip_override: Option<String>,
}

impl VisitService {
    /// Creates a new visit service.
    ///
    /// `ip_override` replaces every caller address before lookup; use it to
    /// exercise enrichment from a local machine.
    pub fn new(
        visit_repository: Arc<dyn VisitRepository>,
        geo_locator: Arc<dyn GeoLocator>,
        ip_override: Option<String>,
    ) -> Self {
        Self {
            visit_repository,
            geo_locator,
            ip_override,
        }
    }

    /// Address used for lookups and stored on visits.
    pub fn effective_ip(&self, peer: IpAddr) -> String {
        self.ip_override
            .clone()
            .unwrap_or_else(|| peer.to_string())
    }

    /// Resolves the caller's location.
    ///
    /// # Errors
    ///
    /// Returns an [`EnrichmentError`] if the geolocation lookup fails.
    pub async fn identify(&self, peer: IpAddr) -> Result<IdentifiedVisitor, EnrichmentError> {
        let ip_address = self.effective_ip(peer);
        let location = self.geo_locator.locate(&ip_address).await?;

        Ok(IdentifiedVisitor {
            ip_address,
            location,
        })
    }

    /// Enriches the caller and stores a visit for `redirect_id`.
    ///
    /// Returns `None` when enrichment or the write fails; no visit is stored
    /// if enrichment fails.
    pub async fn record_visit(&self, redirect_id: i64, peer: IpAddr) -> Option<Visit> {
        let visitor = match self.identify(peer).await {
            Ok(visitor) => visitor,
            Err(e) => {
                tracing::warn!(redirect_id, error = %e, "Enrichment failed, skipping visit");
                return None;
            }
        };

        let new_visit =
            NewVisit::from_location(redirect_id, visitor.ip_address, visitor.location);

        match self.visit_repository.create(new_visit).await {
            Ok(visit) => Some(visit),
            Err(e) => {
                tracing::error!(redirect_id, error = %e, "Failed to record visit");
                None
            }
        }
    }

    /// Lists all visits of a redirect in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] on database errors.
    pub async fn list_visits(&self, redirect_id: i64) -> Result<Vec<Visit>, AppError> {
        self.visit_repository.list_by_redirect(redirect_id).await
    }
}

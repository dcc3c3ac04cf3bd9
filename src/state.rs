//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::{RedirectService, UrlValidator, VisitService};
use crate::config::Config;
use crate::domain::gateways::{GeoLocator, UrlLiveness};
use crate::domain::repositories::{RedirectRepository, VisitRepository};

/// Request-independent values the services need besides their collaborators.
#[derive(Debug, Clone)]
pub struct StateOptions {
    /// Base URL for absolute links, without a trailing `/`.
    pub host: String,
    pub mock_ip: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl From<&Config> for StateOptions {
    fn from(config: &Config) -> Self {
        Self {
            host: config.host.clone(),
            mock_ip: config.mock_ip.clone(),
            allowed_origins: config.allowed_origins.clone(),
        }
    }
}

/// Cloned into every request; all fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub visit_service: Arc<VisitService>,
    pub host: Arc<str>,
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    /// Wires the services on top of the given repositories and gateways.
    pub fn new(
        redirect_repository: Arc<dyn RedirectRepository>,
        visit_repository: Arc<dyn VisitRepository>,
        geo_locator: Arc<dyn GeoLocator>,
        url_liveness: Arc<dyn UrlLiveness>,
        options: StateOptions,
    ) -> Self {
        let visit_service = Arc::new(VisitService::new(
            visit_repository,
            geo_locator,
            options.mock_ip,
        ));

        let redirect_service = Arc::new(RedirectService::new(
            redirect_repository,
            UrlValidator::new(url_liveness),
            visit_service.clone(),
        ));

        Self {
            redirect_service,
            visit_service,
            host: options.host.into(),
            allowed_origins: options.allowed_origins.into(),
        }
    }
}

//! Redirect creation, resolution, management and deletion.

use std::net::IpAddr;
use std::sync::Arc;

use serde_json::json;

use crate::application::services::{LinkValidator, UrlValidator, VisitService};
use crate::domain::entities::{NewRedirect, Redirect, Visit};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Outcome of resolving a link.
///
/// The redirect is authoritative; `visit` is `None` whenever the best-effort
/// enrichment or visit write did not succeed.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub redirect: Redirect,
    pub visit: Option<Visit>,
}

/// Service orchestrating the redirect lifecycle.
///
/// Handles the creation workflow (link validation, URL validation, storage),
/// link resolution with visit recording, the access-code management view and
/// soft deletion.
pub struct RedirectService {
    redirect_repository: Arc<dyn RedirectRepository>,
    link_validator: LinkValidator,
    url_validator: UrlValidator,
    visit_service: Arc<VisitService>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        redirect_repository: Arc<dyn RedirectRepository>,
        url_validator: UrlValidator,
        visit_service: Arc<VisitService>,
    ) -> Self {
        Self {
            link_validator: LinkValidator::new(redirect_repository.clone()),
            redirect_repository,
            url_validator,
            visit_service,
        }
    }

    /// Validates and stores a new redirect.
    ///
    /// Steps short-circuit in order: link validation, URL validation, storage.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidLink`] if the link is malformed, reserved or taken
    /// - [`AppError::InvalidUrl`] if the URL is malformed or not live
    /// - [`AppError::ReadFailure`] if the uniqueness lookup fails
    /// - [`AppError::WriteFailure`] if storing the redirect fails
    pub async fn create_redirect(&self, link: String, url: String) -> Result<Redirect, AppError> {
        if let Some(reason) = self.link_validator.rejection(&link).await? {
            return Err(AppError::invalid_link(link, url, reason));
        }

        if let Some(reason) = self.url_validator.rejection(&url).await {
            return Err(AppError::invalid_url(link, url, reason));
        }

        let redirect = self
            .redirect_repository
            .create(NewRedirect { link, url })
            .await?;

        tracing::info!(
            link = %redirect.link,
            access_code = %redirect.access_code,
            "Redirect created"
        );

        Ok(redirect)
    }

    /// Resolves a link for the caller at `peer` and records a visit.
    ///
    /// Visit recording never fails the resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live redirect uses the link.
    /// Returns [`AppError::ReadFailure`] on database errors.
    pub async fn resolve(&self, link: &str, peer: IpAddr) -> Result<Resolution, AppError> {
        let redirect = self
            .redirect_repository
            .find_by_link(link)
            .await?
            .ok_or_else(|| AppError::not_found("Redirect not found", json!({ "link": link })))?;

        let visit = self.visit_service.record_visit(redirect.id, peer).await;

        Ok(Resolution { redirect, visit })
    }

    /// Loads a live redirect by access code together with its visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live redirect has the access code.
    /// Returns [`AppError::ReadFailure`] on database errors.
    pub async fn get_by_access_code(&self, access_code: &str) -> Result<Redirect, AppError> {
        let redirect = self
            .redirect_repository
            .find_by_access_code(access_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Redirect not found",
                    json!({ "access_code": access_code }),
                )
            })?;

        let visits = self.visit_service.list_visits(redirect.id).await?;

        Ok(redirect.with_visits(visits))
    }

    /// Soft-deletes the live redirect with the given access code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoRowsAffected`] if no live redirect matched.
    /// Returns [`AppError::WriteFailure`] on database errors.
    pub async fn delete_by_access_code(&self, access_code: &str) -> Result<(), AppError> {
        let affected = self
            .redirect_repository
            .soft_delete_by_access_code(access_code)
            .await?;

        if affected == 0 {
            return Err(AppError::no_rows_affected(
                "No redirect deleted",
                json!({ "access_code": access_code }),
            ));
        }

        tracing::info!(%access_code, "Redirect deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewVisit;
    use crate::domain::gateways::{EnrichmentError, Location, MockGeoLocator, MockUrlLiveness};
    use crate::domain::repositories::{MockRedirectRepository, MockVisitRepository};
    use crate::error::{LinkRejection, UrlRejection};
    use chrono::Utc;

    fn create_test_redirect(id: i64, link: &str, url: &str) -> Redirect {
        Redirect::new(
            id,
            link.to_string(),
            url.to_string(),
            "9f86d081884c7d65".to_string(),
            Utc::now(),
        )
    }

    fn stored_visit(new_visit: NewVisit) -> Visit {
        Visit::new(
            new_visit.ip_address,
            new_visit.country,
            new_visit.region_name,
            new_visit.city,
            new_visit.isp,
            Utc::now(),
        )
    }

    fn peer() -> IpAddr {
        "198.51.100.20".parse().unwrap()
    }

    fn build_service(
        redirects: MockRedirectRepository,
        visits: MockVisitRepository,
        geo: MockGeoLocator,
        liveness: MockUrlLiveness,
    ) -> RedirectService {
        let visit_service = Arc::new(VisitService::new(Arc::new(visits), Arc::new(geo), None));

        RedirectService::new(
            Arc::new(redirects),
            UrlValidator::new(Arc::new(liveness)),
            visit_service,
        )
    }

    fn live() -> MockUrlLiveness {
        let mut liveness = MockUrlLiveness::new();
        liveness.expect_check().returning(|_| true);
        liveness
    }

    #[tokio::test]
    async fn test_create_redirect_success() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_link()
            .withf(|link| link == "abc")
            .times(1)
            .returning(|_| Ok(None));
        redirects
            .expect_create()
            .withf(|new| new.link == "abc" && new.url == "https://example.com")
            .times(1)
            .returning(|new| Ok(create_test_redirect(1, &new.link, &new.url)));

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            live(),
        );

        let redirect = service
            .create_redirect("abc".to_string(), "https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(redirect.link, "abc");
        assert_eq!(redirect.url, "https://example.com");
        assert!(!redirect.access_code.is_empty());
    }

    #[tokio::test]
    async fn test_create_redirect_invalid_link_echoes_input() {
        let mut redirects = MockRedirectRepository::new();
        redirects.expect_create().times(0);

        let mut liveness = MockUrlLiveness::new();
        liveness.expect_check().times(0);

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            liveness,
        );

        let err = service
            .create_redirect("no".to_string(), "https://example.com".to_string())
            .await
            .unwrap_err();

        match err {
            AppError::InvalidLink { link, url, reason } => {
                assert_eq!(link, "no");
                assert_eq!(url, "https://example.com");
                assert_eq!(reason, LinkRejection::Format);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_redirect_taken_link() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_link()
            .times(1)
            .returning(|link| Ok(Some(create_test_redirect(2, link, "https://other.com"))));
        redirects.expect_create().times(0);

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            live(),
        );

        let err = service
            .create_redirect("taken".to_string(), "https://example.com".to_string())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::InvalidLink {
                reason: LinkRejection::Taken,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_create_redirect_unreachable_url() {
        let mut redirects = MockRedirectRepository::new();
        redirects.expect_find_by_link().returning(|_| Ok(None));
        redirects.expect_create().times(0);

        let mut liveness = MockUrlLiveness::new();
        liveness.expect_check().times(1).returning(|_| false);

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            liveness,
        );

        let err = service
            .create_redirect("abc".to_string(), "https://down.example".to_string())
            .await
            .unwrap_err();

        match err {
            AppError::InvalidUrl { link, url, reason } => {
                assert_eq!(link, "abc");
                assert_eq!(url, "https://down.example");
                assert_eq!(reason, UrlRejection::Unreachable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_redirect_write_failure() {
        let mut redirects = MockRedirectRepository::new();
        redirects.expect_find_by_link().returning(|_| Ok(None));
        redirects
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::write_failure("db down", json!({}))));

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            live(),
        );

        let err = service
            .create_redirect("abc".to_string(), "https://example.com".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::WriteFailure { .. }));
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_resolve_records_visit() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_link()
            .withf(|link| link == "abc")
            .times(1)
            .returning(|_| Ok(Some(create_test_redirect(7, "abc", "https://example.com"))));

        let mut geo = MockGeoLocator::new();
        geo.expect_locate().times(1).returning(|_| {
            Ok(Location {
                country: Some("Canada".to_string()),
                ..Location::default()
            })
        });

        let mut visits = MockVisitRepository::new();
        visits
            .expect_create()
            .withf(|v| v.redirect_id == 7 && v.ip_address == "198.51.100.20")
            .times(1)
            .returning(|v| Ok(stored_visit(v)));

        let service = build_service(redirects, visits, geo, MockUrlLiveness::new());

        let resolution = service.resolve("abc", peer()).await.unwrap();

        assert_eq!(resolution.redirect.url, "https://example.com");
        assert!(resolution.visit.is_some());
    }

    #[tokio::test]
    async fn test_resolve_not_found_writes_no_visit() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_link()
            .times(1)
            .returning(|_| Ok(None));

        let mut geo = MockGeoLocator::new();
        geo.expect_locate().times(0);

        let mut visits = MockVisitRepository::new();
        visits.expect_create().times(0);

        let service = build_service(redirects, visits, geo, MockUrlLiveness::new());

        let err = service.resolve("missing", peer()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_enrichment_failure_still_resolves() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_link()
            .returning(|_| Ok(Some(create_test_redirect(7, "abc", "https://example.com"))));

        let mut geo = MockGeoLocator::new();
        geo.expect_locate()
            .times(1)
            .returning(|_| Err(EnrichmentError::Request("connection refused".to_string())));

        let mut visits = MockVisitRepository::new();
        visits.expect_create().times(0);

        let service = build_service(redirects, visits, geo, MockUrlLiveness::new());

        let resolution = service.resolve("abc", peer()).await.unwrap();

        assert_eq!(resolution.redirect.url, "https://example.com");
        assert!(resolution.visit.is_none());
    }

    #[tokio::test]
    async fn test_resolve_read_failure() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_link()
            .returning(|_| Err(AppError::read_failure("db down", json!({}))));

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            MockUrlLiveness::new(),
        );

        let err = service.resolve("abc", peer()).await.unwrap_err();
        assert!(matches!(err, AppError::ReadFailure { .. }));
    }

    #[tokio::test]
    async fn test_get_by_access_code_attaches_visits() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_find_by_access_code()
            .withf(|code| code == "9f86d081884c7d65")
            .times(1)
            .returning(|_| Ok(Some(create_test_redirect(3, "abc", "https://example.com"))));

        let mut visits = MockVisitRepository::new();
        visits
            .expect_list_by_redirect()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Visit::new("1.1.1.1".to_string(), None, None, None, None, Utc::now()),
                    Visit::new("2.2.2.2".to_string(), None, None, None, None, Utc::now()),
                ])
            });

        let service = build_service(
            redirects,
            visits,
            MockGeoLocator::new(),
            MockUrlLiveness::new(),
        );

        let redirect = service.get_by_access_code("9f86d081884c7d65").await.unwrap();

        assert_eq!(redirect.visit_count(), 2);
        assert_eq!(redirect.visits[0].ip_address, "1.1.1.1");
    }

    #[tokio::test]
    async fn test_get_by_access_code_not_found() {
        let mut redirects = MockRedirectRepository::new();
        redirects.expect_find_by_access_code().returning(|_| Ok(None));

        let mut visits = MockVisitRepository::new();
        visits.expect_list_by_redirect().times(0);

        let service = build_service(
            redirects,
            visits,
            MockGeoLocator::new(),
            MockUrlLiveness::new(),
        );

        let err = service.get_by_access_code("abc123").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_success_then_no_rows_affected() {
        let mut redirects = MockRedirectRepository::new();
        let mut seq = mockall::Sequence::new();
        redirects
            .expect_soft_delete_by_access_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        redirects
            .expect_soft_delete_by_access_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(0));

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            MockUrlLiveness::new(),
        );

        assert!(service.delete_by_access_code("abc123").await.is_ok());

        let err = service.delete_by_access_code("abc123").await.unwrap_err();
        assert!(matches!(err, AppError::NoRowsAffected { .. }));
    }

    #[tokio::test]
    async fn test_delete_write_failure_is_distinct() {
        let mut redirects = MockRedirectRepository::new();
        redirects
            .expect_soft_delete_by_access_code()
            .returning(|_| Err(AppError::write_failure("db down", json!({}))));

        let service = build_service(
            redirects,
            MockVisitRepository::new(),
            MockGeoLocator::new(),
            MockUrlLiveness::new(),
        );

        let err = service.delete_by_access_code("abc123").await.unwrap_err();
        assert!(matches!(err, AppError::WriteFailure { .. }));
    }
}

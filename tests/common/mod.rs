#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::Utc;
use link_redirector::domain::entities::{NewRedirect, NewVisit, Redirect, Visit};
use link_redirector::domain::gateways::{EnrichmentError, GeoLocator, Location, UrlLiveness};
use link_redirector::domain::repositories::{RedirectRepository, VisitRepository};
use link_redirector::error::AppError;
use link_redirector::state::{AppState, StateOptions};
use link_redirector::utils::access_code::generate_access_code;
use serde_json::json;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::Layer;

pub const TEST_HOST: &str = "http://links.test";
pub const ALLOWED_ORIGIN: &str = "https://tomontheinternet.com";

// In-memory repositories

struct StoredRedirect {
    redirect: Redirect,
    deleted: bool,
}

#[derive(Default)]
pub struct InMemoryRedirectRepository {
    rows: Mutex<Vec<StoredRedirect>>,
    fail_writes: AtomicBool,
}

impl InMemoryRedirectRepository {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn insert(&self, link: &str, url: &str) -> Redirect {
        let mut rows = self.rows.lock().unwrap();
        let redirect = Redirect::new(
            rows.len() as i64 + 1,
            link.to_string(),
            url.to_string(),
            generate_access_code(),
            Utc::now(),
        );
        rows.push(StoredRedirect {
            redirect: redirect.clone(),
            deleted: false,
        });
        redirect
    }

    pub fn live_count(&self) -> usize {
        self.rows.lock().unwrap().iter().filter(|r| !r.deleted).count()
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::write_failure("Simulated write failure", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl RedirectRepository for InMemoryRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        self.check_writable()?;

        let taken = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| !r.deleted && r.redirect.link == new_redirect.link);
        if taken {
            return Err(AppError::write_failure("Live link already exists", json!({})));
        }

        Ok(self.insert(&new_redirect.link, &new_redirect.url))
    }

    async fn find_by_link(&self, link: &str) -> Result<Option<Redirect>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| !r.deleted && r.redirect.link == link)
            .map(|r| r.redirect.clone()))
    }

    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Redirect>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| !r.deleted && r.redirect.access_code == access_code)
            .map(|r| r.redirect.clone()))
    }

    async fn soft_delete_by_access_code(&self, access_code: &str) -> Result<u64, AppError> {
        self.check_writable()?;

        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| !r.deleted && r.redirect.access_code == access_code)
        {
            Some(row) => {
                row.deleted = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        Ok(self.live_count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryVisitRepository {
    rows: Mutex<Vec<NewVisit>>,
}

impl InMemoryVisitRepository {
    pub fn all(&self) -> Vec<NewVisit> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn create(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let visit = Visit::new(
            new_visit.ip_address.clone(),
            new_visit.country.clone(),
            new_visit.region_name.clone(),
            new_visit.city.clone(),
            new_visit.isp.clone(),
            Utc::now(),
        );
        self.rows.lock().unwrap().push(new_visit);
        Ok(visit)
    }

    async fn list_by_redirect(&self, redirect_id: i64) -> Result<Vec<Visit>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.redirect_id == redirect_id)
            .map(|v| {
                Visit::new(
                    v.ip_address.clone(),
                    v.country.clone(),
                    v.region_name.clone(),
                    v.city.clone(),
                    v.isp.clone(),
                    Utc::now(),
                )
            })
            .collect())
    }
}

// Fake gateways

pub struct FakeGeoLocator {
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeGeoLocator {
    pub fn working() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn queried_ips(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoLocator for FakeGeoLocator {
    async fn locate(&self, ip_address: &str) -> Result<Location, EnrichmentError> {
        self.calls.lock().unwrap().push(ip_address.to_string());

        if self.fail {
            return Err(EnrichmentError::Request("connection refused".to_string()));
        }

        Ok(Location {
            country: Some("Canada".to_string()),
            region_name: Some("Quebec".to_string()),
            city: Some("Montreal".to_string()),
            isp: Some("Le Groupe Videotron Ltee".to_string()),
        })
    }
}

pub struct FakeUrlLiveness {
    live: bool,
    probes: AtomicUsize,
}

impl FakeUrlLiveness {
    pub fn live() -> Self {
        Self {
            live: true,
            probes: AtomicUsize::new(0),
        }
    }

    pub fn dead() -> Self {
        Self {
            live: false,
            probes: AtomicUsize::new(0),
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlLiveness for FakeUrlLiveness {
    async fn check(&self, _url: &str) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.live
    }
}

// Test application

/// Every collaborator of a test state, kept for assertions.
pub struct TestApp {
    pub state: AppState,
    pub redirects: Arc<InMemoryRedirectRepository>,
    pub visits: Arc<InMemoryVisitRepository>,
    pub geo: Arc<FakeGeoLocator>,
    pub liveness: Arc<FakeUrlLiveness>,
}

pub fn options(mock_ip: Option<&str>) -> StateOptions {
    StateOptions {
        host: TEST_HOST.to_string(),
        mock_ip: mock_ip.map(str::to_string),
        allowed_origins: vec![
            ALLOWED_ORIGIN.to_string(),
            "https://www.tomontheinternet.com".to_string(),
            "http://127.0.0.1:8080/".to_string(),
        ],
    }
}

pub fn create_test_app(geo: FakeGeoLocator, liveness: FakeUrlLiveness) -> TestApp {
    create_test_app_with(geo, liveness, options(None))
}

pub fn create_test_app_with(
    geo: FakeGeoLocator,
    liveness: FakeUrlLiveness,
    options: StateOptions,
) -> TestApp {
    let redirects = Arc::new(InMemoryRedirectRepository::default());
    let visits = Arc::new(InMemoryVisitRepository::default());
    let geo = Arc::new(geo);
    let liveness = Arc::new(liveness);

    let state = AppState::new(
        redirects.clone(),
        visits.clone(),
        geo.clone(),
        liveness.clone(),
        options,
    );

    TestApp {
        state,
        redirects,
        visits,
        geo,
        liveness,
    }
}

// ConnectInfo injection

#[derive(Clone)]
pub struct MockConnectInfoLayer(pub SocketAddr);

impl Default for MockConnectInfoLayer {
    fn default() -> Self {
        Self("127.0.0.1:12345".parse().unwrap())
    }
}

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.0,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}

// Postgres fixtures

pub async fn create_test_redirect(pool: &PgPool, link: &str, url: &str, access_code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO redirects (link, url, access_code) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(link)
    .bind(url)
    .bind(access_code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_deleted_redirect(pool: &PgPool, link: &str, url: &str, access_code: &str) {
    sqlx::query(
        "INSERT INTO redirects (link, url, access_code, deleted_at) VALUES ($1, $2, $3, NOW())",
    )
    .bind(link)
    .bind(url)
    .bind(access_code)
    .execute(pool)
    .await
    .unwrap();
}

//! Validation of destination URLs.

use std::sync::Arc;

use url::Url;

use crate::domain::gateways::UrlLiveness;
use crate::error::UrlRejection;

/// Decides whether a candidate URL may be stored as a destination.
///
/// The URL must be an absolute `http`/`https` address with a host, and must
/// answer a live GET probe with a status in `[200, 400)` at validation time.
pub struct UrlValidator {
    liveness: Arc<dyn UrlLiveness>,
}

impl UrlValidator {
    /// Creates a new URL validator backed by the given probe.
    pub fn new(liveness: Arc<dyn UrlLiveness>) -> Self {
        Self { liveness }
    }

    /// Returns why `candidate` is unacceptable, or `None` if it is acceptable.
    ///
    /// The liveness probe only runs once the syntax check passes.
    pub async fn rejection(&self, candidate: &str) -> Option<UrlRejection> {
        if !is_absolute_http_url(candidate) {
            return Some(UrlRejection::Malformed);
        }

        if !self.liveness.check(candidate).await {
            return Some(UrlRejection::Unreachable);
        }

        None
    }

    /// Returns true if `candidate` is well-formed and live.
    ///
    /// Yes/no form of [`Self::rejection`]. Handlers use `rejection` to pick
    /// the error page.
    pub async fn is_acceptable(&self, candidate: &str) -> bool {
        self.rejection(candidate).await.is_none()
    }
}

/// Returns true if `candidate` parses as an absolute http(s) URL with a host.
pub fn is_absolute_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

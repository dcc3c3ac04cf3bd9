//! Liveness probe for destination URLs.

use async_trait::async_trait;

/// Checks whether a URL currently answers with a success or redirect status.
///
/// The result is time-of-check only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlLiveness: Send + Sync {
    /// Returns `true` when a GET to `url` responds with a status in `[200, 400)`.
    ///
    /// Network errors and timeouts yield `false`.
    async fn check(&self, url: &str) -> bool;
}

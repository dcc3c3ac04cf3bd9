//! Repository trait for redirect data access.

use crate::domain::entities::{NewRedirect, Redirect};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing redirects.
///
/// Every lookup only sees live rows: a redirect with `deleted_at` set is
/// invisible to all methods but stays in storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Stores a new redirect and assigns it a unique access code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WriteFailure`] on database errors, including a
    /// concurrent insert of the same live link.
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError>;

    /// Finds a live redirect by its link. Visits are not loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] on database errors.
    async fn find_by_link(&self, link: &str) -> Result<Option<Redirect>, AppError>;

    /// Finds a live redirect by its access code. Visits are not loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] on database errors.
    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Redirect>, AppError>;

    /// Soft-deletes the live redirect with the given access code.
    ///
    /// Returns the number of affected rows: `1` when deleted, `0` when no live
    /// redirect matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WriteFailure`] on database errors.
    async fn soft_delete_by_access_code(&self, access_code: &str) -> Result<u64, AppError>;

    /// Counts live redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] on database errors.
    async fn count_active(&self) -> Result<i64, AppError>;
}

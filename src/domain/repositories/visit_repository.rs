//! Repository trait for visit records.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visit tracking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Records a visit for an existing redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WriteFailure`] on database errors or when the
    /// referenced redirect does not exist.
    async fn create(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Lists all visits of a redirect in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] on database errors.
    async fn list_by_redirect(&self, redirect_id: i64) -> Result<Vec<Visit>, AppError>;
}

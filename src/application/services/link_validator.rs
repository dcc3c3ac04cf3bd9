//! Validation of user-chosen links.

use std::sync::Arc;

use crate::domain::repositories::RedirectRepository;
use crate::error::{AppError, LinkRejection};
use crate::utils::link_rules::check_static_rules;

/// Decides whether a candidate link may be assigned to a new redirect.
///
/// A link is acceptable when it matches the format, is not a reserved word,
/// and is not bound to a live redirect. A soft-deleted redirect releases its
/// link.
pub struct LinkValidator {
    redirect_repository: Arc<dyn RedirectRepository>,
}

impl LinkValidator {
    /// Creates a new link validator.
    pub fn new(redirect_repository: Arc<dyn RedirectRepository>) -> Self {
        Self {
            redirect_repository,
        }
    }

    /// Returns the first rule `candidate` violates, or `None` if it is acceptable.
    ///
    /// Storage is only consulted when the static rules pass.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] if the uniqueness lookup fails.
    pub async fn rejection(&self, candidate: &str) -> Result<Option<LinkRejection>, AppError> {
        if let Err(rejection) = check_static_rules(candidate) {
            return Ok(Some(rejection));
        }

        let existing = self.redirect_repository.find_by_link(candidate).await?;

        Ok(existing.map(|_| LinkRejection::Taken))
    }

    /// Returns true if `candidate` passes every rule.
    ///
    /// Yes/no form of [`Self::rejection`] for callers that only need the
    /// verdict, such as scripted checks of a slug. Handlers use `rejection`
    /// to pick the error page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReadFailure`] if the uniqueness lookup fails.
    pub async fn is_acceptable(&self, candidate: &str) -> Result<bool, AppError> {
        Ok(self.rejection(candidate).await?.is_none())
    }
}

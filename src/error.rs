//! Application error taxonomy and its HTML rendering.
//!
//! Validation failures re-render the creation form with the rejected values,
//! lookups that miss render the not-found page, and every other failure
//! collapses into the generic failure page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::web::pages::{CreateTemplate, FailureTemplate, NotFoundTemplate};

/// Why a candidate link was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LinkRejection {
    #[error("links must be at least 3 characters of a-z, 0-9 or '-'")]
    Format,

    #[error("this link is reserved")]
    Reserved,

    #[error("this link is already taken")]
    Taken,
}

/// Why a candidate destination URL was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlRejection {
    #[error("the URL is not an absolute http(s) address")]
    Malformed,

    #[error("the URL did not respond with a success status")]
    Unreachable,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    ReadFailure { message: String, details: Value },

    #[error("{message}")]
    WriteFailure { message: String, details: Value },

    /// A targeted update matched zero rows.
    #[error("{message}")]
    NoRowsAffected { message: String, details: Value },

    #[error("invalid link '{link}': {reason}")]
    InvalidLink {
        link: String,
        url: String,
        reason: LinkRejection,
    },

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl {
        link: String,
        url: String,
        reason: UrlRejection,
    },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn read_failure(message: impl Into<String>, details: Value) -> Self {
        Self::ReadFailure {
            message: message.into(),
            details,
        }
    }

    pub fn write_failure(message: impl Into<String>, details: Value) -> Self {
        Self::WriteFailure {
            message: message.into(),
            details,
        }
    }

    pub fn no_rows_affected(message: impl Into<String>, details: Value) -> Self {
        Self::NoRowsAffected {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_link(
        link: impl Into<String>,
        url: impl Into<String>,
        reason: LinkRejection,
    ) -> Self {
        Self::InvalidLink {
            link: link.into(),
            url: url.into(),
            reason,
        }
    }

    pub fn invalid_url(
        link: impl Into<String>,
        url: impl Into<String>,
        reason: UrlRejection,
    ) -> Self {
        Self::InvalidUrl {
            link: link.into(),
            url: url.into(),
            reason,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for the two validation variants.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidLink { .. } | Self::InvalidUrl { .. })
    }

    /// Status code used when this error is rendered as a page.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidLink { .. } | AppError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::ReadFailure { .. }
            | AppError::WriteFailure { .. }
            | AppError::NoRowsAffected { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::NotFound { message, details } => {
                tracing::debug!(%message, %details, "Rendering not-found page");
                (status, NotFoundTemplate {}).into_response()
            }
            AppError::InvalidLink { link, url, reason } => {
                tracing::info!(%link, %url, ?reason, "Rejected link");
                (status, CreateTemplate::invalid_link(link, url)).into_response()
            }
            AppError::InvalidUrl { link, url, reason } => {
                tracing::info!(%link, %url, ?reason, "Rejected url");
                (status, CreateTemplate::invalid_url(link, url)).into_response()
            }
            AppError::ReadFailure { message, details }
            | AppError::WriteFailure { message, details }
            | AppError::NoRowsAffected { message, details }
            | AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Rendering failure page");
                (status, FailureTemplate {}).into_response()
            }
        }
    }
}

//! Mapping of SQLx errors into application errors.
//!
//! Repositories never leak `sqlx::Error`: reads become
//! [`AppError::ReadFailure`] (or [`AppError::NotFound`] for a missing row),
//! writes become [`AppError::WriteFailure`].
//! Both are logged here so callers only decide the user-facing outcome.

use serde_json::json;

use crate::error::AppError;

/// Partial unique index guarding live links.
pub const LIVE_LINK_INDEX: &str = "redirects_live_link_key";

/// Maps an error from a read query.
pub fn read_failure(operation: &'static str, e: sqlx::Error) -> AppError {
    if matches!(e, sqlx::Error::RowNotFound) {
        return AppError::not_found("Row not found", json!({ "operation": operation }));
    }

    tracing::error!(operation, error = %e, "Database read failed");
    AppError::read_failure("Read from database failed", json!({ "operation": operation }))
}

/// Maps an error from a write statement.
pub fn write_failure(operation: &'static str, e: sqlx::Error) -> AppError {
    if is_unique_violation_on_link(&e) {
        tracing::warn!(operation, "Live link already exists");
        return AppError::write_failure(
            "Write to database failed",
            json!({ "operation": operation, "constraint": LIVE_LINK_INDEX }),
        );
    }

    tracing::error!(operation, error = %e, "Database write failed");
    AppError::write_failure("Write to database failed", json!({ "operation": operation }))
}

/// Returns true if `e` is a unique violation of the live link index.
///
/// Happens when two submissions race for the same link past validation.
pub fn is_unique_violation_on_link(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LIVE_LINK_INDEX))
}

//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Every redirect lookup filters on `deleted_at IS NULL`.
//!
//! # Repositories
//!
//! - [`PgRedirectRepository`] - Redirect storage, lookup and soft deletion
//! - [`PgVisitRepository`] - Visit storage and history

pub mod pg_redirect_repository;
pub mod pg_visit_repository;

pub use pg_redirect_repository::PgRedirectRepository;
pub use pg_visit_repository::PgVisitRepository;

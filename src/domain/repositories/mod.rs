//! Repository trait definitions for the domain layer.
//!
//! Traits define the persistence contract; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`RedirectRepository`] - Redirect creation, lookup and soft deletion
//! - [`VisitRepository`] - Append-only visit records

pub mod redirect_repository;
pub mod visit_repository;

pub use redirect_repository::RedirectRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;

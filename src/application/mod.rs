//! Application layer services implementing business logic.
//!
//! Services consume repository and gateway traits and provide a clean API
//! for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_validator::LinkValidator`] - Link format, reservation and uniqueness
//! - [`services::url_validator::UrlValidator`] - Destination syntax and liveness
//! - [`services::redirect_service::RedirectService`] - Creation, resolution, viewing and deletion
//! - [`services::visit_service::VisitService`] - Best-effort enrichment and visit recording

pub mod services;

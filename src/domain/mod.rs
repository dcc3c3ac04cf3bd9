//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Persistence trait definitions
//! - [`gateways`] - Outbound network trait definitions (geolocation, URL liveness)
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules are implemented by the services in
//! [`crate::application::services`].

pub mod entities;
pub mod gateways;
pub mod repositories;

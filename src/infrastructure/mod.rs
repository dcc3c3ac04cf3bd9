//! Infrastructure layer for external integrations.
//!
//! Implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Outbound HTTP gateways (geolocation, URL liveness)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod http;
pub mod persistence;

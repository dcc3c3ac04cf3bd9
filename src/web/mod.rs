//! Web layer: HTML pages, the `/identify` JSON endpoint and CORS handling.
//!
//! Pages are rendered server-side with Askama templates compiled into the
//! binary. Static assets are served from `static/`.
//!
//! # Modules
//!
//! - [`dto`] - Form input and JSON output shapes
//! - [`handlers`] - Request handlers
//! - [`middleware`] - CORS preflight and request tracing
//! - [`pages`] - Template view-models
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;

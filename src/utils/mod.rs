//! Utility functions shared by the service, persistence and web layers.
//!
//! - [`access_code`] - Access code generation and format checks
//! - [`link_rules`] - Link format and reserved word rules
//! - [`client_ip`] - Client address normalization
//! - [`db_error`] - Mapping of SQLx errors into [`crate::error::AppError`]

pub mod access_code;
pub mod client_ip;
pub mod db_error;
pub mod link_rules;

//! Business logic services for the application layer.

pub mod link_validator;
pub mod redirect_service;
pub mod url_validator;
pub mod visit_service;

pub use link_validator::LinkValidator;
pub use redirect_service::{RedirectService, Resolution};
pub use url_validator::UrlValidator;
pub use visit_service::{IdentifiedVisitor, VisitService};

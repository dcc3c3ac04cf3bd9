//! Request handlers for the HTML surface and `/identify`.

pub mod create;
pub mod identify;
pub mod manage;
pub mod redirect;
pub mod status;

pub use create::{create_form_handler, create_redirect_handler};
pub use identify::identify_handler;
pub use manage::{delete_redirect_handler, view_redirect_handler};
pub use redirect::redirect_handler;
pub use status::{deleted_handler, failure_handler, not_found_handler};

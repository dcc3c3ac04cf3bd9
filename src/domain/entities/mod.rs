//! Core domain entities.
//!
//! - [`Redirect`] - A stored mapping from a link to a destination URL
//! - [`Visit`] - One recorded traversal of a redirect
//!
//! Creation inputs live in separate structs (`NewRedirect`, `NewVisit`);
//! ids, access codes and timestamps are assigned by the persistence layer.

pub mod redirect;
pub mod visit;

pub use redirect::{NewRedirect, Redirect};
pub use visit::{NewVisit, Visit};

//! Rules a link must satisfy independently of storage state.
//!
//! Links share the URL namespace with the application's fixed routes, so the
//! words claimed by those routes can never be used as links.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::LinkRejection;

/// Compiled regex for the link format: at least three of `[a-z0-9-]`.
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]{3,}$").expect("link regex is valid"));

/// Words that can never be used as links.
///
/// Covers every fixed route segment plus a few legacy and brand words.
/// Matched case-sensitively.
pub const RESERVED_WORDS: &[&str] = &[
    "tomlink",
    "deleted",
    "failure",
    "static",
    "redirects",
    "redirect",
    "delete",
    "404",
    "not-found",
    "identify",
];

/// Returns true if `candidate` matches the link format.
pub fn is_link_format(candidate: &str) -> bool {
    LINK_REGEX.is_match(candidate)
}

/// Returns true if `candidate` is one of [`RESERVED_WORDS`].
pub fn is_reserved_word(candidate: &str) -> bool {
    RESERVED_WORDS.contains(&candidate)
}

/// Checks the storage-independent rules: format first, then reservation.
///
/// # Errors
///
/// Returns the first [`LinkRejection`] the candidate violates.
pub fn check_static_rules(candidate: &str) -> Result<(), LinkRejection> {
    if !is_link_format(candidate) {
        return Err(LinkRejection::Format);
    }

    if is_reserved_word(candidate) {
        return Err(LinkRejection::Reserved);
    }

    Ok(())
}

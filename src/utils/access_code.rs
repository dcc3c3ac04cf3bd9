//! Access code generation.
//!
//! Access codes are the public handle for viewing and deleting a redirect.
//! They are lowercase hex so they can be matched by the management routes.

/// Number of random bytes in an access code (32 hex characters).
const ACCESS_CODE_BYTES: usize = 16;

/// Generates a random lowercase hex access code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_access_code() -> String {
    let mut buffer = [0u8; ACCESS_CODE_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Returns true if `candidate` is a non-empty run of `[a-f0-9]`.
pub fn is_access_code_format(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

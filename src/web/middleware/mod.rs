//! Cross-cutting middleware applied to the whole router.

pub mod cors;
pub mod tracing;

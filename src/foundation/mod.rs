//! Shared value types, numeric helpers, and the crate error type.

pub mod core;
pub mod error;
pub(crate) mod math;

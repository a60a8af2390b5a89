//! Domain layer - the result value algebra
//!
//! This layer contains:
//! - The `Result` type and everything derived from its elimination
//! - The shared kernel: variant tag, misuse errors, placeholder payloads

pub mod result;
pub mod shared;

// Re-export commonly used types
pub use result::Result;
pub use shared::{Failure, ResultError, Variant};

//! Resultant - an explicit success-or-failure value type
//!
//! `Result<V, E>` holds either an `Okay` payload or an `Error` payload and
//! comes with combinators for composing fallible computations without
//! panics as control flow:
//! - Domain layer: the `Result` type, its combinators and composition
//! - Infrastructure layer: the bridge that turns panics into `Error` values
//! - Config: bridge settings loaded from TOML and the environment

pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::result::sequence::{errors, values, values_or_panic};
pub use domain::result::{Combined, Error, Okay, Result};
pub use domain::shared::{Checked, Failure, ResultError, Variant};
pub use infrastructure::bridge::{try_action, try_catch, try_function, Bridge};

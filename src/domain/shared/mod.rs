//! Shared kernel - types used by every part of the result algebra

pub mod error;
pub mod failure;
pub mod variant;

pub use error::{Checked, ResultError};
pub use failure::Failure;
pub use variant::Variant;

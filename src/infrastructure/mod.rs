//! Infrastructure layer - boundaries with code outside the result algebra
//!
//! This layer contains:
//! - The bridge converting unwinding panics into `Error` values

pub mod bridge;

pub use bridge::Bridge;

//! Variant tag shared by results and diagnostics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which payload a [`Result`](crate::Result) holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Success payload
    Okay,
    /// Failure payload
    Error,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Okay => write!(f, "Okay"),
            Variant::Error => write!(f, "Error"),
        }
    }
}

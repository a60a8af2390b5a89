//! Placeholder error payload for results that carry no meaningful error value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Error payload with at most a diagnostic message.
///
/// Two failures are equal when their messages are equal. The hash is a
/// constant so that it stays consistent with equality no matter how the
/// message was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    message: Option<String>,
}

const FAILURE_HASH: u64 = 3221 * 5039;

impl Failure {
    /// Failure without a diagnostic
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(FAILURE_HASH);
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "Error: {}", message),
            None => write!(f, "Error"),
        }
    }
}

//! Programmer-error conditions

use super::variant::Variant;
use thiserror::Error;

/// Result type for the checked construction and extraction APIs
pub type Checked<T> = std::result::Result<T, ResultError>;

/// Misuse of the [`Result`](crate::Result) API.
///
/// These never describe a domain failure. Domain failures travel as the
/// `Error` variant of a `Result`; a `ResultError` means the caller broke
/// an invariant and is either returned by a checked API or rendered into
/// a panic by the `*_or_panic` family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    #[error("Invalid construction: the {variant} payload is absent")]
    InvalidConstruction { variant: Variant },

    #[error("Wrong variant access: expected {expected}{}", render_message(.message))]
    WrongVariantAccess {
        expected: Variant,
        message: Option<String>,
    },
}

impl ResultError {
    pub fn wrong_variant(expected: Variant, message: Option<&str>) -> Self {
        Self::WrongVariantAccess {
            expected,
            message: message.map(str::to_owned),
        }
    }
}

fn render_message(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_construction_display() {
        let err = ResultError::InvalidConstruction {
            variant: Variant::Okay,
        };
        assert_eq!(
            err.to_string(),
            "Invalid construction: the Okay payload is absent"
        );
    }

    #[test]
    fn test_wrong_variant_display() {
        let bare = ResultError::wrong_variant(Variant::Error, None);
        assert_eq!(bare.to_string(), "Wrong variant access: expected Error");

        let with_message = ResultError::wrong_variant(Variant::Okay, Some("config missing"));
        assert_eq!(
            with_message.to_string(),
            "Wrong variant access: expected Okay: config missing"
        );
    }
}

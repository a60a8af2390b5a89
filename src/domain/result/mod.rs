//! The `Result` value type
//!
//! A tagged union holding either a success payload (`Okay`) or a failure
//! payload (`Error`), never both and never neither. Everything else in this
//! module tree is built on [`Result::match_with`]:
//! - `combinators`: map, bind, recovery, extraction, membership, projection
//! - `contract`: equality, hashing, rendering, conversions
//! - `iter`: the zero-or-one element view over the success payload
//! - `combine`: applicative composition into growing tuples
//! - `sequence`: helpers over collections of results

pub mod combinators;
pub mod combine;
pub mod contract;
pub mod iter;
pub mod sequence;

pub use combine::Combined;
pub use contract::{Error, Okay};
pub use iter::{IntoIter, Iter};

use crate::domain::shared::{Checked, ResultError, Variant};

/// Outcome of a fallible computation.
///
/// A value is immutable once built: every operation either consumes it and
/// returns a fresh `Result` or only reads it.
#[derive(Debug, Clone, Copy)]
#[must_use = "this `Result` may be an `Error` variant, which should be handled"]
pub enum Result<V, E> {
    /// Success payload
    Okay(V),
    /// Failure payload
    Error(E),
}

impl<V, E> Result<V, E> {
    pub fn okay(value: V) -> Self {
        Result::Okay(value)
    }

    pub fn error(error: E) -> Self {
        Result::Error(error)
    }

    /// Build an `Okay` from a payload that may be absent.
    ///
    /// An absent payload is a construction error, never an empty `Okay`.
    pub fn try_okay(value: Option<V>) -> Checked<Self> {
        value
            .map(Result::Okay)
            .ok_or(ResultError::InvalidConstruction {
                variant: Variant::Okay,
            })
    }

    /// Build an `Error` from a payload that may be absent.
    pub fn try_error(error: Option<E>) -> Checked<Self> {
        error
            .map(Result::Error)
            .ok_or(ResultError::InvalidConstruction {
                variant: Variant::Error,
            })
    }

    pub fn is_okay(&self) -> bool {
        matches!(self, Result::Okay(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_okay()
    }

    pub fn variant(&self) -> Variant {
        match self {
            Result::Okay(_) => Variant::Okay,
            Result::Error(_) => Variant::Error,
        }
    }

    /// Total case analysis.
    ///
    /// Exactly one of the two closures runs, on the caller's thread, before
    /// this returns. The other is dropped without being called.
    pub fn match_with<R>(self, on_okay: impl FnOnce(V) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Result::Okay(value) => on_okay(value),
            Result::Error(error) => on_error(error),
        }
    }

    /// Borrow both payloads, e.g. to `match_with` without consuming.
    pub fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Result::Okay(value) => Result::Okay(value),
            Result::Error(error) => Result::Error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_variant() {
        let okay: Result<&str, i32> = Result::okay("is okay");
        assert!(okay.is_okay());
        assert!(!okay.is_error());
        assert_eq!(okay.variant(), Variant::Okay);

        let error: Result<i32, &str> = Result::error("is error");
        assert!(error.is_error());
        assert!(!error.is_okay());
        assert_eq!(error.variant(), Variant::Error);
    }

    #[test]
    fn test_same_payload_type() {
        let okay: Result<i32, i32> = Result::okay(2);
        let error: Result<i32, i32> = Result::error(2);

        assert!(okay.is_okay());
        assert!(error.is_error());
    }

    #[test]
    fn test_absent_payload_rejected() {
        let okay = Result::<String, String>::try_okay(None);
        assert_eq!(
            okay.unwrap_err(),
            ResultError::InvalidConstruction {
                variant: Variant::Okay
            }
        );

        let error = Result::<String, String>::try_error(None);
        assert_eq!(
            error.unwrap_err(),
            ResultError::InvalidConstruction {
                variant: Variant::Error
            }
        );
    }

    #[test]
    fn test_present_payload_accepted() {
        let okay = Result::<String, i32>::try_okay(Some("a".to_string())).unwrap();
        assert!(okay.contains(&"a".to_string()));

        let error = Result::<String, i32>::try_error(Some(7)).unwrap();
        assert!(error.contains_error(&7));
    }

    #[test]
    fn test_match_runs_only_okay_branch() {
        let mut executed = false;
        let result: Result<&str, i32> = Result::okay("okay");

        result.match_with(|_| executed = true, |_| panic!("error branch evaluated"));

        assert!(executed);
    }

    #[test]
    fn test_match_runs_only_error_branch() {
        let mut executed = false;
        let result: Result<&str, i32> = Result::error(0);

        result.match_with(|_| panic!("okay branch evaluated"), |_| executed = true);

        assert!(executed);
    }

    #[test]
    fn test_match_returns_value() {
        let result: Result<i32, String> = Result::okay(20);
        let doubled = result.match_with(|v| v * 2, |e| e.len() as i32);
        assert_eq!(doubled, 40);
    }

    #[test]
    fn test_as_ref_keeps_original() {
        let result: Result<String, String> = Result::error("bad".to_string());
        let len = result.as_ref().match_with(|v| v.len(), |e| e.len());
        assert_eq!(len, 3);
        assert!(result.contains_error(&"bad".to_string()));
    }
}

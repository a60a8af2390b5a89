//! Combinators derived from `match_with`

use super::Result;
use crate::domain::shared::{Checked, ResultError, Variant};
use tracing::error;

impl<V, E> Result<V, E> {
    /// Run `action` on the success payload; no-op on `Error`.
    pub fn match_okay(&self, action: impl FnOnce(&V)) {
        self.as_ref().match_with(action, |_| {})
    }

    /// Run `action` on the error payload; no-op on `Okay`.
    pub fn match_error(&self, action: impl FnOnce(&E)) {
        self.as_ref().match_with(|_| {}, action)
    }

    pub fn map<V2>(self, f: impl FnOnce(V) -> V2) -> Result<V2, E> {
        self.match_with(|value| Result::Okay(f(value)), Result::Error)
    }

    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Result<V, E2> {
        self.match_with(Result::Okay, |error| Result::Error(f(error)))
    }

    /// Monadic bind. `f` only runs on `Okay`; an `Error` is returned as is.
    pub fn and_then<V2>(self, f: impl FnOnce(V) -> Result<V2, E>) -> Result<V2, E> {
        self.match_with(f, Result::Error)
    }

    /// Keep `Okay`, otherwise fall back to `alternative`.
    pub fn or<E2>(self, alternative: Result<V, E2>) -> Result<V, E2> {
        self.match_with(Result::Okay, |_| alternative)
    }

    /// Keep `Okay`, otherwise recover from the error payload.
    pub fn or_else<E2>(self, f: impl FnOnce(E) -> Result<V, E2>) -> Result<V, E2> {
        self.match_with(Result::Okay, f)
    }

    /// Keep `Okay`, otherwise recover without looking at the error.
    pub fn or_else_with<E2>(self, f: impl FnOnce() -> Result<V, E2>) -> Result<V, E2> {
        self.match_with(Result::Okay, |_| f())
    }

    pub fn value_or(self, default: V) -> V {
        self.match_with(|value| value, |_| default)
    }

    pub fn value_or_else(self, f: impl FnOnce(E) -> V) -> V {
        self.match_with(|value| value, f)
    }

    /// The success payload, or `WrongVariantAccess` on `Error`.
    pub fn into_value(self) -> Checked<V> {
        self.match_with(Ok, |_| Err(ResultError::wrong_variant(Variant::Okay, None)))
    }

    /// The error payload, or `WrongVariantAccess` on `Okay`.
    pub fn into_error(self) -> Checked<E> {
        self.match_with(|_| Err(ResultError::wrong_variant(Variant::Error, None)), Ok)
    }

    /// Extract the success payload of a result that must be `Okay`.
    ///
    /// # Panics
    ///
    /// Panics with a `WrongVariantAccess` diagnostic, carrying `message`, if
    /// the result is `Error`. Callers that can see either variant should use
    /// [`match_with`](Result::match_with) or [`value_or`](Result::value_or).
    #[track_caller]
    pub fn value_or_panic(self, message: Option<&str>) -> V {
        match self {
            Result::Okay(value) => value,
            Result::Error(_) => misuse(ResultError::wrong_variant(Variant::Okay, message)),
        }
    }

    /// Extract the error payload of a result that must be `Error`.
    ///
    /// # Panics
    ///
    /// Panics with a `WrongVariantAccess` diagnostic if the result is `Okay`.
    #[track_caller]
    pub fn error_or_panic(self, message: Option<&str>) -> E {
        match self {
            Result::Okay(_) => misuse(ResultError::wrong_variant(Variant::Error, message)),
            Result::Error(error) => error,
        }
    }

    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.as_ref().match_with(|okay| okay == value, |_| false)
    }

    pub fn contains_error(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        self.as_ref().match_with(|_| false, |err| err == error)
    }

    /// Project the success payload into an `Option`.
    pub fn okay_value(self) -> Option<V> {
        self.match_with(Some, |_| None)
    }

    /// Project the error payload into an `Option`.
    pub fn error_value(self) -> Option<E> {
        self.match_with(|_| None, Some)
    }
}

#[track_caller]
fn misuse(err: ResultError) -> ! {
    error!(error = %err, "result accessed as the wrong variant");
    panic!("{}", err)
}

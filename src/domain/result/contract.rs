//! Equality, hashing, rendering and conversions

use super::Result;
use std::fmt;
use std::hash::{Hash, Hasher};

const OKAY_SALT: u32 = 2633;
const ERROR_SALT: u32 = 3137;

/// Explicit tag for converting a bare value into an `Okay` result.
///
/// There is no untagged conversion: with `Result<i32, i32>` a bare `2`
/// could mean either variant, so the variant is always spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Okay<V>(pub V);

/// Explicit tag for converting a bare value into an `Error` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error<E>(pub E);

impl<V, E> From<Okay<V>> for Result<V, E> {
    fn from(tag: Okay<V>) -> Self {
        Result::Okay(tag.0)
    }
}

impl<V, E> From<Error<E>> for Result<V, E> {
    fn from(tag: Error<E>) -> Self {
        Result::Error(tag.0)
    }
}

impl<V, E> From<std::result::Result<V, E>> for Result<V, E> {
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Result::Okay(value),
            Err(error) => Result::Error(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for std::result::Result<V, E> {
    fn from(result: Result<V, E>) -> Self {
        result.match_with(Ok, Err)
    }
}

/// A defaulted result is an `Error` holding the default error payload.
impl<V, E: Default> Default for Result<V, E> {
    fn default() -> Self {
        Result::Error(E::default())
    }
}

impl<V: PartialEq, E: PartialEq> PartialEq for Result<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref()
            .match_with(|okay| other.contains(okay), |error| other.contains_error(error))
    }
}

impl<V: Eq, E: Eq> Eq for Result<V, E> {}

impl<V: Hash, E: Hash> Hash for Result<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Result::Okay(value) => {
                state.write_u32(OKAY_SALT);
                value.hash(state);
            }
            Result::Error(error) => {
                state.write_u32(ERROR_SALT);
                error.hash(state);
            }
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Result<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Okay(value) => write!(f, "Okay({})", value),
            Result::Error(error) => write!(f, "Error({})", error),
        }
    }
}

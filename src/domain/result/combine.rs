//! Applicative composition
//!
//! Results that share an error type are folded left to right into one
//! tuple-valued result:
//!
//! ```
//! use resultant::Result;
//!
//! let count: Result<u32, String> = Result::okay(3);
//! let label: Result<&str, String> = Result::okay("widgets");
//! let enabled: Result<bool, String> = Result::okay(true);
//!
//! let combined = count.combine_with(label).combine_with(enabled);
//! assert!(combined.contains(&(3, "widgets", true)));
//! assert_eq!(combined.to_string(), "Okay((3, widgets, true))");
//! ```
//!
//! The first `Error` in the chain wins and is carried to the end unchanged.
//! With the `_fn` forms the operands after it are never evaluated.

use super::iter::IntoIter;
use super::Result;
use std::fmt;
use std::ops::Deref;

/// Accumulator for a `combine_with` chain.
///
/// Wraps the tuple-valued `Result` built so far. It offers the consuming
/// elimination API of `Result` directly, dereferences to it for the
/// borrowing one, and converts into it with
/// [`into_result`](Combined::into_result). Chains grow up to six elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "this `Combined` may hold an `Error` variant, which should be handled"]
pub struct Combined<T, E>(Result<T, E>);

impl<T, E> Combined<T, E> {
    /// The tuple-valued `Result` built so far.
    ///
    /// This ends the flat chain: `combine_with` on the returned `Result`
    /// pairs the whole tuple with the next payload, giving `((A, B), C)`
    /// rather than `(A, B, C)`.
    pub fn into_result(self) -> Result<T, E> {
        self.0
    }

    pub fn match_with<R>(self, on_okay: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R {
        self.0.match_with(on_okay, on_error)
    }

    pub fn map<V2>(self, f: impl FnOnce(T) -> V2) -> Result<V2, E> {
        self.0.map(f)
    }

    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Result<T, E2> {
        self.0.map_error(f)
    }

    pub fn and_then<V2>(self, f: impl FnOnce(T) -> Result<V2, E>) -> Result<V2, E> {
        self.0.and_then(f)
    }

    pub fn value_or(self, default: T) -> T {
        self.0.value_or(default)
    }

    pub fn okay_value(self) -> Option<T> {
        self.0.okay_value()
    }

    pub fn error_value(self) -> Option<E> {
        self.0.error_value()
    }
}

impl<T, E> Deref for Combined<T, E> {
    type Target = Result<T, E>;

    fn deref(&self) -> &Result<T, E> {
        &self.0
    }
}

impl<T, E> From<Combined<T, E>> for Result<T, E> {
    fn from(combined: Combined<T, E>) -> Self {
        combined.0
    }
}

impl<T, E> PartialEq<Result<T, E>> for Combined<T, E>
where
    T: PartialEq,
    E: PartialEq,
{
    fn eq(&self, other: &Result<T, E>) -> bool {
        self.0 == *other
    }
}

impl<T, E> IntoIterator for Combined<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.0.into_iter()
    }
}

impl<V, E> Result<V, E> {
    /// Pair this result with an already computed one.
    pub fn combine_with<B>(self, other: Result<B, E>) -> Combined<(V, B), E> {
        Combined(self.and_then(|a| other.map(|b| (a, b))))
    }

    /// Pair this result with one computed on demand. `f` runs only if
    /// `self` is `Okay`.
    pub fn combine_with_fn<B>(self, f: impl FnOnce() -> Result<B, E>) -> Combined<(V, B), E> {
        Combined(self.and_then(|a| f().map(|b| (a, b))))
    }
}

macro_rules! combine_step {
    ($(($ty:ident, $val:ident)),+ => ($next:ident, $next_val:ident)) => {
        impl<$($ty,)+ E> Combined<($($ty,)+), E> {
            /// Append an already computed result to the tuple.
            pub fn combine_with<$next>(
                self,
                other: Result<$next, E>,
            ) -> Combined<($($ty,)+ $next,), E> {
                Combined(
                    self.0
                        .and_then(|($($val,)+)| other.map(|$next_val| ($($val,)+ $next_val,))),
                )
            }

            /// Append a result computed on demand. `f` runs only if every
            /// earlier operand was `Okay`.
            pub fn combine_with_fn<$next>(
                self,
                f: impl FnOnce() -> Result<$next, E>,
            ) -> Combined<($($ty,)+ $next,), E> {
                Combined(
                    self.0
                        .and_then(|($($val,)+)| f().map(|$next_val| ($($val,)+ $next_val,))),
                )
            }
        }
    };
}

/// Renders `Okay((a, b, ..))` with each element's `Display`, or `Error(e)`.
macro_rules! combined_display {
    ($(($ty:ident, $val:ident)),+) => {
        impl<$($ty: fmt::Display,)+ E: fmt::Display> fmt::Display for Combined<($($ty,)+), E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    Result::Okay(($($val,)+)) => {
                        let items = [$($val.to_string()),+];
                        write!(f, "Okay(({}))", items.join(", "))
                    }
                    Result::Error(error) => write!(f, "Error({})", error),
                }
            }
        }
    };
}

combined_display!((T1, t1), (T2, t2));
combined_display!((T1, t1), (T2, t2), (T3, t3));
combined_display!((T1, t1), (T2, t2), (T3, t3), (T4, t4));
combined_display!((T1, t1), (T2, t2), (T3, t3), (T4, t4), (T5, t5));
combined_display!((T1, t1), (T2, t2), (T3, t3), (T4, t4), (T5, t5), (T6, t6));

combine_step!((T1, t1), (T2, t2) => (T3, t3));
combine_step!((T1, t1), (T2, t2), (T3, t3) => (T4, t4));
combine_step!((T1, t1), (T2, t2), (T3, t3), (T4, t4) => (T5, t5));
combine_step!((T1, t1), (T2, t2), (T3, t3), (T4, t4), (T5, t5) => (T6, t6));

//! Helpers over collections of results

use super::Result;

/// Success payloads of `results`, in order, skipping errors.
pub fn values<V, E>(results: impl IntoIterator<Item = Result<V, E>>) -> impl Iterator<Item = V> {
    results.into_iter().filter_map(Result::okay_value)
}

/// Error payloads of `results`, in order, skipping successes.
pub fn errors<V, E>(results: impl IntoIterator<Item = Result<V, E>>) -> impl Iterator<Item = E> {
    results.into_iter().filter_map(Result::error_value)
}

/// Every success payload of `results`, which must all be `Okay`.
///
/// # Panics
///
/// Panics on the first `Error`, like [`Result::value_or_panic`].
#[track_caller]
pub fn values_or_panic<V, E>(
    results: impl IntoIterator<Item = Result<V, E>>,
    message: Option<&str>,
) -> Vec<V> {
    results
        .into_iter()
        .map(|result| result.value_or_panic(message))
        .collect()
}

/// Collect into `Okay(container)`, or stop at the first `Error`.
impl<V, E, C> FromIterator<Result<V, E>> for Result<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Result<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|result| match result {
                Result::Okay(value) => Some(value),
                Result::Error(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Result::Error(error),
            None => Result::Okay(collected),
        }
    }
}

//! Iteration over the success payload

use super::Result;
use std::iter::FusedIterator;

/// Borrowing iterator over the success payload: one item for `Okay`, none
/// for `Error`. Cloning it, or calling [`Result::iter`] again, restarts the
/// sequence.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

/// Owning iterator over the success payload.
#[derive(Debug, Clone)]
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V, E> Result<V, E> {
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.as_ref().okay_value(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.take()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<V, E> IntoIterator for Result<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            inner: self.okay_value(),
        }
    }
}

impl<'a, V, E> IntoIterator for &'a Result<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_okay_yields_single_value() {
        let result: Result<&str, i32> = Result::okay("three");
        let items: Vec<_> = result.iter().collect();
        assert_eq!(items, vec![&"three"]);
        assert_eq!(result.iter().len(), 1);
    }

    #[test]
    fn test_error_yields_nothing() {
        let result: Result<&str, i32> = Result::error(1);
        assert_eq!(result.iter().next(), None);
        assert_eq!(result.iter().len(), 0);
        assert_eq!(result.into_iter().count(), 0);
    }

    #[test]
    fn test_iteration_restarts() {
        let result: Result<u32, ()> = Result::okay(4);
        let iter = result.iter();
        let first: u32 = iter.clone().copied().sum();
        let second: u32 = iter.copied().sum();
        assert_eq!(first, 4);
        assert_eq!(second, 4);

        let mut total = 0;
        for _ in 0..3 {
            for value in &result {
                total += value;
            }
        }
        assert_eq!(total, 12);
    }

    #[test]
    fn test_iterator_is_fused() {
        let result: Result<u8, ()> = Result::okay(1);
        let mut iter = result.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_flatten_collection() {
        let results: Vec<Result<i32, &str>> =
            vec![Result::okay(1), Result::error("x"), Result::okay(3)];
        let values: Vec<i32> = results.into_iter().flatten().collect();
        assert_eq!(values, vec![1, 3]);
    }
}

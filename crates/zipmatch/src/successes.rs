//! Lazy projection of the successes in a sequence of results.

use std::iter::FusedIterator;

/// Iterator over the `Ok` values of an iterator of results.
///
/// Created by [`successes`] or [`SuccessesExt::successes`]. Errors are
/// skipped without being reported; the relative order of successes is kept.
/// The adapter is restartable (by cloning) exactly when the source is.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Successes<I> {
    inner: I,
}

impl<I> Successes<I> {
    /// Returns the underlying iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, T, E> Iterator for Successes<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.by_ref().find_map(Result::ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<I, T, E> DoubleEndedIterator for Successes<I>
where
    I: DoubleEndedIterator<Item = Result<T, E>>,
{
    fn next_back(&mut self) -> Option<T> {
        while let Some(item) = self.inner.next_back() {
            if let Ok(value) = item {
                return Some(value);
            }
        }
        None
    }
}

impl<I, T, E> FusedIterator for Successes<I> where I: FusedIterator<Item = Result<T, E>> {}

/// Projects `results` onto its successes.
///
/// # Examples
///
/// ```
/// use zipmatch::successes;
///
/// let parsed = ["1", "x", "2"].iter().map(|s| s.parse::<i32>());
/// assert_eq!(successes(parsed).collect::<Vec<_>>(), [1, 2]);
/// ```
pub fn successes<I, T, E>(results: I) -> Successes<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    Successes {
        inner: results.into_iter(),
    }
}

/// Method form of [`successes`] for any iterator of results.
pub trait SuccessesExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Skips errors, yielding only `Ok` values.
    fn successes(self) -> Successes<Self> {
        Successes { inner: self }
    }
}

impl<I, T, E> SuccessesExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}

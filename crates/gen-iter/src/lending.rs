/**
 * @file lending.rs
 * @author Krisna Pranav
 * @brief lending iterator
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

/// An iterator whose items may borrow from the iterator itself.
///
/// Positional states handed out by [`crate::Steps`] live inside the generator,
/// so they can only be lent out one step at a time.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;

    /// Drains the remaining steps into an accumulator.
    fn fold<B, F>(mut self, mut acc: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item<'_>) -> B,
    {
        while let Some(step) = self.next() {
            acc = f(acc, step);
        }
        acc
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |acc, _| acc + 1)
    }
}

/// Lends through a borrow, so consuming adapters such as `count` can drain
/// part of a [`crate::Steps`] that the caller keeps using afterwards.
impl<'s, L> LendingIterator for &'s mut L
where
    L: LendingIterator,
{
    type Item<'a> = L::Item<'a>
    where
        L: 'a,
        's: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        (**self).next()
    }
} // impl LendingIterator for &mut L

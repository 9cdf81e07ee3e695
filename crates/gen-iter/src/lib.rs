/**
 * @file lib.rs
 * @author Krisna Pranav
 * @brief lib[gen-iter]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

mod bridge;
mod cursor;
mod enumerate;
mod lending;
mod position;
mod range;
mod zip;

pub use bridge::{End, Iter, Steps};
pub use cursor::Cursor;
pub use enumerate::{enumerate, enumerate_from, Enumerate, EnumerateState};
pub use lending::LendingIterator;
pub use position::{Flatten, Get, Positional};
pub use range::{range, Range, RangeConfig};
pub use zip::{Nil, Zip, ZipIter, ZipMarkers, ZipState};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("range step must be non-zero")]
    ZeroStep,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Uniform state machine behind `range`, `enumerate` and `zip`.
///
/// A generator is positioned on its first step as soon as it is built and
/// reports `has_more() == false` right away when there is nothing to yield.
/// `current` may be called any number of times between two `advance` calls.
pub trait Generator {
    /// Borrowed view of the present step.
    type Current<'a>
    where
        Self: 'a;

    /// Owned value of the present step, produced by [`Generator::take`].
    type Output;

    fn current(&self) -> Self::Current<'_>;

    /// Panics when `has_more()` is false.
    fn advance(&mut self);

    fn has_more(&self) -> bool;

    /// Moves the present step out and advances past it.
    ///
    /// Panics when `has_more()` is false.
    fn take(&mut self) -> Self::Output;

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    fn begin(&mut self) -> Steps<'_, Self>
    where
        Self: Sized,
    {
        Steps::new(self)
    }

    fn end(&self) -> End {
        End
    }
}

impl<G> Generator for &mut G
where
    G: Generator,
{
    type Current<'a> = G::Current<'a>
    where
        Self: 'a;

    type Output = G::Output;

    fn current(&self) -> Self::Current<'_> {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn has_more(&self) -> bool {
        (**self).has_more()
    }

    fn take(&mut self) -> Self::Output {
        (**self).take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

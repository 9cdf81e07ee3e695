/**
 * @file zip.rs
 * @author Krisna Pranav
 * @brief zip
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::iter::FusedIterator;

use crate::{bridge::Iter, Cursor, Flatten, Generator, Get, Positional};

/// Terminates a [`ZipState`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nil;

/// One cursor per zipped sequence, nested as a head and the rest.
///
/// `get::<K>()` reads the `K`th sequence. Positions past the arity do not
/// compile:
///
/// ```compile_fail
/// use gen_iter::{zip, Generator};
///
/// let pairs = zip!([1, 2], ['a', 'b']);
/// let _ = pairs.current().get::<2>();
/// ```
pub struct ZipState<I, T>
where
    I: Iterator,
{
    head: Cursor<I>,
    tail: T,
}

impl<I, T> ZipState<I, T>
where
    I: Iterator,
{
    pub fn new(head: Cursor<I>, tail: T) -> Self {
        Self { head, tail }
    }

    #[inline]
    pub fn get<const N: usize>(&self) -> &<Self as Get<N>>::Output
    where
        Self: Get<N>,
    {
        Get::<N>::get_at(self)
    }
} // impl ZipState

/// Lockstep operations over a whole [`ZipState`] chain.
pub trait ZipMarkers {
    /// Owned items of one step as a right-nested cons, e.g. `(A, (B, ()))`.
    type Values;

    fn all_live(&self) -> bool;

    fn advance_all(&mut self);

    fn take_all(&mut self) -> Self::Values;

    fn size_hint(&self) -> (usize, Option<usize>);
}

impl ZipMarkers for Nil {
    type Values = ();

    #[inline]
    fn all_live(&self) -> bool {
        true
    }

    #[inline]
    fn advance_all(&mut self) {}

    #[inline]
    fn take_all(&mut self) -> Self::Values {}

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<I, T> ZipMarkers for ZipState<I, T>
where
    I: Iterator,
    T: ZipMarkers,
{
    type Values = (I::Item, T::Values);

    #[inline]
    fn all_live(&self) -> bool {
        !self.head.is_end() && self.tail.all_live()
    }

    #[inline]
    fn advance_all(&mut self) {
        self.head.advance();
        self.tail.advance_all();
    }

    #[inline]
    fn take_all(&mut self) -> Self::Values {
        let head = self.head.take();
        (head, self.tail.take_all())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (head_lower, head_upper) = self.head.size_hint();
        let (tail_lower, tail_upper) = self.tail.size_hint();

        let upper = match (head_upper, tail_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };

        (head_lower.min(tail_lower), upper)
    }
}

impl Positional for Nil {
    const ARITY: usize = 0;
}

impl<I, T> Positional for ZipState<I, T>
where
    I: Iterator,
    T: Positional,
{
    const ARITY: usize = 1 + T::ARITY;
}

impl<I, T> Get<0> for ZipState<I, T>
where
    I: Iterator,
{
    type Output = I::Item;

    #[inline]
    fn get_at(&self) -> &I::Item {
        self.head.get()
    }
}

// Position N of a chain is position N - 1 of its tail.
macro_rules! impl_zip_get {
    ($($n:literal => $prev:literal),+ $(,)?) => {$(
        impl<I, T> Get<$n> for ZipState<I, T>
        where
            I: Iterator,
            T: Get<$prev>,
        {
            type Output = <T as Get<$prev>>::Output;

            #[inline]
            fn get_at(&self) -> &Self::Output {
                Get::<$prev>::get_at(&self.tail)
            }
        }
    )+};
}

impl_zip_get!(
    1 => 0,
    2 => 1,
    3 => 2,
    4 => 3,
    5 => 4,
    6 => 5,
    7 => 6,
    8 => 7,
    9 => 8,
    10 => 9,
    11 => 10,
    12 => 11,
    13 => 12,
    14 => 13,
    15 => 14,
);

impl<I, T, V> std::fmt::Debug for ZipState<I, T>
where
    I: Iterator<Item = V>,
    V: std::fmt::Debug,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipState")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Walks several sequences in lockstep and stops at the shortest.
///
/// Built with [`zip!`](crate::zip!). Any number of sequences can be zipped.
/// [`Generator::take`] yields a step as a right-nested cons `(a, (b, ()))`,
/// and `into_iter` flattens it into `(a, b)` for up to sixteen sequences.
/// Positions `get::<0>()` through `get::<15>()` are readable on the state.
///
/// Every cursor runs one element ahead, so when the shortest sequence ends
/// the longer ones have already pulled their next element.
pub struct Zip<S> {
    state: S,
}

impl<S> Zip<S>
where
    S: ZipMarkers + Positional,
{
    pub fn new(state: S) -> Self {
        tracing::trace!(arity = S::ARITY, empty = !state.all_live(), "zip");
        Self { state }
    }
} // impl Zip

impl<S> Generator for Zip<S>
where
    S: ZipMarkers,
{
    type Current<'a> = &'a S
    where
        Self: 'a;

    type Output = S::Values;

    #[inline]
    fn current(&self) -> &S {
        assert!(self.has_more(), "zip read past its end");
        &self.state
    }

    #[inline]
    fn advance(&mut self) {
        assert!(self.has_more(), "zip advanced past its end");
        self.state.advance_all();
    }

    #[inline]
    fn has_more(&self) -> bool {
        self.state.all_live()
    }

    fn take(&mut self) -> Self::Output {
        assert!(self.has_more(), "zip advanced past its end");
        self.state.take_all()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.state.size_hint()
    }
} // impl Generator for Zip

/// Iterator over the flat tuples of a [`Zip`].
pub struct ZipIter<S> {
    inner: Iter<Zip<S>>,
}

impl<S> ZipIter<S> {
    pub fn into_inner(self) -> Zip<S>
    where
        S: ZipMarkers,
    {
        self.inner.into_inner()
    }
}

impl<S> Iterator for ZipIter<S>
where
    S: ZipMarkers,
    S::Values: Flatten,
{
    type Item = <S::Values as Flatten>::Flat;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Flatten::flatten)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> FusedIterator for ZipIter<S>
where
    S: ZipMarkers,
    S::Values: Flatten,
{
}

impl<S> IntoIterator for Zip<S>
where
    S: ZipMarkers,
    S::Values: Flatten,
{
    type Item = <S::Values as Flatten>::Flat;
    type IntoIter = ZipIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        ZipIter {
            inner: Iter::new(self),
        }
    }
}

/// Zips one or more sequences: `zip!(a)`, `zip!(a, b)`, `zip!(a, b, c)`, ...
///
/// Each argument is taken by value, so pass `&v` to borrow and `v` to hand
/// the sequence over. Cursors are created in argument order.
///
/// A sequence passed as `&mut iter` is read one element ahead: if it
/// outlives the shortest input, the element after the last zipped one has
/// already been pulled from `iter`.
#[macro_export]
macro_rules! zip {
    (@state) => {
        $crate::Nil
    };
    (@state $head:expr $(, $tail:expr)*) => {
        $crate::ZipState::new($crate::Cursor::new($head), $crate::zip!(@state $($tail),*))
    };
    ($($seq:expr),+ $(,)?) => {
        $crate::Zip::new($crate::zip!(@state $($seq),+))
    };
}

/**
 * @file enumerate.rs
 * @author Krisna Pranav
 * @brief enumerate
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use crate::{bridge::Iter, Cursor, Generator, Get, Positional};

/// Running index paired with a cursor into the enumerated sequence.
///
/// The index always equals the starting index plus the number of advances.
pub struct EnumerateState<I>
where
    I: Iterator,
{
    idx: i64,
    cursor: Cursor<I>,
}

impl<I> EnumerateState<I>
where
    I: Iterator,
{
    #[inline]
    pub fn index(&self) -> i64 {
        self.idx
    }

    #[inline]
    pub fn get<const N: usize>(&self) -> &<Self as Get<N>>::Output
    where
        Self: Get<N>,
    {
        Get::<N>::get_at(self)
    }

    pub fn parts(&self) -> (i64, &I::Item) {
        (self.idx, self.cursor.get())
    }

    // The index past the last element is never read, so it is left alone.
    fn step_index(&mut self) {
        if self.cursor.is_end() {
            return;
        }

        self.idx = match self.idx.checked_add(1) {
            Some(idx) => idx,
            None => panic!("enumerate index overflowed i64"),
        };
    }
} // impl EnumerateState

impl<I> Get<0> for EnumerateState<I>
where
    I: Iterator,
{
    type Output = i64;

    fn get_at(&self) -> &i64 {
        &self.idx
    }
}

impl<I> Get<1> for EnumerateState<I>
where
    I: Iterator,
{
    type Output = I::Item;

    fn get_at(&self) -> &I::Item {
        self.cursor.get()
    }
}

impl<I> Positional for EnumerateState<I>
where
    I: Iterator,
{
    const ARITY: usize = 2;
}

impl<I, T> std::fmt::Debug for EnumerateState<I>
where
    I: Iterator<Item = T>,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumerateState")
            .field("idx", &self.idx)
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Pairs each element of a sequence with a running index.
pub struct Enumerate<I>
where
    I: Iterator,
{
    state: EnumerateState<I>,
}

impl<I> Enumerate<I>
where
    I: Iterator,
{
    pub fn new<S>(seq: S, start: i64) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let cursor = Cursor::new(seq);
        tracing::trace!(start, empty = cursor.is_end(), "enumerate");

        Self {
            state: EnumerateState { idx: start, cursor },
        }
    }
} // impl Enumerate

impl<I> Generator for Enumerate<I>
where
    I: Iterator,
{
    type Current<'a> = &'a EnumerateState<I>
    where
        Self: 'a;

    type Output = (i64, I::Item);

    #[inline]
    fn current(&self) -> &EnumerateState<I> {
        assert!(self.has_more(), "enumerate read past its end");
        &self.state
    }

    #[inline]
    fn advance(&mut self) {
        assert!(self.has_more(), "enumerate advanced past its end");
        self.state.cursor.advance();
        self.state.step_index();
    }

    #[inline]
    fn has_more(&self) -> bool {
        !self.state.cursor.is_end()
    }

    fn take(&mut self) -> Self::Output {
        assert!(self.has_more(), "enumerate advanced past its end");
        let item = self.state.cursor.take();
        let idx = self.state.idx;
        self.state.step_index();

        (idx, item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.state.cursor.size_hint()
    }
} // impl Generator for Enumerate

impl<I> IntoIterator for Enumerate<I>
where
    I: Iterator,
{
    type Item = (i64, I::Item);
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// Enumerates `seq` from index 0.
///
/// Pass the sequence by value to hand it over, or by reference to borrow it;
/// a borrowed sequence must outlive the generator.
///
/// The generator stays one element ahead of the step it reports (see
/// [`Cursor`]). Passing `&mut iter` and dropping the generator early leaves
/// `iter` one element further along than the last step read.
pub fn enumerate<S>(seq: S) -> Enumerate<S::IntoIter>
where
    S: IntoIterator,
{
    Enumerate::new(seq, 0)
}

pub fn enumerate_from<S>(seq: S, start: i64) -> Enumerate<S::IntoIter>
where
    S: IntoIterator,
{
    Enumerate::new(seq, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LendingIterator;
    use proptest::prelude::*;
    use std::collections::LinkedList;

    #[test]
    fn pairs_from_zero() {
        let vec = vec![1, 2, 3];
        let pairs: Vec<(i64, &i32)> = enumerate(&vec).into_iter().collect();
        assert_eq!(pairs, vec![(0, &1), (1, &2), (2, &3)]);
    }

    #[test]
    fn pairs_from_custom_start() {
        let vec = vec![1, 2, 3];
        let mut seen = Vec::new();
        for (index, value) in enumerate_from(&vec, 10) {
            seen.push((index, *value));
        }
        assert_eq!(seen, vec![(10, 1), (11, 2), (12, 3)]);
    }

    #[test]
    fn owns_a_temporary() {
        let make = || vec![String::from("a"), String::from("b")];
        let pairs: Vec<(i64, String)> = enumerate(make()).into_iter().collect();
        assert_eq!(pairs, vec![(0, "a".to_string()), (1, "b".to_string())]);
    }

    #[test]
    fn negative_start() {
        let pairs: Vec<(i64, char)> = enumerate_from(['x', 'y'], -1).into_iter().collect();
        assert_eq!(pairs, vec![(-1, 'x'), (0, 'y')]);
    }

    #[test]
    fn mutable_items() {
        let mut vec = vec![1i64, 2, 3];
        for (index, value) in enumerate(&mut vec) {
            *value *= index + 1;
        }
        assert_eq!(vec, vec![1, 4, 9]);
    }

    #[test]
    fn empty_sequence() {
        let empty: LinkedList<u8> = LinkedList::new();
        let pairs = enumerate(&empty);
        assert!(!pairs.has_more());
        assert_eq!(pairs.into_iter().count(), 0);
    }

    fn arity<T: Positional>(_: &T) -> usize {
        T::ARITY
    }

    #[test]
    fn state_access_by_position() {
        let list: LinkedList<&str> = ["zero", "one"].into_iter().collect();
        let mut pairs = enumerate_from(&list, 5);

        let state = pairs.current();
        assert_eq!(*state.get::<0>(), 5);
        assert_eq!(**state.get::<1>(), "zero");
        assert_eq!(state.parts(), (5, &&"zero"));
        assert_eq!(arity(state), 2);

        pairs.advance();
        assert_eq!(pairs.current().index(), 6);
        assert_eq!(pairs.current().index(), 6);
        assert_eq!(**pairs.current().get::<1>(), "one");
    }

    #[test]
    fn lending_steps() {
        let vec = vec![7i64, 8];
        let mut pairs = enumerate(&vec);
        let mut steps = pairs.begin();
        let mut total = 0;

        while let Some(state) = steps.next() {
            let (index, value) = state.parts();
            total += index * **value;
        }

        assert_eq!(total, 8);
    }

    #[test]
    fn exact_size_hint() {
        let vec = vec![1, 2, 3];
        let mut iter = enumerate(&vec).into_iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    #[should_panic(expected = "enumerate advanced past its end")]
    fn advance_past_end_panics() {
        let mut pairs = enumerate(Vec::<i32>::new());
        pairs.advance();
    }

    #[test]
    fn last_index_at_i64_max() {
        let pairs: Vec<(i64, u8)> = enumerate_from([1u8], i64::MAX).into_iter().collect();
        assert_eq!(pairs, vec![(i64::MAX, 1)]);

        let mut pairs = enumerate_from([2u8], i64::MAX);
        assert_eq!(pairs.current().index(), i64::MAX);
        pairs.advance();
        assert!(!pairs.has_more());
    }

    #[test]
    #[should_panic(expected = "enumerate index overflowed i64")]
    fn index_past_i64_max_panics() {
        let mut pairs = enumerate_from([1u8, 2], i64::MAX);
        pairs.advance();
    }

    #[test]
    fn early_stop_leaves_borrowed_iterator_one_ahead() {
        let mut source = vec![1, 2, 3, 4].into_iter();

        let mut pairs = enumerate(&mut source);
        assert_eq!(pairs.take(), (0, 1));
        drop(pairs);

        assert_eq!(source.next(), Some(3));
    }

    proptest! {
        #[test]
        fn matches_indexed_elements(items in proptest::collection::vec(any::<u16>(), 0..64), start in -1000i64..1000) {
            let pairs: Vec<(i64, u16)> = enumerate_from(items.clone(), start).into_iter().collect();
            prop_assert_eq!(pairs.len(), items.len());
            for (offset, (index, value)) in pairs.into_iter().enumerate() {
                prop_assert_eq!(index, start + offset as i64);
                prop_assert_eq!(value, items[offset]);
            }
        }
    }
}

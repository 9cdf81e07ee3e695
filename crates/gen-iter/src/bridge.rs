/**
 * @file bridge.rs
 * @author Krisna Pranav
 * @brief bridge
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::iter::FusedIterator;

use crate::{Generator, LendingIterator};

/// Marks the end of iteration. Compared against, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct End;

/// Borrowed cursor over a generator.
///
/// `get` reads the present step, `advance` moves on and `steps != End`
/// holds while there is something to read. As a [`LendingIterator`] the
/// first `next` yields the step the generator was built on.
pub struct Steps<'g, G> {
    generator: &'g mut G,
    started: bool,
}

impl<'g, G> Steps<'g, G>
where
    G: Generator,
{
    pub fn new(generator: &'g mut G) -> Self {
        Self {
            generator,
            started: false,
        }
    }

    pub fn get(&self) -> G::Current<'_> {
        self.generator.current()
    }

    pub fn advance(&mut self) -> &mut Self {
        self.generator.advance();
        self
    }
} // impl Steps

impl<G> PartialEq<End> for Steps<'_, G>
where
    G: Generator,
{
    fn eq(&self, _: &End) -> bool {
        !self.generator.has_more()
    }
}

impl<'g, G> LendingIterator for Steps<'g, G>
where
    G: Generator,
{
    type Item<'a> = G::Current<'a>
    where
        G: 'a,
        'g: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.started {
            if !self.generator.has_more() {
                return None;
            }
            self.generator.advance();
        }
        self.started = true;

        if self.generator.has_more() {
            Some(self.generator.current())
        } else {
            None
        }
    }
} // impl LendingIterator for Steps

/// Owning bridge from a generator to [`Iterator`], so `for` loops work.
pub struct Iter<G> {
    generator: G,
    finished: bool,
}

impl<G> Iter<G>
where
    G: Generator,
{
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            finished: false,
        }
    }

    /// Hands the generator back, positioned on the first step not yet yielded.
    pub fn into_inner(self) -> G {
        self.generator
    }
} // impl Iter

impl<G> Iterator for Iter<G>
where
    G: Generator,
{
    type Item = G::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if self.generator.has_more() {
            return Some(self.generator.take());
        }

        if !self.finished {
            self.finished = true;
            tracing::trace!(generator = std::any::type_name::<G>(), "exhausted");
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.generator.size_hint()
    }
} // impl Iterator for Iter

impl<G> FusedIterator for Iter<G> where G: Generator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enumerate, range, zip};

    #[test]
    fn manual_loop_with_sentinel() {
        let mut numbers = range(3);
        let mut steps = numbers.begin();
        let mut seen = Vec::new();

        while steps != End {
            seen.push(steps.get());
            steps.advance();
        }

        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn lending_yields_first_step_first() {
        let data = vec![10, 20];
        let mut pairs = enumerate(&data);
        let mut steps = pairs.begin();

        let first = steps.next().map(|state| (state.index(), **state.get::<1>()));
        assert_eq!(first, Some((0, 10)));
        let second = steps.next().map(|state| (state.index(), **state.get::<1>()));
        assert_eq!(second, Some((1, 20)));
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }

    #[test]
    fn manual_advance_then_lending_next() {
        let mut numbers = range(4);
        let mut steps = numbers.begin();

        steps.advance().advance();
        assert_eq!(steps.next(), Some(2));
        assert_eq!(steps.next(), Some(3));
        assert_eq!(steps.next(), None);
    }

    fn skip_two<L: LendingIterator>(mut steps: L) {
        steps.next();
        steps.next();
    }

    #[test]
    fn lending_through_a_borrow_resumes() {
        let mut numbers = range(5);
        let mut steps = numbers.begin();

        skip_two(&mut steps);
        assert_eq!(steps.next(), Some(2));
        assert_eq!((&mut steps).count(), 2);
        assert!(steps == End);
        assert_eq!(steps.next(), None);
    }

    #[test]
    fn lending_count() {
        let mut tuples = zip!([1, 2, 3], ["a", "b"]);
        assert_eq!(tuples.begin().count(), 2);
        assert!(!tuples.has_more());
    }

    #[test]
    fn empty_generator_equals_end_immediately() {
        let mut numbers = range(0);
        assert_eq!(numbers.end(), End);
        assert!(numbers.begin() == End);
        assert!(numbers.begin().next().is_none());
    }

    #[test]
    fn iter_is_fused() {
        let mut iter = Iter::new(range(1));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn partial_iteration_through_mut_reference() {
        let mut numbers = range(5);

        let head: Vec<i64> = Iter::new(&mut numbers).take(2).collect();
        assert_eq!(head, vec![0, 1]);
        assert_eq!(numbers.current(), 2);

        let rest: Vec<i64> = numbers.into_iter().collect();
        assert_eq!(rest, vec![2, 3, 4]);
    }

    #[test]
    fn into_inner_resumes_where_iteration_stopped() {
        let mut iter = Iter::new(range((10, 14)));
        assert_eq!(iter.next(), Some(10));
        assert_eq!(iter.next(), Some(11));

        let mut numbers = iter.into_inner();
        assert_eq!(numbers.current(), 12);
        numbers.advance();
        assert_eq!(numbers.take(), 13);
        assert!(!numbers.has_more());
    }
}

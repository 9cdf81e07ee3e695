/**
 * @file cursor.rs
 * @author Krisna Pranav
 * @brief cursor
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use std::iter::Fuse;

use crate::End;

/// Position marker into any [`IntoIterator`].
///
/// The first element is pulled when the cursor is created, so an empty
/// sequence is at its end straight away. Whether items are owned, shared or
/// mutable references is decided by what the caller passes in: `v`, `&v` or
/// `&mut v`.
///
/// The cursor therefore always holds one element more than has been
/// consumed. When it reads from a borrowed iterator (`&mut iter`) and is
/// dropped before the end, that held element is gone from `iter`.
pub struct Cursor<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    head: Option<I::Item>,
}

impl<I> Cursor<I>
where
    I: Iterator,
{
    pub fn new<S>(seq: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let mut iter = seq.into_iter().fuse();
        let head = iter.next();
        Self { iter, head }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.head.is_none()
    }

    /// Steps to the next element. Past the end this is a no-op.
    #[inline]
    pub fn advance(&mut self) {
        self.head = self.iter.next();
    }

    #[inline]
    pub fn get(&self) -> &I::Item {
        match &self.head {
            Some(item) => item,
            None => panic!("cursor dereferenced at the end of its sequence"),
        }
    }

    /// Moves the current element out and steps past it.
    pub fn take(&mut self) -> I::Item {
        let Some(item) = self.head.take() else {
            panic!("cursor taken at the end of its sequence");
        };
        self.advance();

        item
    }

    pub fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_end() {
            return (0, Some(0));
        }

        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(1),
            upper.and_then(|upper| upper.checked_add(1)),
        )
    }
} // impl Cursor

impl<I> PartialEq<End> for Cursor<I>
where
    I: Iterator,
{
    fn eq(&self, _: &End) -> bool {
        self.is_end()
    }
} // impl PartialEq<End> for Cursor

impl<I, T> std::fmt::Debug for Cursor<I>
where
    I: Iterator<Item = T>,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").field("head", &self.head).finish()
    }
}

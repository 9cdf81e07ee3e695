/**
 * @file position.rs
 * @author Krisna Pranav
 * @brief positional state
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

/// Access to the `N`th part of a fixed-arity state.
///
/// Only positions that exist are implemented, so asking for one past the
/// arity fails to compile instead of returning nothing.
pub trait Get<const N: usize> {
    type Output: ?Sized;

    fn get_at(&self) -> &Self::Output;
}

/// Number of parts a positional state destructures into.
pub trait Positional {
    const ARITY: usize;
}

/// Turns a right-nested cons value `(A, (B, (C, ())))` into `(A, B, C)`.
///
/// Implemented for one to sixteen elements.
pub trait Flatten {
    type Flat;

    fn flatten(self) -> Self::Flat;
}

#[doc(hidden)]
#[macro_export]
macro_rules! cons {
    () => { () };
    ($head:tt $(, $tail:tt)*) => { ($head, $crate::cons!($($tail),*)) };
}

macro_rules! impl_flatten {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> Flatten for $crate::cons!($($ty),+) {
            type Flat = ($($ty,)+);

            #[inline]
            fn flatten(self) -> Self::Flat {
                let $crate::cons!($($var),+) = self;
                ($($var,)+)
            }
        }
    };
}

impl_flatten!(A a);
impl_flatten!(A a, B b);
impl_flatten!(A a, B b, C c);
impl_flatten!(A a, B b, C c, D d);
impl_flatten!(A a, B b, C c, D d, E e);
impl_flatten!(A a, B b, C c, D d, E e, F f);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m, N n);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m, N n, O o);
impl_flatten!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m, N n, O o, P p);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_pairs() {
        assert_eq!((1, ()).flatten(), (1,));
        assert_eq!((1, ('x', ())).flatten(), (1, 'x'));
        assert_eq!((1, ('x', (2.5, ()))).flatten(), (1, 'x', 2.5));
    }
}

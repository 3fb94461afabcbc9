//! Small combinators for building function contracts.
//!
//! - [`identity`]: returns its argument (a [`Transformer`](super::Transformer))
//! - [`constant`]: always produces the same value (a [`Producer`](super::Producer))
//! - [`flip`]: swaps the arguments of a [`Combiner`](super::Combiner)
//! - [`negate`]: inverts a [`BooleanCondition`](super::BooleanCondition)

use super::contract::{BooleanCondition, Combiner};

/// Returns the value unchanged.
///
/// Mapping `identity` over a list leaves its elements unchanged.
///
/// # Examples
///
/// ```
/// use lazy_stream::function::identity;
/// use lazy_stream::stream::InfiniteList;
///
/// let list = InfiniteList::iterate(1, |x| x + 1).map(identity).limit(3);
/// assert_eq!(list.to_list(), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a producer that always returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use lazy_stream::function::constant;
/// use lazy_stream::stream::InfiniteList;
///
/// let ones = InfiniteList::generate(constant(1)).limit(3);
/// assert_eq!(ones.to_list(), vec![1, 1, 1]);
/// ```
#[inline]
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Swaps the arguments of a combiner.
///
/// `flip(f)(b, a) == f(a, b)`, so `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use lazy_stream::function::{Combiner, flip};
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract).combine(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, R, C>(combiner: C) -> impl Fn(B, A) -> R
where
    C: Combiner<A, B, R>,
{
    move |second_argument, first_argument| combiner.combine(first_argument, second_argument)
}

/// Inverts a condition.
///
/// # Examples
///
/// ```
/// use lazy_stream::function::negate;
/// use lazy_stream::stream::InfiniteList;
///
/// let odd = InfiniteList::iterate(1, |x| x + 1)
///     .filter(negate(|x: &i32| x % 2 == 0))
///     .limit(3);
/// assert_eq!(odd.to_list(), vec![1, 3, 5]);
/// ```
#[inline]
pub fn negate<T: ?Sized, P>(condition: P) -> impl Fn(&T) -> bool
where
    P: BooleanCondition<T>,
{
    move |value| !condition.test(value)
}

//! Applicative type class - combining independent values in a context.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                       (identity)
//! pure(f).apply(pure(x)) == pure(f(x))         (homomorphism)
//! fa.map2(fb, f) == fa.fmap(curry(f)).apply(fb)
//! ```

use super::functor::Functor;
use crate::control::Maybe;

/// A functor that can lift plain values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::Maybe;
/// use lazy_stream::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::some(42));
///
/// let sum = Maybe::some(3).map2(Maybe::some(4), |x, y| x + y);
/// assert_eq!(sum, Maybe::some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with `function`; absent if either is absent.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values with `function`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values.
    ///
    /// ```rust
    /// use lazy_stream::control::Maybe;
    /// use lazy_stream::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::some(1).product(Maybe::some("a")), Maybe::some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value; the right one must still be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value; the left one must still be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::some(function(a, b)),
            _ => Maybe::none(),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::some(function(a, b, c)),
            _ => Maybe::none(),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(2), Maybe::some(3))]
    #[case(Maybe::some(1), Maybe::none(), Maybe::none())]
    #[case(Maybe::none(), Maybe::some(2), Maybe::none())]
    fn map2_requires_both(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(left.map2(right, |x, y| x + y), expected);
    }

    #[rstest]
    fn map3_combines_all() {
        let sum = Maybe::some(1).map3(Maybe::some(2), Maybe::some(3), |x, y, z| x + y + z);
        assert_eq!(sum, Maybe::some(6));
    }

    #[rstest]
    fn apply_calls_contained_function() {
        let function: Maybe<fn(i32) -> i32> = Maybe::Some(|x| x + 1);
        assert_eq!(function.apply(Maybe::some(5)), Maybe::some(6));
    }

    #[rstest]
    fn product_right_needs_left() {
        assert_eq!(Maybe::<i32>::none().product_right(Maybe::some(2)), Maybe::none());
    }
}

//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)                          (left identity)
//! m.flat_map(Self::pure) == m                                (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))  (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::Maybe;
//! use lazy_stream::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::of(text.parse().ok()).filter(|value| *value > 0)
//! }
//!
//! let doubled = Monad::flat_map(parse_positive("21"), |x| Maybe::some(x * 2));
//! assert_eq!(doubled, Maybe::some(42));
//! assert_eq!(Monad::flat_map(parse_positive("-1"), |x| Maybe::some(x * 2)), Maybe::none());
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// An applicative whose next step may depend on the previous value.
pub trait Monad: Applicative {
    /// Applies `function` to the value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn halve(value: i32) -> Maybe<i32> {
        if value % 2 == 0 {
            Maybe::some(value / 2)
        } else {
            Maybe::none()
        }
    }

    #[rstest]
    fn left_identity() {
        assert_eq!(Monad::flat_map(<Maybe<()>>::pure(8), halve), halve(8));
    }

    #[rstest]
    #[case(Maybe::some(3))]
    #[case(Maybe::none())]
    fn right_identity(#[case] maybe: Maybe<i32>) {
        assert_eq!(Monad::flat_map(maybe, Maybe::some), maybe);
    }

    #[rstest]
    fn then_discards_left_value() {
        assert_eq!(Maybe::some(1).then(Maybe::some("next")), Maybe::some("next"));
        assert_eq!(Maybe::<i32>::none().then(Maybe::some("next")), Maybe::none());
    }

    #[rstest]
    fn and_then_chains() {
        assert_eq!(Maybe::some(8).and_then(halve).and_then(halve), Maybe::some(2));
    }
}

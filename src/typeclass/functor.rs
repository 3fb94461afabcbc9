//! Functor type class - mapping over a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Only [`Maybe`] is a `Functor` here: mapping an [`InfiniteList`] calls the
//! function once per element, which an `FnOnce` cannot do. Use
//! [`InfiniteList::map`] instead.
//!
//! [`InfiniteList`]: crate::stream::InfiniteList
//! [`InfiniteList::map`]: crate::stream::InfiniteList::map

use super::higher::TypeConstructor;
use crate::control::Maybe;

/// A type constructor whose contents can be mapped.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::Maybe;
/// use lazy_stream::typeclass::Functor;
///
/// let length = Maybe::some("four").fmap(|text| text.len());
/// assert_eq!(length, Maybe::some(4));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the context.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies `function` to a reference to the value inside the context.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the context with `value`.
    ///
    /// ```rust
    /// use lazy_stream::control::Maybe;
    /// use lazy_stream::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).replace("replaced"), Maybe::some("replaced"));
    /// assert_eq!(Maybe::<i32>::none().replace("replaced"), Maybe::none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the context.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B + 'static,
        B: 'static,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_ref_leaves_source_usable() {
        let text = Maybe::some("hello".to_string());
        let length = text.fmap_ref(|value| value.len());
        assert_eq!(length, Maybe::some(5));
        assert_eq!(text, Maybe::some("hello".to_string()));
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(()))]
    #[case(Maybe::none(), Maybe::none())]
    fn void_keeps_presence(#[case] maybe: Maybe<i32>, #[case] expected: Maybe<()>) {
        assert_eq!(maybe.void(), expected);
    }

    #[rstest]
    fn composition_law_on_some() {
        let function1 = |x: i32| x + 1;
        let function2 = |x: i32| x * 2;
        let left = Maybe::some(5).fmap(function1).fmap(function2);
        let right = Maybe::some(5).fmap(move |x| function2(function1(x)));
        assert_eq!(left, right);
    }
}

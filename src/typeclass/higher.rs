//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly.
//! [`TypeConstructor`] names the applied parameter (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`), which is enough to
//! state `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use lazy_stream::control::Maybe;
//! use lazy_stream::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = emptied(Maybe::some(42));
//! assert_eq!(emptied, Maybe::none());
//! ```

use crate::control::Maybe;
use crate::stream::InfiniteList;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> TypeConstructor for InfiniteList<T> {
    type Inner = T;
    type WithType<B> = InfiniteList<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_type<T>(_: &T) {}

    #[rstest]
    fn maybe_with_type_produces_maybe() {
        let converted: <Maybe<i32> as TypeConstructor>::WithType<String> = Maybe::some("x".into());
        assert_type::<Maybe<String>>(&converted);
    }

    #[rstest]
    fn infinite_list_inner_type_is_element_type() {
        fn inner_of<T: TypeConstructor<Inner = u8>>() {}
        inner_of::<InfiniteList<u8>>();
    }
}

//! Maybe type - a value that may be absent, without nulls.
//!
//! This module provides the `Maybe<T>` type, a two-variant sum type that is
//! either `None` or `Some(value)`. It is the slot type of every
//! [`InfiniteList`](crate::stream::InfiniteList) element: a slot holding
//! `None` marks an element removed by `filter`.
//!
//! `None` carries no payload, so every `Maybe::None` of every element type is
//! the same zero-sized sentinel; there is no per-type instance to share.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::Maybe;
//!
//! let present = Maybe::some(21);
//! assert_eq!(present.map(|x| x * 2), Maybe::some(42));
//!
//! let absent: Maybe<i32> = Maybe::of(None);
//! assert_eq!(absent.or_else(0), 0);
//!
//! // Combinators never fail; direct access does.
//! assert!(Maybe::<i32>::none().get().is_err());
//! ```

use std::fmt;

/// The error returned when the payload of an empty [`Maybe`] is accessed
/// directly.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::{EmptyValueError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.into_value(), Err(EmptyValueError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no value present: attempted to access the payload of Maybe::None")]
pub struct EmptyValueError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Maybe<T>` mirrors `Option<T>` but is the library's own type so that it can
/// carry the combinators and rendering the lazy list relies on. Conversions to
/// and from `Option` are provided in both directions.
///
/// # Equality
///
/// Two `None`s are equal; two `Some`s are equal when their payloads are.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::Maybe;
///
/// let kept = Maybe::some(4).filter(|x| x % 2 == 0);
/// let dropped = Maybe::some(3).filter(|x| x % 2 == 0);
///
/// assert_eq!(kept, Maybe::some(4));
/// assert_eq!(dropped, Maybe::none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the empty `Maybe`.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Converts an `Option`, mapping an absent value to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::none());
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::{EmptyValueError, Maybe};
    ///
    /// assert_eq!(Maybe::some(7).get(), Ok(&7));
    /// assert_eq!(Maybe::<i32>::none().get(), Err(EmptyValueError));
    /// ```
    pub fn get(&self) -> Result<&T, EmptyValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => {
                tracing::debug!("payload requested from an empty Maybe");
                Err(EmptyValueError)
            }
        }
    }

    /// Consumes the `Maybe` and returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if this is `None`.
    pub fn into_value(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => {
                tracing::debug!("payload requested from an empty Maybe");
                Err(EmptyValueError)
            }
        }
    }

    /// Converts into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the payload, or `else_value` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).or_else(0), 1);
    /// assert_eq!(Maybe::none().or_else(0), 0);
    /// ```
    #[inline]
    pub fn or_else(self, else_value: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => else_value,
        }
    }

    /// Returns the payload, or the result of `producer` if absent.
    ///
    /// `producer` is only invoked when this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Maybe;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let fallback = || {
    ///     calls.set(calls.get() + 1);
    ///     0
    /// };
    ///
    /// assert_eq!(Maybe::some(1).or_else_get(fallback), 1);
    /// assert_eq!(calls.get(), 0);
    /// ```
    #[inline]
    pub fn or_else_get<P>(self, producer: P) -> T
    where
        P: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => producer(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `transformer` to the payload.
    ///
    /// `None` maps to `None` without invoking `transformer`.
    #[inline]
    pub fn map<U, F>(self, transformer: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(transformer(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies `transformer` and flattens the nested `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Maybe;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
    ///
    /// assert_eq!(Maybe::some(8).flat_map(halve), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).flat_map(halve), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, transformer: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => transformer(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the payload only if it satisfies `predicate`.
    ///
    /// `None` stays `None` without invoking `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the borrowed payload.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(Clone::clone)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    /// Renders `Some(v)` as `[v]` and `None` as `[]`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "[{value}]"),
            Self::None => formatter.write_str("[]"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn none_is_shared_across_element_types() {
        assert_eq!(std::mem::size_of::<Maybe<()>>(), std::mem::size_of::<bool>());
        assert_eq!(Maybe::<String>::none(), Maybe::None);
    }

    #[rstest]
    fn map_on_none_does_not_call_transformer() {
        let called = Cell::new(false);
        let result = Maybe::<i32>::none().map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(result, Maybe::none());
        assert!(!called.get());
    }

    #[rstest]
    fn filter_keeps_nested_absent_payload_when_predicate_passes() {
        let nested: Maybe<Option<i32>> = Maybe::some(None);
        assert_eq!(nested.filter(|inner| inner.is_none()), Maybe::some(None));
    }

    #[rstest]
    #[case(Maybe::some(3), "[3]")]
    #[case(Maybe::none(), "[]")]
    fn display_uses_bracket_tokens(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(maybe.to_string(), expected);
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let option: Option<i32> = Maybe::from(Some(5)).into();
        assert_eq!(option, Some(5));
    }
}

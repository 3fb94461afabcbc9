//! Foldable type class - reducing a structure to a summary value.
//!
//! # Laws
//!
//! For an associative `f`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! # Infinite lists
//!
//! [`InfiniteList`] is `Foldable`, but `fold_left`, `fold_right` and `length`
//! only return for finite lists. `is_empty`, `find`, `exists` and `for_all`
//! stop at the first deciding element, so they also work on infinite lists
//! that contain one.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::stream::InfiniteList;
//! use lazy_stream::typeclass::Foldable;
//!
//! let digits = InfiniteList::iterate(0, |x| x + 1).limit(10);
//! let sum = digits.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 45);
//!
//! let naturals = InfiniteList::iterate(0, |x| x + 1);
//! assert!(naturals.exists(|x| *x > 1_000));
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;
use crate::stream::InfiniteList;

/// A structure whose elements can be folded into a single value.
///
/// `fold_left` and `fold_right` are required; everything else is derived.
pub trait Foldable: TypeConstructor {
    /// Folds from left to right.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from right to left.
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    /// use lazy_stream::typeclass::Foldable;
    ///
    /// let letters: InfiniteList<char> = "abc".chars().collect();
    /// let reversed = letters.fold_right(String::new(), |element, mut accumulator| {
    ///     accumulator.push(element);
    ///     accumulator
    /// });
    /// assert_eq!(reversed, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` when there are no elements.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// InfiniteList<T> Implementation
// =============================================================================

impl<T: Clone> Foldable for InfiniteList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn length(&self) -> usize {
        self.count()
    }

    fn find<P>(self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().find(predicate)
    }
}

//! Lazily evaluated, potentially infinite list.
//!
//! This module provides [`InfiniteList`], a cons list whose head and tail are
//! both [`Lazy`] cells. Nothing is computed until a consumer asks for it, and
//! everything that is computed is computed once.
//!
//! # Overview
//!
//! - [`generate`](InfiniteList::generate) and
//!   [`iterate`](InfiniteList::iterate) describe unbounded lists
//! - [`map`](InfiniteList::map) and [`filter`](InfiniteList::filter)
//!   transform them without forcing anything
//! - [`limit`](InfiniteList::limit) and
//!   [`take_while`](InfiniteList::take_while) make them finite
//! - [`reduce`](InfiniteList::reduce), [`count`](InfiniteList::count) and
//!   [`to_list`](InfiniteList::to_list) consume finite lists
//!
//! # Soft deletion
//!
//! `filter` does not unlink rejected nodes. Each node's head slot holds a
//! [`Maybe`]; a rejected element becomes `Maybe::None` and stays in the chain.
//! [`head`](InfiniteList::head) and [`tail`](InfiniteList::tail) search forward
//! past such nodes, so callers only ever observe retained elements.
//!
//! ```text
//! iterate(1, +1)           [1] -> [2] -> [3] -> [4] -> ...
//! .filter(even)            []  -> [2] -> []  -> [4] -> ...
//! .head()                         ^ first retained element
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::stream::InfiniteList;
//!
//! let evens = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 2 == 0);
//! assert_eq!(evens.head(), Ok(2));
//! assert_eq!(evens.limit(3).to_list(), vec![2, 4, 6]);
//!
//! let small = InfiniteList::iterate(1, |x| x + 1).take_while(|x| *x < 5);
//! assert_eq!(small.to_list(), vec![1, 2, 3, 4]);
//! ```
//!
//! # Termination
//!
//! `reduce`, `count` and `to_list` walk the list to its sentinel. Calling them
//! on a list that never ends does not return; bound the list with `limit` or
//! `take_while` first.

use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::control::{Lazy, Maybe};
use crate::function::{BooleanCondition, Combiner, Producer, Transformer};

/// The error returned when no retained element is left.
///
/// Raised by [`InfiniteList::head`] and [`InfiniteList::tail`] when called on
/// the sentinel, or when the forward search for a retained element reaches
/// the sentinel.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::stream::{ExhaustedError, InfiniteList};
///
/// let empty: InfiniteList<i32> = InfiniteList::sentinel();
/// assert_eq!(empty.head(), Err(ExhaustedError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("list exhausted: no retained element before the sentinel")]
pub struct ExhaustedError;

/// A cons cell. Both halves are deferred.
struct Node<T> {
    head: Lazy<Maybe<T>>,
    tail: Lazy<InfiniteList<T>>,
}

impl<T: Clone> Node<T> {
    /// The element in this node, if it was not filtered out.
    fn retained(&self) -> Option<T> {
        self.head.force().as_ref().cloned().into_option()
    }
}

enum Link<T> {
    Sentinel,
    Cons(Rc<Node<T>>),
}

/// A lazily evaluated, memoized, potentially infinite list.
///
/// An `InfiniteList<T>` is either the sentinel (the end of a list) or a node
/// holding a lazy head slot and a lazy tail. Cloning a list is O(1) and shares
/// every node, including memoized values.
///
/// # Element Bounds
///
/// Elements are handed out by value, so most operations need `T: Clone`;
/// the function objects and elements captured by deferred computations must
/// be `'static`.
///
/// # Examples
///
/// ```rust
/// use lazy_stream::stream::InfiniteList;
///
/// let squares = InfiniteList::iterate(1_u64, |x| x + 1).map(|x| x * x);
/// assert_eq!(squares.limit(4).to_list(), vec![1, 4, 9, 16]);
/// ```
pub struct InfiniteList<T> {
    link: Link<T>,
}

static_assertions::assert_not_impl_any!(InfiniteList<i32>: Send, Sync);

impl<T> InfiniteList<T> {
    /// Returns the sentinel, the list with no elements.
    ///
    /// Every sentinel is the same value: it owns no nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let end: InfiniteList<i32> = InfiniteList::sentinel();
    /// assert!(end.is_sentinel());
    /// assert_eq!(end.count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn sentinel() -> Self {
        Self {
            link: Link::Sentinel,
        }
    }

    /// Returns `true` only for the sentinel.
    ///
    /// A list whose remaining nodes are all filtered out is not the sentinel
    /// until [`tail`](Self::tail) has skipped past them.
    #[inline]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self.link, Link::Sentinel)
    }

    fn cons(head: Lazy<Maybe<T>>, tail: Lazy<Self>) -> Self {
        Self {
            link: Link::Cons(Rc::new(Node { head, tail })),
        }
    }

    /// Skip-forward search: the first node at or after this position whose
    /// head is retained, or `None` when the sentinel is reached first.
    fn seek(&self) -> Option<Rc<Node<T>>> {
        let mut current = self.clone();
        let mut skipped = 0_usize;
        loop {
            let node = match &current.link {
                Link::Sentinel => {
                    if skipped > 0 {
                        tracing::trace!(skipped, "skip-forward reached the sentinel");
                    }
                    return None;
                }
                Link::Cons(node) => Rc::clone(node),
            };
            if node.head.force().is_some() {
                if skipped > 0 {
                    tracing::trace!(skipped, "skip-forward passed filtered-out elements");
                }
                return Some(node);
            }
            skipped += 1;
            current = node.tail.value();
        }
    }

    /// This list advanced past any leading filtered-out nodes.
    fn skip_filtered(&self) -> Self {
        self.seek()
            .map_or_else(Self::sentinel, |node| Self {
                link: Link::Cons(node),
            })
    }

    fn exhausted() -> ExhaustedError {
        tracing::debug!("no retained element left in the list");
        ExhaustedError
    }

    /// Returns the rest of the list after the first retained element.
    ///
    /// The returned list is itself advanced past any filtered-out nodes, so it
    /// is the sentinel exactly when no retained element follows.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] if there is no retained element.
    ///
    /// # Panics
    ///
    /// Panics if forcing a node panics (see [`Lazy::force`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let odds = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 2 == 1);
    /// assert_eq!(odds.tail().and_then(|rest| rest.head()), Ok(3));
    ///
    /// let single = InfiniteList::iterate(1, |x| x + 1).limit(1);
    /// assert!(single.tail().is_ok_and(|rest| rest.is_sentinel()));
    /// ```
    pub fn tail(&self) -> Result<Self, ExhaustedError> {
        let node = self.seek().ok_or_else(Self::exhausted)?;
        Ok(node.tail.value().skip_filtered())
    }
}

impl<T: Clone> InfiniteList<T> {
    /// Returns the first retained element.
    ///
    /// Forces heads from the front of the list until one is retained.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] if the sentinel is reached first.
    ///
    /// # Panics
    ///
    /// Panics if forcing a node panics (see [`Lazy::force`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let list = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 2 == 0);
    /// assert_eq!(list.head(), Ok(2));
    /// ```
    pub fn head(&self) -> Result<T, ExhaustedError> {
        self.first_retained().ok_or_else(Self::exhausted)
    }

    fn first_retained(&self) -> Option<T> {
        self.seek().and_then(|node| node.retained())
    }

    /// Returns an iterator over the retained elements.
    ///
    /// The iterator pulls nodes on demand; it is infinite when the list is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let naturals = InfiniteList::iterate(0, |x| x + 1);
    /// let firsts: Vec<i32> = naturals.iter().take(3).collect();
    /// assert_eq!(firsts, vec![0, 1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.clone(),
        }
    }

    /// Folds the retained elements from left to right.
    ///
    /// `combiner(identity, first)` becomes the accumulator for the rest of the
    /// list; the sentinel returns the accumulator unchanged.
    ///
    /// The list must be finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let sum = InfiniteList::iterate(1, |x| x + 1)
    ///     .limit(4)
    ///     .reduce(0, |accumulator, x| accumulator + x);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn reduce<U, C>(&self, identity: U, combiner: C) -> U
    where
        C: Combiner<U, T, U>,
    {
        self.iter()
            .fold(identity, |accumulator, element| {
                combiner.combine(accumulator, element)
            })
    }

    /// Counts the retained elements.
    ///
    /// The list must be finite.
    pub fn count(&self) -> usize {
        self.reduce(0, |count, _| count + 1)
    }

    /// Collects the retained elements in order.
    ///
    /// The list must be finite.
    pub fn to_list(&self) -> Vec<T> {
        self.reduce(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T: 'static> InfiniteList<T> {
    /// Creates a list whose every element is a fresh call to `producer`.
    ///
    /// `producer` runs once per node, the first time that node's head is
    /// forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let ones = InfiniteList::generate(|| 1);
    /// assert_eq!(ones.limit(3).to_list(), vec![1, 1, 1]);
    /// ```
    pub fn generate<P>(producer: P) -> Self
    where
        P: Producer<T> + 'static,
    {
        Self::generate_shared(Rc::new(producer))
    }

    fn generate_shared<P>(producer: Rc<P>) -> Self
    where
        P: Producer<T> + 'static,
    {
        let head_producer = Rc::clone(&producer);
        Self::cons(
            Lazy::new(move || Maybe::some(head_producer.produce())),
            Lazy::new(move || Self::generate_shared(producer)),
        )
    }
}

impl<T: Clone + 'static> InfiniteList<T> {
    /// Creates the list `seed, step(seed), step(step(seed)), ...`.
    ///
    /// The head of each node is known when the node is built; `step` runs
    /// when a node's tail is first forced, on that node's own element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let powers = InfiniteList::iterate(1, |x| x * 2);
    /// assert_eq!(powers.limit(5).to_list(), vec![1, 2, 4, 8, 16]);
    /// ```
    pub fn iterate<F>(seed: T, step: F) -> Self
    where
        F: Transformer<T, T> + 'static,
    {
        Self::iterate_shared(seed, Rc::new(step))
    }

    fn iterate_shared<F>(seed: T, step: Rc<F>) -> Self
    where
        F: Transformer<T, T> + 'static,
    {
        let current = seed.clone();
        Self::cons(
            Lazy::of(Maybe::some(seed)),
            Lazy::new(move || {
                let next = step.transform(current);
                Self::iterate_shared(next, step)
            }),
        )
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `transformer` to every retained element.
    ///
    /// Nothing is forced by `map` itself. Filtered-out slots stay filtered
    /// out and never reach `transformer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let labels = InfiniteList::iterate(1, |x| x + 1).map(|x| format!("#{x}"));
    /// assert_eq!(labels.head(), Ok("#1".to_string()));
    /// ```
    pub fn map<U, F>(&self, transformer: F) -> InfiniteList<U>
    where
        U: 'static,
        F: Transformer<T, U> + 'static,
    {
        self.map_shared(Rc::new(transformer))
    }

    fn map_shared<U, F>(&self, transformer: Rc<F>) -> InfiniteList<U>
    where
        U: 'static,
        F: Transformer<T, U> + 'static,
    {
        match &self.link {
            Link::Sentinel => InfiniteList::sentinel(),
            Link::Cons(node) => {
                let head_transformer = Rc::clone(&transformer);
                InfiniteList::cons(
                    node.head
                        .map(move |head| head.map(|value| head_transformer.transform(value))),
                    node.tail.map(move |tail| tail.map_shared(transformer)),
                )
            }
        }
    }

    /// Marks every element failing `predicate` as filtered out.
    ///
    /// The chain keeps its length; [`head`](Self::head) and
    /// [`tail`](Self::tail) skip the filtered-out nodes. Nothing is forced by
    /// `filter` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let multiples = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 3 == 0);
    /// assert_eq!(multiples.limit(3).to_list(), vec![3, 6, 9]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: BooleanCondition<T> + 'static,
    {
        self.filter_shared(Rc::new(predicate))
    }

    fn filter_shared<P>(&self, predicate: Rc<P>) -> Self
    where
        P: BooleanCondition<T> + 'static,
    {
        match &self.link {
            Link::Sentinel => Self::sentinel(),
            Link::Cons(node) => {
                let head_predicate = Rc::clone(&predicate);
                Self::cons(
                    node.head
                        .map(move |head| head.filter(|value| head_predicate.test(value))),
                    node.tail.map(move |tail| tail.filter_shared(predicate)),
                )
            }
        }
    }

    // =========================================================================
    // Termination
    // =========================================================================

    /// Truncates the list to at most `n` retained elements.
    ///
    /// Filtered-out nodes do not count against `n`, so `limit` after `filter`
    /// keeps `n` elements that passed the filter. `limit(0)` is the sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let evens = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 2 == 0);
    /// assert_eq!(evens.limit(3).to_list(), vec![2, 4, 6]);
    /// assert!(evens.limit(0).is_sentinel());
    /// ```
    #[must_use]
    pub fn limit(&self, n: usize) -> Self {
        let node = match &self.link {
            Link::Cons(node) if n > 0 => node,
            _ => return Self::sentinel(),
        };
        let budget_head = node.head.clone();
        let source_tail = node.tail.clone();
        Self::cons(
            node.head.clone(),
            Lazy::new(move || {
                let remaining = if budget_head.force().is_some() {
                    n - 1
                } else {
                    n
                };
                if remaining == 0 {
                    Self::sentinel()
                } else {
                    source_tail.value().limit(remaining)
                }
            }),
        )
    }

    /// Keeps retained elements while they satisfy `predicate`, ending the
    /// list at the first element that does not.
    ///
    /// The failing element is evaluated (to test it); nothing after it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let below_five = InfiniteList::iterate(1, |x| x + 1).take_while(|x| *x < 5);
    /// assert_eq!(below_five.to_list(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: BooleanCondition<T> + 'static,
    {
        self.take_while_shared(Rc::new(predicate))
    }

    fn take_while_shared<P>(&self, predicate: Rc<P>) -> Self
    where
        P: BooleanCondition<T> + 'static,
    {
        if self.is_sentinel() {
            return Self::sentinel();
        }

        let head_source = self.clone();
        let head_predicate = Rc::clone(&predicate);
        let head = Lazy::new(move || {
            Maybe::of(head_source.first_retained()).filter(|value| head_predicate.test(value))
        });

        let passed = head.clone();
        let tail_source = self.clone();
        let tail = Lazy::new(move || {
            if passed.force().is_none() {
                return Self::sentinel();
            }
            tail_source
                .tail()
                .map_or_else(|_| Self::sentinel(), |rest| rest.take_while_shared(predicate))
        });

        Self::cons(head, tail)
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl<T> InfiniteList<T> {
    /// Writes `[head tail]` for each node, `?` for an unforced tail and `-`
    /// for the sentinel. Never forces anything.
    fn render<W>(&self, formatter: &mut fmt::Formatter<'_>, write_head: W) -> fmt::Result
    where
        W: Fn(&Lazy<Maybe<T>>, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let mut depth = 0_usize;
        let mut current = self.clone();
        loop {
            let next = match &current.link {
                Link::Sentinel => {
                    formatter.write_str("-")?;
                    break;
                }
                Link::Cons(node) => {
                    formatter.write_str("[")?;
                    write_head(&node.head, formatter)?;
                    formatter.write_str(" ")?;
                    depth += 1;
                    match node.tail.get() {
                        Some(tail) => Self::clone(&tail),
                        None => {
                            formatter.write_str("?")?;
                            break;
                        }
                    }
                }
            };
            current = next;
        }
        for _ in 0..depth {
            formatter.write_str("]")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for InfiniteList<T> {
    /// Renders the evaluated prefix of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let list = InfiniteList::iterate(1, |x| x + 1);
    /// assert_eq!(list.to_string(), "[[1] ?]");
    ///
    /// let _ = list.tail();
    /// assert_eq!(list.to_string(), "[[1] [[2] ?]]");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(formatter, |head, formatter| write!(formatter, "{head}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for InfiniteList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("InfiniteList(")?;
        self.render(formatter, |head, formatter| match head.get() {
            Some(value) => write!(formatter, "{:?}", *value),
            None => formatter.write_str("?"),
        })?;
        formatter.write_str(")")
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the retained elements of an [`InfiniteList`].
///
/// Created by [`InfiniteList::iter`] or `into_iter`.
pub struct Iter<T> {
    current: InfiniteList<T>,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(node) = self.current.seek() else {
            self.current = InfiniteList::sentinel();
            return None;
        };
        let element = node.retained();
        self.current = node.tail.value();
        element
    }
}

impl<T: Clone> FusedIterator for Iter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for InfiniteList<T> {
    /// Returns a list sharing every node with this one.
    fn clone(&self) -> Self {
        let link = match &self.link {
            Link::Sentinel => Link::Sentinel,
            Link::Cons(node) => Link::Cons(Rc::clone(node)),
        };
        Self { link }
    }
}

impl<T> Default for InfiniteList<T> {
    #[inline]
    fn default() -> Self {
        Self::sentinel()
    }
}

impl<T> Drop for InfiniteList<T> {
    /// Unlinks uniquely owned, forced tails one at a time so that dropping a
    /// long evaluated chain does not recurse.
    fn drop(&mut self) {
        let mut link = std::mem::replace(&mut self.link, Link::Sentinel);
        while let Link::Cons(node) = link {
            link = match Rc::try_unwrap(node) {
                Ok(Node { head: _, tail }) => match tail.into_initialized() {
                    Some(mut next) => std::mem::replace(&mut next.link, Link::Sentinel),
                    None => Link::Sentinel,
                },
                Err(_) => Link::Sentinel,
            };
        }
    }
}

impl<T> FromIterator<T> for InfiniteList<T> {
    /// Builds a finite, fully evaluated list ending in the sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::stream::InfiniteList;
    ///
    /// let list: InfiniteList<i32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(list.to_list(), vec![1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::sentinel(), |tail, element| {
                Self::cons(Lazy::of(Maybe::some(element)), Lazy::of(tail))
            })
    }
}

impl<T: Clone> IntoIterator for InfiniteList<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter { current: self }
    }
}

impl<T: Clone> IntoIterator for &InfiniteList<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn seek_skips_filtered_nodes_without_recursion() {
        let sparse = InfiniteList::iterate(0_u64, |x| x + 1).filter(|x| x % 200_000 == 199_999);
        assert_eq!(sparse.head(), Ok(199_999));
    }

    #[rstest]
    fn dropping_long_forced_chain_does_not_overflow() {
        let list = InfiniteList::iterate(0_u64, |x| x + 1).limit(200_000);
        assert_eq!(list.count(), 200_000);
        drop(list);
    }

    #[rstest]
    fn limit_does_not_force_source_tail_after_budget() {
        let steps = Rc::new(Cell::new(0));
        let counter = Rc::clone(&steps);
        let list = InfiniteList::iterate(1, move |x| {
            counter.set(counter.get() + 1);
            x + 1
        });

        assert_eq!(list.limit(1).to_list(), vec![1]);
        assert_eq!(steps.get(), 0);
    }

    #[rstest]
    fn tail_of_last_retained_element_is_sentinel() {
        let list = InfiniteList::iterate(1, |x| x + 1).take_while(|x| *x < 3);
        let rest = list.tail().and_then(|rest| rest.tail());
        assert!(rest.is_ok_and(|rest| rest.is_sentinel()));
    }

    #[rstest]
    fn render_stops_at_unforced_tail() {
        let list: InfiniteList<i32> = InfiniteList::generate(|| 7);
        assert_eq!(list.to_string(), "[? ?]");
        assert_eq!(format!("{list:?}"), "InfiniteList([? ?])");
    }
}

//! Lazy evaluation with memoization.
//!
//! This module provides the `Lazy<T>` type for deferred computation.
//! A value is computed only when first forced and cached for every
//! subsequent access: the producer runs at most once.
//!
//! `Lazy<T>` is a shared handle. Cloning it, or deriving a new lazy value
//! from it with [`map`](Lazy::map), [`flat_map`](Lazy::flat_map),
//! [`filter`](Lazy::filter) or [`combine`](Lazy::combine), refers to the
//! same memoization cell, so forcing any of them forces the original once.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::Lazy;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let lazy = Lazy::new(move || {
//!     counter.set(counter.get() + 1);
//!     42
//! });
//!
//! // No computation yet
//! assert_eq!(calls.get(), 0);
//!
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// The error returned when a lazy value cannot be forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LazyError {
    /// The value was forced again from inside its own producer.
    #[error("lazy value forced re-entrantly while its producer was running")]
    Reentrant,
    /// The producer panicked; the value can never be computed.
    #[error("lazy value is poisoned: its producer panicked")]
    Poisoned,
}

/// The deferred computation stored in an unforced [`Lazy`].
type Initializer<T> = Box<dyn FnOnce() -> T>;

/// The internal state of a `Lazy` value.
///
/// The state only ever moves forward:
/// `Uninit -> Evaluating -> Init`, or `Evaluating -> Poisoned` if the
/// producer panics.
pub enum LazyState<T> {
    /// The value has not been forced yet.
    /// Contains the producer.
    Uninit(Initializer<T>),
    /// The producer is currently running.
    Evaluating,
    /// The value has been computed and cached.
    Init(T),
    /// The producer panicked.
    Poisoned,
}

impl<T: fmt::Debug> fmt::Debug for LazyState<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninit(_) => formatter.write_str("Uninit"),
            Self::Evaluating => formatter.write_str("Evaluating"),
            Self::Init(value) => formatter.debug_tuple("Init").field(value).finish(),
            Self::Poisoned => formatter.write_str("Poisoned"),
        }
    }
}

/// A lazily evaluated, memoized value.
///
/// `Lazy<T>` holds either an already-known value ([`Lazy::of`]) or a producer
/// that has not run yet ([`Lazy::new`]). The first call to
/// [`force`](Lazy::force) runs the producer and caches its result; later
/// calls return the cached value.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. It is neither `Send` nor `Sync`.
///
/// # Re-entrance
///
/// A producer that forces the very `Lazy` it belongs to does not recurse or
/// recompute: the inner force fails with [`LazyError::Reentrant`].
///
/// # Examples
///
/// ```rust
/// use lazy_stream::control::Lazy;
///
/// let width = Lazy::new(|| 6);
/// let height = Lazy::of(7);
/// let area = width.combine(&height, |w, h| w * h);
///
/// assert!(!width.is_initialized());
/// assert_eq!(area.value(), 42);
/// assert!(width.is_initialized());
/// ```
pub struct Lazy<T> {
    state: Rc<RefCell<LazyState<T>>>,
}

static_assertions::assert_not_impl_any!(Lazy<i32>: Send, Sync);

impl<T> Lazy<T> {
    /// Creates a lazy value whose producer runs on first force.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| "deferred".to_string());
    /// assert!(!lazy.is_initialized());
    /// ```
    #[inline]
    pub fn new<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self::from_state(LazyState::Uninit(Box::new(producer)))
    }

    /// Creates a lazy value that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::of(42);
    /// assert!(lazy.is_initialized());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self {
        Self::from_state(LazyState::Init(value))
    }

    fn from_state(state: LazyState<T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Forces evaluation and returns a reference to the cached value.
    ///
    /// # Panics
    ///
    /// Panics if the value is forced re-entrantly from its own producer, or
    /// if a previous producer run panicked. Use [`try_force`](Lazy::try_force)
    /// to observe these conditions as errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| vec![1, 2, 3]);
    /// assert_eq!(lazy.force().len(), 3);
    /// ```
    pub fn force(&self) -> Ref<'_, T> {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces evaluation, reporting re-entrance and poisoning as errors.
    ///
    /// # Errors
    ///
    /// - [`LazyError::Reentrant`] if called while this value's producer runs.
    /// - [`LazyError::Poisoned`] if the producer panicked earlier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::{Lazy, LazyError};
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let slot: Rc<RefCell<Option<Lazy<i32>>>> = Rc::new(RefCell::new(None));
    /// let inner = Rc::clone(&slot);
    /// let lazy = Lazy::new(move || {
    ///     let this = inner.borrow().clone().unwrap();
    ///     let nested = this.try_force().map(|value| *value);
    ///     assert_eq!(nested, Err(LazyError::Reentrant));
    ///     1
    /// });
    /// *slot.borrow_mut() = Some(lazy.clone());
    ///
    /// assert_eq!(*lazy.force(), 1);
    /// ```
    pub fn try_force(&self) -> Result<Ref<'_, T>, LazyError> {
        self.initialize()?;
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .map_err(|_| LazyError::Poisoned)
    }

    /// Runs the producer if the value has not been computed yet.
    fn initialize(&self) -> Result<(), LazyError> {
        match &*self.state.borrow() {
            LazyState::Init(_) => return Ok(()),
            LazyState::Evaluating => return Err(Self::failure(LazyError::Reentrant)),
            LazyState::Poisoned => return Err(Self::failure(LazyError::Poisoned)),
            LazyState::Uninit(_) => {}
        }

        let previous = std::mem::replace(&mut *self.state.borrow_mut(), LazyState::Evaluating);
        let initializer = match previous {
            LazyState::Uninit(initializer) => initializer,
            settled => {
                *self.state.borrow_mut() = settled;
                return Ok(());
            }
        };

        tracing::trace!("running lazy producer");
        let guard = PoisonOnUnwind { state: &self.state };
        let value = initializer();
        *self.state.borrow_mut() = LazyState::Init(value);
        drop(guard);
        Ok(())
    }

    fn failure(error: LazyError) -> LazyError {
        tracing::debug!(%error, "lazy value could not be forced");
        error
    }

    /// Returns a reference to the value if it has already been computed.
    ///
    /// Unlike [`force`](Lazy::force), this never runs the producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert!(lazy.get().is_none());
    ///
    /// let _ = lazy.force();
    /// assert_eq!(lazy.get().map(|value| *value), Some(42));
    /// ```
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the producer panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// let lazy: Lazy<i32> = Lazy::new(|| panic!("initialization failed"));
    /// let _ = catch_unwind(AssertUnwindSafe(|| lazy.force().clone()));
    ///
    /// assert!(lazy.is_poisoned());
    /// ```
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }

    /// Takes the cached value out if this handle is the only one and the
    /// value has been computed.
    pub(crate) fn into_initialized(self) -> Option<T> {
        Rc::try_unwrap(self.state)
            .ok()
            .and_then(|cell| match cell.into_inner() {
                LazyState::Init(value) => Some(value),
                _ => None,
            })
    }
}

impl<T: Clone> Lazy<T> {
    /// Forces evaluation and returns a clone of the cached value.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`force`](Lazy::force).
    #[inline]
    pub fn value(&self) -> T {
        self.force().clone()
    }
}

/// Marks the cell poisoned if the producer unwinds before storing a value.
struct PoisonOnUnwind<'a, T> {
    state: &'a RefCell<LazyState<T>>,
}

impl<T> Drop for PoisonOnUnwind<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut()
            && matches!(*state, LazyState::Evaluating)
        {
            *state = LazyState::Poisoned;
        }
    }
}

// =============================================================================
// Functor-like Operations (map, flat_map, filter, combine)
// =============================================================================

impl<T: Clone + 'static> Lazy<T> {
    /// Derives a lazy value by applying `function` to this one.
    ///
    /// Nothing is forced now; forcing the result forces `self` (memoizing it)
    /// and then applies `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 21);
    /// let doubled = lazy.map(|x| x * 2);
    ///
    /// assert!(!lazy.is_initialized());
    /// assert_eq!(doubled.value(), 42);
    /// assert!(lazy.is_initialized());
    /// ```
    pub fn map<U, F>(&self, function: F) -> Lazy<U>
    where
        F: FnOnce(T) -> U + 'static,
    {
        let source = self.clone();
        Lazy::new(move || function(source.value()))
    }

    /// Derives a lazy value from a function returning another `Lazy`,
    /// flattening the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 21);
    /// let result = lazy.flat_map(|x| Lazy::new(move || x * 2));
    ///
    /// assert_eq!(result.value(), 42);
    /// ```
    pub fn flat_map<U, F>(&self, function: F) -> Lazy<U>
    where
        U: Clone,
        F: FnOnce(T) -> Lazy<U> + 'static,
    {
        let source = self.clone();
        Lazy::new(move || function(source.value()).value())
    }

    /// Derives a lazy boolean by testing this value with `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let lazy = Lazy::of(10);
    /// assert!(lazy.filter(|x| *x > 5).value());
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Lazy<bool>
    where
        P: FnOnce(&T) -> bool + 'static,
    {
        let source = self.clone();
        Lazy::new(move || predicate(&source.force()))
    }

    /// Derives a lazy value combining this one with `other`.
    ///
    /// Forcing the result forces (and memoizes) both operands.
    pub fn combine<S, R, C>(&self, other: &Lazy<S>, combiner: C) -> Lazy<R>
    where
        S: Clone + 'static,
        C: FnOnce(T, S) -> R + 'static,
    {
        let first = self.clone();
        let second = other.clone();
        Lazy::new(move || combiner(first.value(), second.value()))
    }

    /// Pairs this value with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_stream::control::Lazy;
    ///
    /// let pair = Lazy::of(1).zip(&Lazy::new(|| "one"));
    /// assert_eq!(pair.value(), (1, "one"));
    /// ```
    pub fn zip<S>(&self, other: &Lazy<S>) -> Lazy<(T, S)>
    where
        S: Clone + 'static,
    {
        self.combine(other, |first, second| (first, second))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for Lazy<T> {
    /// Returns another handle to the same memoization cell.
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Default + 'static> Default for Lazy<T> {
    /// Creates a lazy value that computes `T::default()` when forced.
    fn default() -> Self {
        Self::new(T::default)
    }
}

/// Compares the forced values.
///
/// Comparing forces both sides.
impl<T: PartialEq> PartialEq for Lazy<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.force() == *other.force()
    }
}

impl<T: fmt::Display> fmt::Display for Lazy<T> {
    /// Renders the cached value, or `?` if it has not been computed.
    /// Rendering never forces.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(formatter, "{}", *value),
            None => formatter.write_str("?"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Evaluating => formatter
                .debug_tuple("Lazy")
                .field(&"<evaluating>")
                .finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

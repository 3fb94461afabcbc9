//! Function contracts accepted by the lazy list operators.
//!
//! Each contract is a named alias for a closure shape: it has the matching
//! `Fn` trait as a supertrait and is blanket-implemented for everything of
//! that shape, so closures, function items and other contracts can be passed
//! wherever a contract is expected. The provided method gives the call a name
//! that reads well at the use site.
//!
//! | Contract | Closure shape | Role |
//! |----------|---------------|------|
//! | [`Producer`] | `Fn() -> T` | supplies a value from nothing |
//! | [`Transformer`] | `Fn(T) -> U` | maps one value to another |
//! | [`Combiner`] | `Fn(A, B) -> R` | folds an element into an accumulator |
//! | [`BooleanCondition`] | `Fn(&T) -> bool` | decides whether a value is kept |
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::function::{BooleanCondition, Producer, Transformer};
//!
//! fn even(value: &i32) -> bool {
//!     value % 2 == 0
//! }
//!
//! assert!(even.test(&4));
//! assert_eq!((|| 7).produce(), 7);
//! assert_eq!((|x: i32| x + 1).transform(1), 2);
//! ```

/// A zero-argument function object that produces a value.
///
/// A producer may be invoked any number of times; each call is independent.
pub trait Producer<T>: Fn() -> T {
    /// Produces a value.
    #[inline]
    fn produce(&self) -> T {
        self()
    }
}

impl<T, F> Producer<T> for F where F: Fn() -> T + ?Sized {}

/// A unary function object from `T` to `U`.
pub trait Transformer<T, U>: Fn(T) -> U {
    /// Transforms `value` into a `U`.
    #[inline]
    fn transform(&self, value: T) -> U {
        self(value)
    }
}

impl<T, U, F> Transformer<T, U> for F where F: Fn(T) -> U + ?Sized {}

/// A binary function object combining an accumulator with an element.
pub trait Combiner<A, B, R>: Fn(A, B) -> R {
    /// Combines `left` (the accumulator) with `right` (the element).
    #[inline]
    fn combine(&self, left: A, right: B) -> R {
        self(left, right)
    }
}

impl<A, B, R, F> Combiner<A, B, R> for F where F: Fn(A, B) -> R + ?Sized {}

/// A predicate function object.
pub trait BooleanCondition<T: ?Sized>: Fn(&T) -> bool {
    /// Returns `true` when `value` satisfies the condition.
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

impl<T: ?Sized, F> BooleanCondition<T> for F where F: Fn(&T) -> bool + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn closure_is_a_producer() {
        let producer = || "value".to_string();
        assert_eq!(producer.produce(), "value");
    }

    #[rstest]
    fn stateful_producer_is_invoked_per_call() {
        let calls = Cell::new(0);
        let producer = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        assert_eq!(producer.produce(), 1);
        assert_eq!(producer.produce(), 2);
    }

    #[rstest]
    fn function_item_is_a_transformer() {
        fn length(value: &str) -> usize {
            value.len()
        }
        assert_eq!(length.transform("four"), 4);
    }

    #[rstest]
    fn closure_is_a_combiner() {
        let sum = |accumulator: i64, element: i32| accumulator + i64::from(element);
        assert_eq!(sum.combine(40, 2), 42);
    }

    #[rstest]
    fn boxed_condition_is_a_boolean_condition() {
        let positive: Box<dyn Fn(&i32) -> bool> = Box::new(|value| *value > 0);
        assert!(positive.test(&3));
    }

    #[rstest]
    #[case(3, true)]
    #[case(-3, false)]
    fn closure_is_a_boolean_condition(#[case] value: i32, #[case] expected: bool) {
        let positive = |value: &i32| *value > 0;
        assert_eq!(positive.test(&value), expected);
    }
}

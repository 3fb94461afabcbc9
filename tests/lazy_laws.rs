//! Property-based tests for `Lazy<T>` laws.
//!
//! - **Idempotence**: every force returns the same value
//! - **Memoization**: the producer runs at most once
//! - **Functor Laws**: identity and composition for `map`
//! - **Monad Laws**: left identity, right identity, associativity for `flat_map`

use lazy_stream::control::Lazy;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

proptest! {
    #[test]
    fn prop_lazy_idempotence(value in any::<i32>()) {
        let lazy = Lazy::new(move || value);

        let first = *lazy.force();
        let second = *lazy.force();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first, value);
    }

    #[test]
    fn prop_lazy_memoization(value in any::<String>(), forces in 1_usize..10) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.set(counter.get() + 1);
            value.clone()
        });

        prop_assert_eq!(calls.get(), 0);
        for _ in 0..forces {
            let _ = lazy.force();
        }
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn prop_lazy_functor_identity(value in any::<i32>()) {
        let lazy = Lazy::new(move || value);
        prop_assert_eq!(lazy.map(|x| x).value(), lazy.value());
    }

    #[test]
    fn prop_lazy_functor_composition(value in any::<i32>()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);
        let lazy = Lazy::of(value);

        let left = lazy.map(function1).map(function2).value();
        let right = lazy.map(move |x| function2(function1(x))).value();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_lazy_monad_left_identity(value in any::<i32>()) {
        let function = |x: i32| Lazy::new(move || x.wrapping_mul(3));
        let left = Lazy::of(value).flat_map(function).value();
        let right = function(value).value();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_lazy_monad_right_identity(value in any::<i32>()) {
        let lazy = Lazy::new(move || value);
        prop_assert_eq!(lazy.flat_map(Lazy::of).value(), value);
    }

    #[test]
    fn prop_lazy_monad_associativity(value in any::<i32>()) {
        let function1 = |x: i32| Lazy::of(x.wrapping_add(1));
        let function2 = |x: i32| Lazy::of(x.wrapping_sub(5));
        let lazy = Lazy::of(value);

        let left = lazy.flat_map(function1).flat_map(function2).value();
        let right = lazy.flat_map(move |x| function1(x).flat_map(function2)).value();
        prop_assert_eq!(left, right);
    }
}

//! Property-based tests for `Maybe<T>`.

use lazy_stream::control::Maybe;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::of)
}

proptest! {
    #[test]
    fn prop_option_roundtrip(option in any::<Option<i32>>()) {
        prop_assert_eq!(Maybe::of(option).into_option(), option);
    }

    #[test]
    fn prop_map_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_map_composition(maybe in maybe_strategy()) {
        let function1 = |x: i32| x.wrapping_add(7);
        let function2 = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(
            maybe.map(function1).map(function2),
            maybe.map(move |x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_flat_map_some_is_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.flat_map(Maybe::some), maybe);
    }

    #[test]
    fn prop_filter_true_is_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.filter(|_| true), maybe);
    }

    #[test]
    fn prop_filter_false_is_none(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.filter(|_| false), Maybe::none());
    }

    #[test]
    fn prop_filter_matches_option_filter(maybe in maybe_strategy()) {
        let even = |x: &i32| x % 2 == 0;
        prop_assert_eq!(maybe.filter(even).into_option(), maybe.into_option().filter(even));
    }

    #[test]
    fn prop_or_else_agrees_with_option(maybe in maybe_strategy(), fallback in any::<i32>()) {
        prop_assert_eq!(maybe.or_else(fallback), maybe.into_option().unwrap_or(fallback));
    }
}

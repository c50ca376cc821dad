//! Property-based tests for the container laws and conversions

use monad_maniac::disjunction;
use monad_maniac::optional;
use monad_maniac::{Disjunction, Optional};
use proptest::prelude::*;

fn half_if_even(x: i32) -> Option<i32> {
    if x % 2 == 0 {
        Some(x / 2)
    } else {
        None
    }
}

#[test]
fn smoke_rendering() {
    assert_eq!(Optional::of(10).map(|x| x * 2).to_string(), "Present(20)");
    assert_eq!(
        Optional::<i32>::of(None).map(|x| x * 2).to_string(),
        "Absent()"
    );

    let left: Disjunction<&str, i32> = Disjunction::left("err");
    let right: Disjunction<&str, i32> = Disjunction::right(150);
    assert_eq!(left.map(|x| x * 2).to_string(), "Left(err)");
    assert_eq!(right.map(|x| x * 2).to_string(), "Right(300)");
}

#[test]
fn falsy_right_is_not_filtered_by_accident() {
    let zero: Disjunction<i32, i32> = Disjunction::right(0);
    assert_eq!(zero.filter(|_| true), Disjunction::Right(0));
    assert_eq!(zero.filter(|x| *x != 0).map(|x| 1 / x).get(), 0);

    let empty: Disjunction<String, String> = Disjunction::right(String::new());
    assert!(empty.filter(|_| true).is_right());
}

proptest! {
    // ========== Optional ==========

    #[test]
    fn prop_map_nullable_get_or_else(x: i32, default: i32) {
        let result = Optional::of(x).map_nullable(half_if_even).get_or_else(default);
        match half_if_even(x) {
            Some(v) => prop_assert_eq!(result, v),
            None => prop_assert_eq!(result, default),
        }
    }

    #[test]
    fn prop_lift_matches_map_nullable(x: i32) {
        prop_assert_eq!(
            optional::lift(half_if_even, x),
            Optional::of(x).map_nullable(half_if_even)
        );
    }

    #[test]
    fn prop_present_is_just(x: i32) {
        let maybe = Optional::of(x);
        prop_assert!(maybe.is_just());
        prop_assert!(!maybe.is_nothing());
    }

    #[test]
    fn prop_map_identity(opt in any::<Option<i32>>()) {
        let maybe = Optional::from_option(opt);
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_chain_left_identity(x: i32) {
        let f = |v: i32| Optional::from_option(half_if_even(v));
        prop_assert_eq!(Optional::of(x).chain(f), f(x));
    }

    #[test]
    fn prop_chain_right_identity(opt in any::<Option<i32>>()) {
        let maybe = Optional::from_option(opt);
        prop_assert_eq!(maybe.chain(Optional::Present), maybe);
    }

    #[test]
    fn prop_join_of_nested_present(x: i32) {
        prop_assert_eq!(Optional::Present(Optional::Present(x)).join(), Optional::Present(x));
    }

    #[test]
    fn prop_curried_matches_method(x: i32, y: i32) {
        let add = optional::curried::map(move |v: i32| v.wrapping_add(y));
        prop_assert_eq!(add(Optional::of(x)), Optional::of(x).map(|v| v.wrapping_add(y)));
    }

    #[test]
    fn prop_option_roundtrip(opt in any::<Option<String>>()) {
        let back: Option<String> = Optional::from_option(opt.clone()).into();
        prop_assert_eq!(back, opt);
    }

    // ========== Disjunction ==========

    #[test]
    fn prop_right_to_maybe(x: i32, default: i32) {
        let right: Disjunction<String, i32> = Disjunction::right(x);
        prop_assert_eq!(right.to_maybe().get_or_else(default), x);
    }

    #[test]
    fn prop_left_to_maybe(x: i32, default: i32) {
        let left: Disjunction<i32, i32> = Disjunction::left(x);
        prop_assert_eq!(left.to_maybe().get_or_else(default), default);
    }

    #[test]
    fn prop_exactly_one_side(x: i32, go_left: bool) {
        let d: Disjunction<i32, i32> = if go_left {
            Disjunction::left(x)
        } else {
            Disjunction::right(x)
        };
        prop_assert_ne!(d.is_left(), d.is_right());
        prop_assert_eq!(d.get(), x);
    }

    #[test]
    fn prop_left_short_circuits_map(msg in "[a-z]{1,10}") {
        let left: Disjunction<String, i32> = Disjunction::left(msg.clone());
        prop_assert_eq!(left.map(|x| x * 2), Disjunction::Left(msg));
    }

    #[test]
    fn prop_attempt_mirrors_result(x: i32) {
        let checked = |v: i32| if v >= 0 { Ok(v) } else { Err(format!("negative: {}", v)) };
        let result = disjunction::attempt(checked, x);
        if x >= 0 {
            prop_assert_eq!(result, Disjunction::Right(x));
        } else {
            prop_assert!(result.is_left());
            prop_assert_eq!(result.into_left(), Some(format!("negative: {}", x)));
        }
    }

    #[test]
    fn prop_to_either_to_maybe_roundtrip(opt in any::<Option<i32>>()) {
        let maybe = Optional::from_option(opt);
        prop_assert_eq!(maybe.to_either("absent").to_maybe(), maybe);
    }

    #[test]
    fn prop_partition_preserves_count(flags in prop::collection::vec(any::<bool>(), 0..50)) {
        let items: Vec<Disjunction<usize, usize>> = flags
            .iter()
            .enumerate()
            .map(|(i, left)| if *left { Disjunction::left(i) } else { Disjunction::right(i) })
            .collect();

        let (lefts, rights) = disjunction::partition(items);
        prop_assert_eq!(lefts.len() + rights.len(), flags.len());
        prop_assert_eq!(lefts.len(), flags.iter().filter(|f| **f).count());
    }
}

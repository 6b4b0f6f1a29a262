//! Algebraic laws of the Omittable combinators
//!
//! - absent short-circuits every combinator without calling its closure
//! - of(v) is always present, null payloads included
//! - map(identity) is a no-op
//! - flat_map is associative

use crate::common::*;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn halve_even(v: Option<i32>) -> Omittable<Option<i32>> {
    match v {
        Some(n) if n % 2 == 0 => Omittable::of(Some(n / 2)),
        Some(_) => Omittable::absent(),
        None => Omittable::of(None),
    }
}

fn drop_negative(v: Option<i32>) -> Omittable<Option<i32>> {
    match v {
        Some(n) if n < 0 => Omittable::absent(),
        other => Omittable::of(other.map(|n| n.saturating_add(1))),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        // Do not write `.proptest-regressions` files into the repo.
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn of_is_always_present(v in arb_nullable()) {
        let o = Omittable::of(v);
        prop_assert!(o.is_present());
        prop_assert!(!o.is_absent());
    }

    #[test]
    fn map_identity_is_noop(o in arb_omittable()) {
        prop_assert_eq!(o.map(|v| v), o);
    }

    #[test]
    fn map_composes(o in arb_omittable()) {
        let f = |v: Option<i32>| v.map(|n| n.wrapping_mul(3));
        let g = |v: Option<i32>| v.map(|n| n.wrapping_sub(7));
        prop_assert_eq!(o.map(f).map(g), o.map(|v| g(f(v))));
    }

    #[test]
    fn map_never_produces_absent_from_present(v in arb_nullable()) {
        prop_assert!(Omittable::of(v).map(|_| None::<i32>).is_present());
    }

    #[test]
    fn filter_true_keeps_false_drops(v in arb_nullable()) {
        prop_assert_eq!(Omittable::of(v).filter(|_| true), Omittable::of(v));
        prop_assert_eq!(Omittable::of(v).filter(|_| false), Omittable::absent());
    }

    #[test]
    fn flat_map_is_associative(o in arb_omittable()) {
        let left = o.flat_map(halve_even).flat_map(drop_negative);
        let right = o.flat_map(|v| halve_even(v).flat_map(drop_negative));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn flat_map_left_identity(v in arb_nullable()) {
        prop_assert_eq!(Omittable::of(v).flat_map(halve_even), halve_even(v));
    }

    #[test]
    fn flat_map_right_identity(o in arb_omittable()) {
        prop_assert_eq!(o.flat_map(Omittable::of), o);
    }

    #[test]
    fn or_keeps_present(v in arb_nullable(), alt in arb_omittable()) {
        let calls = CallCounter::new();
        let result = Omittable::of(v).or(|| {
            calls.hit();
            alt
        });
        prop_assert_eq!(result, Omittable::of(v));
        prop_assert_eq!(calls.count(), 0);
    }

    #[test]
    fn or_replaces_absent(alt in arb_omittable()) {
        prop_assert_eq!(Omittable::absent().or(|| alt), alt);
    }

    #[test]
    fn iter_matches_presence(o in arb_omittable()) {
        prop_assert_eq!(o.iter().count(), usize::from(o.is_present()));
        prop_assert_eq!(o.into_iter().next(), o.into_option());
    }
}

#[test]
fn test_absent_is_absent() {
    assert!(Omittable::<i32>::absent().is_absent());
    assert!(!Omittable::<i32>::absent().is_present());
    assert!(Omittable::<Option<String>>::absent().is_absent());
    assert!(Omittable::<()>::absent().is_absent());
}

#[test]
fn test_absent_short_circuits_all_combinators() {
    let calls = CallCounter::new();
    let absent = Omittable::<Option<i32>>::absent();

    assert_eq!(
        absent.map(|v| {
            calls.hit();
            v
        }),
        Omittable::absent()
    );
    assert_eq!(
        absent.filter(|_| {
            calls.hit();
            true
        }),
        Omittable::absent()
    );
    assert_eq!(
        absent.flat_map(|v| {
            calls.hit();
            Omittable::of(v)
        }),
        Omittable::absent()
    );
    absent.if_present(|_| calls.hit());
    assert_eq!(absent.or_else_throw_with(|| "absent"), Err("absent"));

    assert_eq!(calls.count(), 0);
}

#[test]
fn test_present_calls_each_closure_exactly_once() {
    let calls = CallCounter::new();
    let present = Omittable::of(Some(4));

    present.map(|v| {
        calls.hit();
        v
    });
    present.filter(|_| {
        calls.hit();
        true
    });
    present.flat_map(|v| {
        calls.hit();
        Omittable::of(v)
    });
    present.if_present(|_| calls.hit());
    present.if_present_or_else(|_| calls.hit(), || panic!("absent action on present value"));

    assert_eq!(calls.count(), 5);
}

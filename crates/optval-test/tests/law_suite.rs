//! End-to-end law runs and short-circuit scenarios

use optval_core::{Nullish, Optional, OptionalError, EMPTY};
use optval_test::{init_test_logging, CallProbe, Law, LawChecker, LawConfig};
use proptest::prelude::*;

#[test]
fn default_config_holds() {
    init_test_logging();
    let report = LawChecker::new(LawConfig::default()).unwrap().run();

    assert_eq!(report.cases_run, 1000);
    assert!(report.passed(), "violations: {:?}", report.violations);
}

#[test]
fn empty_map_never_invokes_mapper() {
    let probe = CallProbe::new();
    let out = Optional::<&str>::empty().map(probe.mapper(|s: &str| s.len()));

    assert_eq!(out, EMPTY);
    assert!(!probe.was_called());
}

#[test]
fn empty_filter_never_invokes_predicate() {
    let probe = CallProbe::new();
    let out = Optional::<u8>::empty().filter(probe.predicate::<u8>(true));

    assert!(out.is_empty());
    assert_eq!(probe.calls(), 0);
}

#[test]
fn present_or_else_get_never_invokes_supplier() {
    let probe = CallProbe::new();
    let out = Optional::of(1).unwrap().or_else_get(probe.supplier(2));

    assert_eq!(out, 1);
    assert!(!probe.was_called());
}

#[test]
fn rejections_are_distinguishable() {
    let errors = [
        Optional::<u8>::empty().get().unwrap_err(),
        Optional::<u8>::of(Nullish::Null).unwrap_err(),
        Optional::<u8>::of_undefinable(Nullish::Null).unwrap_err(),
        Optional::<u8>::of_nullable(Nullish::Undefined).unwrap_err(),
    ];

    assert_eq!(
        errors,
        [
            OptionalError::NotPresent,
            OptionalError::Nullish,
            OptionalError::Null,
            OptionalError::Undefined,
        ]
    );
}

#[tokio::test]
async fn async_if_present_or_else_dispatches_once() {
    let present = CallProbe::new();
    let absent = CallProbe::new();

    Optional::of("x")
        .unwrap()
        .if_present_or_else_async(present.async_callback::<&str>(), absent.async_action())
        .await;
    Optional::<&str>::empty()
        .if_present_or_else_async(present.async_callback::<&str>(), absent.async_action())
        .await;

    assert_eq!(present.calls(), 1);
    assert_eq!(absent.calls(), 1);
}

#[tokio::test]
async fn async_map_on_empty_skips_mapper() {
    let probe = CallProbe::new();
    let out = Optional::<i32>::empty()
        .map_async(probe.async_mapper(|v: i32| v + 1))
        .await;

    assert_eq!(out, EMPTY);
    assert!(!probe.was_called());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn laws_hold_for_any_seed(seed in any::<u64>(), sentinel_prob in 0.0f64..1.0) {
        let config = LawConfig { cases: 64, sentinel_prob, seed };
        let report = LawChecker::new(config).unwrap().run();

        prop_assert!(report.passed());
        prop_assert_eq!(report.violations_of(Law::AsyncParity).count(), 0);
    }
}

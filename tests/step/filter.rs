use fntry::prelude::*;

use crate::common::{failing, Calls};

#[test]
fn filter_true_keeps_chain_healthy() {
    let step = Step::with(4).filter(|n| n % 2 == 0);

    assert!(!step.is_failed());
    assert_eq!(step.or_else(0), 4);
}

#[test]
fn filter_false_fails_and_retains_value() {
    let step = Step::with(5).filter(|n| n % 2 == 0);

    assert!(step.is_failed());
    assert_eq!(step.get(), Some(&5));
    assert!(step.error().unwrap().is_predicate_mismatch());
}

#[test]
fn filter_rejection_surfaces_value_through_as_optional() {
    let value = Step::with("draft").filter(|s| s.starts_with("final")).as_optional();

    assert_eq!(value, Some("draft"));
}

#[test]
fn filter_is_skipped_on_failed_chain() {
    let calls = Calls::default();

    let step = Step::with(1).apply(failing("boom")).filter(|_| {
        calls.hit();
        false
    });

    assert_eq!(calls.count(), 0);
    assert!(!step.error().unwrap().is_predicate_mismatch());
}

#[test]
fn operations_after_rejected_filter_are_skipped() {
    let calls = Calls::default();

    let value = Step::with(10)
        .filter(|n| *n > 100)
        .apply(|n| {
            calls.hit();
            Ok::<_, &str>(n * 2)
        })
        .or_else(-1);

    assert_eq!(calls.count(), 0);
    assert_eq!(value, -1);
}

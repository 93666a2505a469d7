use fntry::prelude::*;
use fntry::LazyContext;

use crate::common::{failing_consumer, Calls};

#[test]
fn context_is_ignored_on_healthy_chain() {
    let calls = Calls::default();

    let step = Step::with(1).context("static label").context(LazyContext::new(|| {
        calls.hit();
        String::from("lazy label")
    }));

    assert!(!step.is_failed());
    assert_eq!(calls.count(), 0);
}

#[test]
fn context_labels_failed_chain_most_recent_first() {
    let step = Step::with(1)
        .consume(failing_consumer("write"))
        .context("saving draft")
        .context(context!("user {}", 42));

    let err = step.error().unwrap();
    let labels: Vec<&str> = err.context().collect();

    assert_eq!(labels, ["user 42", "saving draft"]);
    assert_eq!(err.error_chain(), "user 42 -> saving draft -> fixture failed: write");
}

#[test]
fn context_before_failure_is_not_recorded() {
    let step = Step::with(1).context("too early").consume(failing_consumer("late"));

    assert!(!step.error().unwrap().has_context());
}

#[test]
fn context_survives_map() {
    let outcome = Step::with("x")
        .consume(failing_consumer("parse"))
        .context("reading header")
        .map(|s| s.parse::<u32>());

    assert_eq!(outcome.error().unwrap().context().next(), Some("reading header"));
}

#[test]
fn context_keeps_retained_value() {
    let step = Step::with(9).consume(failing_consumer("x")).context("label");

    assert_eq!(step.get(), Some(&9));
}

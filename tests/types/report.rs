use fntry::prelude::*;
use fntry::Report;

use crate::common::failing_consumer;

#[test]
fn report_of_healthy_chain_has_no_error_fields() {
    let report = Report::capture(&Step::with(3));

    assert_eq!(report, Report { value: Some(3), failed: false, error: None, context: vec![] });

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({ "value": 3, "failed": false }));
}

#[test]
fn report_of_failed_chain_keeps_message_and_context() {
    let step = Step::with(7).consume(failing_consumer("charge")).context("billing").context("checkout");
    let report = Report::capture(&step);

    assert_eq!(report.value, Some(7));
    assert!(report.failed);
    assert_eq!(report.error.as_deref(), Some("fixture failed: charge"));
    assert_eq!(report.context, ["checkout", "billing"]);
}

#[test]
fn report_round_trips_through_json() {
    let outcome = Step::with("12x").map(|s| s.parse::<i32>());
    let report = Report::capture(&outcome);

    let json = serde_json::to_string(&report).unwrap();
    let back: Report<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, report);
    assert_eq!(back.value, None);
    assert!(back.failed);
}

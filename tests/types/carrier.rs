use fntry::{Carrier, ChainError};

#[test]
fn healthy_carrier_has_value_and_no_error() {
    let carrier = Carrier::healthy("value");

    assert!(!carrier.is_failed());
    assert_eq!(carrier.value(), Some(&"value"));
    assert!(carrier.error().is_none());
}

#[test]
fn failed_carrier_always_has_error() {
    let carrier = Carrier::failed(Some(1), ChainError::new("boom"));

    assert!(carrier.is_failed());
    assert_eq!(carrier.error().map(ToString::to_string).as_deref(), Some("boom"));
    assert_eq!(carrier.value(), Some(&1));
}

#[test]
fn into_parts_splits_state() {
    let (value, error) = Carrier::healthy(5).into_parts();
    assert_eq!(value, Some(5));
    assert!(error.is_none());

    let (value, error) = Carrier::<i32>::failed(None, ChainError::new("x")).into_parts();
    assert_eq!(value, None);
    assert!(error.is_some());
}

#[test]
fn into_value_returns_retained_value() {
    assert_eq!(Carrier::failed(Some('r'), ChainError::new("x")).into_value(), Some('r'));
    assert_eq!(Carrier::healthy('h').into_value(), Some('h'));
}

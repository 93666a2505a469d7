use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use fntry::prelude::*;
use fntry::FatalError;

use crate::common::{failing, failing_consumer, Calls, FixtureError, Foo};

fn catch_fatal<R>(f: impl FnOnce() -> R) -> FatalError {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).err().expect("expected a fatal escalation");
    *payload.downcast::<FatalError>().expect("payload should be a FatalError")
}

#[test]
fn or_else_returns_other_exactly_when_failed() {
    let cases = [
        (Step::with(1), 1),
        (Step::with(1).apply(failing("a")), 99),
        (Step::with(1).filter(|_| false), 99),
        (Step::with(1).consume(|_| Ok::<_, FixtureError>(())), 1),
    ];

    for (step, expected) in cases {
        let failed = step.is_failed();
        let value = step.or_else(99);
        assert_eq!(value, expected);
        assert_eq!(value == 99, failed);
    }
}

#[test]
fn or_else_consume_receives_retained_value() {
    let seen = RefCell::new(None);

    Step::with(Foo::new(2))
        .apply(|foo| Ok::<_, FixtureError>(foo.clone()))
        .consume(failing_consumer("print"))
        .apply(|_| Ok::<_, FixtureError>(Foo::new(100)))
        .or_else_consume(|retained| {
            *seen.borrow_mut() = retained;
            Ok::<_, FixtureError>(())
        });

    assert_eq!(*seen.borrow(), Some(Foo::new(2)));
}

#[test]
fn or_else_consume_receives_none_after_map() {
    let seen = RefCell::new(Some(0));

    Step::with(5).map(|_| Err::<i32, _>(FixtureError("map"))).or_else_consume(|retained| {
        *seen.borrow_mut() = retained;
        Ok::<_, FixtureError>(())
    });

    assert_eq!(*seen.borrow(), None);
}

#[test]
fn or_else_consume_receives_none_after_failed_of() {
    let seen = RefCell::new(Some(Foo::new(0)));

    fntry::of(|| Err::<Foo, _>(FixtureError("of"))).or_else_consume(|retained| {
        *seen.borrow_mut() = retained;
        Ok::<_, FixtureError>(())
    });

    assert_eq!(*seen.borrow(), None);
}

#[test]
fn or_else_consume_is_skipped_on_healthy_chain() {
    let calls = Calls::default();

    Step::with(1).or_else_consume(|_| {
        calls.hit();
        Ok::<_, FixtureError>(())
    });

    assert_eq!(calls.count(), 0);
}

#[test]
fn or_else_consume_failure_is_fatal() {
    let fatal = catch_fatal(|| {
        Step::with(1)
            .apply(failing("chain"))
            .or_else_consume(|_| Err(FixtureError("fallback")));
    });

    assert_eq!(fatal.cause().downcast_ref::<FixtureError>(), Some(&FixtureError("fallback")));
}

#[test]
fn or_simply_runs_only_on_failure() {
    let calls = Calls::default();

    fntry::just(|| Err(FixtureError("print"))).or_simply(|| calls.hit());
    fntry::just(|| Ok::<_, FixtureError>(())).or_simply(|| calls.hit());

    assert_eq!(calls.count(), 1);
}

#[test]
fn or_else_get_is_lazy() {
    let calls = Calls::default();

    let value = Step::with(7).or_else_get(|| {
        calls.hit();
        Ok::<_, FixtureError>(0)
    });

    assert_eq!(value, 7);
    assert_eq!(calls.count(), 0);
}

#[test]
fn or_else_get_failure_is_fatal() {
    let fatal = catch_fatal(|| {
        Step::with(1).apply(failing("chain")).or_else_get(|| Err(FixtureError("supplier")))
    });

    assert_eq!(fatal.cause().to_string(), "fixture failed: supplier");
}

#[test]
fn or_then_recovers_from_retained_value() {
    let result = fntry::of(|| Err::<String, _>(FixtureError("upper")))
        .or_then(|retained| Ok::<_, FixtureError>(retained.map_or_else(|| "NULL".to_string(), |s| s.to_uppercase())));

    assert_eq!(result.as_deref(), Some("NULL"));
}

#[test]
fn or_then_passes_retained_value_to_fallback() {
    let result = Step::with(String::from("a string"))
        .apply(failing("x"))
        .or_then(|retained| Ok::<_, FixtureError>(retained.unwrap_or_default().to_uppercase()));

    assert_eq!(result.as_deref(), Some("A STRING"));
}

#[test]
fn or_then_returns_none_when_fallback_fails() {
    let result = fntry::of(|| Err::<String, _>(FixtureError("first")))
        .or_then(|_| Err(FixtureError("second")));

    assert_eq!(result, None);
}

#[test]
fn or_then_returns_value_on_healthy_chain() {
    let calls = Calls::default();

    let result = Step::with(5).or_then(|_| {
        calls.hit();
        Ok::<_, FixtureError>(0)
    });

    assert_eq!(result, Some(5));
    assert_eq!(calls.count(), 0);
}

#[test]
fn otherwise_handles_captured_error() {
    let logged = RefCell::new(Vec::new());

    Step::with("Hello World")
        .consume(failing_consumer("ascii art"))
        .otherwise(|err| logged.borrow_mut().push(err.to_string()));

    assert_eq!(*logged.borrow(), ["fixture failed: ascii art"]);
}

#[test]
fn otherwise_is_not_called_on_success() {
    let calls = Calls::default();

    Step::with("Hello World")
        .consume(|_| Ok::<_, FixtureError>(()))
        .otherwise(|_| calls.hit());

    assert_eq!(calls.count(), 0);
}

#[test]
fn as_optional_ignores_failure_state() {
    assert_eq!(Step::with(1).as_optional(), Some(1));
    assert_eq!(Step::with(1).apply(failing("x")).as_optional(), Some(1));
    assert_eq!(fntry::of(|| Err::<i32, _>(FixtureError("x"))).apply(|n| Ok::<_, FixtureError>(*n)).as_optional(), None);
}

#[test]
fn into_result_maps_state_to_result() {
    assert_eq!(Step::with(3).into_result().unwrap(), 3);

    let err = Step::with(3).apply(failing("first")).apply(failing("second")).into_result().unwrap_err();
    assert_eq!(err.downcast_ref::<FixtureError>(), Some(&FixtureError("first")));
}

#[test]
fn into_result_supports_question_mark() {
    fn total(a: &str, b: &str) -> Result<i64, ChainError> {
        let a = fntry::with(a).map(|s| s.parse::<i64>()).into_result()?;
        let b = fntry::with(b).map(|s| s.parse::<i64>()).into_result()?;
        Ok(a + b)
    }

    assert_eq!(total("2", "40").unwrap(), 42);
    assert!(total("2", "forty").is_err());
}

#[test]
fn fallback_is_reachable_mid_chain() {
    let seen = Cell::new(0);

    let value = Step::with(10).apply(|n| Ok::<_, FixtureError>(n + 1)).or_else_get(|| {
        seen.set(1);
        Ok::<_, FixtureError>(0)
    });

    assert_eq!(value, 11);
    assert_eq!(seen.get(), 0);
}

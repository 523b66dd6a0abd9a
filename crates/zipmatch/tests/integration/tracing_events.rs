//! Observability of the zipping and injection paths.

use zipmatch::{At, Error2, Inject, zip, zip_any};

use crate::common::CapturedLogs;

#[test]
fn test_short_circuit_is_traced() {
    let logs = CapturedLogs::new();
    let out = logs.capture(|| {
        zip(
            |a: i32, b: i32, c: i32| a + b + c,
            (Ok::<_, &str>(1), Err("second"), Err("third")),
        )
    });
    assert_eq!(out, Err("second"));

    let text = logs.contents();
    assert!(text.contains("zip short-circuited"), "{text}");
    assert!(text.contains("position=1"), "{text}");
    assert!(text.contains("arity=3"), "{text}");
}

#[test]
fn test_success_is_quiet() {
    let logs = CapturedLogs::new();
    let out = logs.capture(|| zip_any(|a: i32, b: u8| a + i32::from(b), (Ok::<_, ()>(1), Ok::<_, String>(2))));
    assert_eq!(out, Ok::<i32, Error2<(), String>>(3));
    assert!(!logs.contents().contains("zip short-circuited"));
}

#[test]
fn test_injection_names_union_and_slot() {
    let logs = CapturedLogs::new();
    let err = logs.capture(|| <Error2<u8, char> as Inject<char, At<1>>>::inject('c'));
    assert_eq!(err, Error2::Second('c'));

    let text = logs.contents();
    assert!(text.contains("injected into positional slot"), "{text}");
    assert!(text.contains("union=\"Error2\""), "{text}");
    assert!(text.contains("slot=1"), "{text}");
}

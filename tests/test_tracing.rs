#[macro_use]
mod common;

use common::*;

fn traced<F>(f: F) -> String
where
    F: FnOnce(),
{
    let output = Captured::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    output.contents()
}

#[test]
fn test_capture_logs_cause() {
    let logged = traced(|| {
        let cause = caught!(is(false, "boom"));
        assert_str_eq!(cause.to_string(), "boom");
    });

    assert!(logged.contains("DEBUG"));
    assert!(logged.contains("assertion failure captured"));
    assert!(logged.contains("cause=boom"));
}

#[test]
fn test_forwarded_panic_logged() {
    let logged = traced(|| {
        let message = panic_message(|| {
            let _ = affirm::catch(|| panic!("unrelated"));
        });
        assert_eq!(message.as_deref(), Some("unrelated"));
    });

    assert!(logged.contains("TRACE"));
    assert!(logged.contains("forwarding unrelated panic"));
    assert!(!logged.contains("assertion failure captured"));
}

#[test]
fn test_passing_assertion_logs_nothing() {
    let logged = traced(|| passes!(is(true, "fine")));
    assert_str_eq!(logged, "");
}

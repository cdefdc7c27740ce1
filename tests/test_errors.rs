#[macro_use]
mod common;

use std::error::Error as StdError;
use std::fmt;

use common::*;

///////////////////////////////////////////////////////////////////////////////
// AssertionError

#[test]
fn test_assertion_error_message() {
    let error = AssertionError::new("R");
    assert_str_eq!(error.to_string(), "AssersionError: R");
    assert_str_eq!(
        format!("{:?}", error),
        "AssertionError { cause: Message(\"R\") }"
    );
}

#[derive(Debug)]
struct Corrupt;

impl fmt::Display for Corrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("corrupt block")
    }
}

impl StdError for Corrupt {}

fn chain<'a>(error: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(error), |e| (*e).source())
}

#[test]
fn test_assertion_error_unwraps_to_cause() {
    let error = AssertionError::new(Cause::error(fmt::Error));
    let source = error.source().unwrap();
    assert!(source.is::<fmt::Error>());
    assert!(error.cause().is::<fmt::Error>());
    assert_eq!(error.into_cause().downcast::<fmt::Error>().unwrap(), fmt::Error);
}

#[test]
fn test_assertion_error_walks_chain() {
    let error = AssertionError::new("root");
    let rendered: Vec<_> = chain(&error).map(ToString::to_string).collect();
    assert_eq!(rendered, ["AssersionError: root", "root"]);
}

#[test]
fn test_assertion_error_chain_reaches_wrapped_error() {
    let error = AssertionError::new(Cause::error(Corrupt));
    let rendered: Vec<_> = chain(&error).map(ToString::to_string).collect();
    assert_eq!(rendered, ["AssersionError: corrupt block", "corrupt block"]);
    assert!(chain(&error).any(|e| e.is::<Corrupt>()));

    let error = anyhow::Error::new(error);
    assert!(error.chain().any(|e| e.is::<Corrupt>()));
    assert!(error.downcast_ref::<AssertionError>().is_some());
}

#[test]
fn test_assertion_error_empty_cause_ends_chain() {
    let error = AssertionError::default();
    assert_eq!(chain(&error).count(), 1);
}

///////////////////////////////////////////////////////////////////////////////
// Cause

#[test]
fn test_cause_display() {
    assert_str_eq!(Cause::Empty.to_string(), "");
    assert_str_eq!(Cause::message("text").to_string(), "text");
    assert_str_eq!(Cause::error(fmt::Error).to_string(), fmt::Error.to_string());
    assert_str_eq!(Cause::Unknown.to_string(), UNKNOWN_CAUSE);
}

#[test]
fn test_cause_from_any() {
    assert!(matches!(
        Cause::from_any(Box::new("static")),
        Cause::Message(m) if m == "static"
    ));
    assert!(matches!(
        Cause::from_any(Box::new(String::from("owned"))),
        Cause::Message(m) if m == "owned"
    ));

    let boxed: Box<dyn StdError + Send + Sync> = Box::new(fmt::Error);
    assert!(Cause::from_any(Box::new(boxed)).is::<fmt::Error>());

    assert!(Cause::from_any(Box::new(Cause::Empty)).is_empty());
    assert_str_eq!(
        Cause::from_any(Box::new(AssertionError::new("marker"))).to_string(),
        "marker"
    );
}

#[test]
fn test_cause_from_any_unknown() {
    let cause = Cause::from_any(Box::new(42_u8));
    assert!(matches!(cause, Cause::Unknown));
    assert_str_eq!(cause.to_string(), "unknown error object used");

    let cause = Cause::from_any(Box::new(vec![1, 2, 3]));
    assert_str_eq!(cause.to_string(), "unknown error object used");
}

#[test]
fn test_cause_from_panic_payload() {
    let payload = std::panic::catch_unwind(|| panic!("payload")).unwrap_err();
    assert_str_eq!(Cause::from_any(payload).to_string(), "payload");
}

#[test]
fn test_cause_downcast_mismatch_returns_self() {
    let cause = Cause::error(fmt::Error);
    let cause = cause.downcast::<std::num::ParseIntError>().unwrap_err();
    assert!(cause.is::<fmt::Error>());

    let cause = Cause::message("text").downcast::<fmt::Error>().unwrap_err();
    assert_str_eq!(cause.to_string(), "text");
    assert!(cause.downcast_ref::<fmt::Error>().is_none());
}

#[test]
fn test_cause_conversions() {
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(fmt::Error);
    assert!(Cause::from(boxed).is::<fmt::Error>());
    assert!(matches!(Cause::from("a"), Cause::Message(_)));
    assert!(matches!(Cause::from(String::from("b")), Cause::Message(_)));
    assert!(Cause::default().is_empty());
}

use std::error::Error as StdError;

use crate::absent::Absent;
use crate::error::{AssertionError, Cause};
use crate::reason::{IntoReasons, Options};

/// Asserts `condition` holds.
///
/// Reasons are only merged once the condition is found to be false. Without
/// any reason the raised failure wraps [`Cause::Empty`].
///
/// # Panics
///
/// Raises an [`AssertionError`] if `condition` is `false`.
///
/// # Example
///
/// ```
/// let cause = affirm::catch(|| affirm::is(1 + 1 == 3, "math is broken")).unwrap_err();
///
/// assert_eq!(cause.to_string(), "math is broken");
/// ```
#[track_caller]
pub fn is<'a>(condition: bool, reasons: impl IntoReasons<'a>) {
    if !condition {
        Options::merge(reasons).into_reason().raise();
    }
}

/// Asserts `value` is absent.
///
/// See [`Absent`] for what counts as absent.
///
/// # Panics
///
/// Raises an [`AssertionError`] if `value` is present.
///
/// # Example
///
/// ```
/// let cache: Option<u32> = None;
///
/// affirm::is_nil(&cache, "cache must start empty");
/// ```
#[track_caller]
pub fn is_nil<'a, T>(value: &T, reasons: impl IntoReasons<'a>)
where
    T: Absent + ?Sized,
{
    is(value.is_absent(), reasons);
}

/// Asserts no error occurred.
///
/// The error is wrapped as-is, a captured cause can be downcast back to `E`.
///
/// # Panics
///
/// Raises an [`AssertionError`] wrapping `err` if it is `Some`.
///
/// # Example
///
/// ```
/// let result: Result<u8, std::num::ParseIntError> = "12".parse();
///
/// affirm::error_is_nil(result.err());
/// ```
#[track_caller]
pub fn error_is_nil<E>(err: Option<E>)
where
    E: StdError + Send + Sync + 'static,
{
    if let Some(err) = err {
        AssertionError::new(Cause::error(err)).raise();
    }
}

/// Asserts no error occurred, for errors that are already boxed.
///
/// # Panics
///
/// Raises an [`AssertionError`] wrapping `err` if it is `Some`.
#[track_caller]
pub fn error_is_nil_boxed(err: Option<Box<dyn StdError + Send + Sync + 'static>>) {
    if let Some(err) = err {
        AssertionError::new(err).raise();
    }
}

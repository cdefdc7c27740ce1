//! The assertion failure marker and its cause.
//!
//! Every failed assertion raises an [`AssertionError`] as a panic payload.
//! Recovery points tell it apart from any other panic by its type alone, so
//! the rendered message is free to say anything.

mod cause;

use core::fmt;
use std::error::Error as StdError;
use std::panic;

pub use self::cause::{Cause, UNKNOWN_CAUSE};

/// Rendered in front of the cause of every assertion failure.
pub(crate) const MESSAGE_PREFIX: &str = "AssersionError: ";

/// The failure raised by a violated assertion.
///
/// Wraps exactly one [`Cause`] and never changes after construction. The
/// cause is reachable through [`AssertionError::cause()`],
/// [`AssertionError::into_cause()`] or, for generic error-chain walking,
/// [`std::error::Error::source()`]. A wrapped error is the source itself, so
/// walking the chain reaches it.
///
/// # Example
///
/// ```
/// use affirm::{AssertionError, Cause};
///
/// let error = AssertionError::new("length must be even");
///
/// assert_eq!(error.to_string(), "AssersionError: length must be even");
/// assert_eq!(error.into_cause().to_string(), "length must be even");
/// ```
#[derive(Debug, Default)]
#[must_use = "assertion errors must be raised or handled"]
pub struct AssertionError {
    cause: Cause,
}

impl AssertionError {
    /// Create a new `AssertionError` wrapping the given cause.
    pub fn new(cause: impl Into<Cause>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// The underlying cause.
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Consumes the marker, returning the underlying cause.
    pub fn into_cause(self) -> Cause {
        self.cause
    }

    /// Raises `self`, unwinding the stack until a [`catch()`] or
    /// [`capture()`] boundary is reached.
    ///
    /// # Panics
    ///
    /// Always, with `self` as the panic payload.
    ///
    /// [`catch()`]: crate::catch()
    /// [`capture()`]: crate::capture()
    #[track_caller]
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MESSAGE_PREFIX)?;
        fmt::Display::fmt(&self.cause, f)
    }
}

impl StdError for AssertionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            Cause::Empty => None,
            Cause::Error(error) => Some(&**error),
            cause => Some(cause),
        }
    }
}

impl From<Cause> for AssertionError {
    fn from(cause: Cause) -> Self {
        Self::new(cause)
    }
}

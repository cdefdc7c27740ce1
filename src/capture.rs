//! Recovery boundaries for raised assertion failures.
//!
//! A boundary runs a closure under [`std::panic::catch_unwind`]. Panics
//! carrying an [`AssertionError`] stop at the boundary and become an ordinary
//! [`Cause`]. Every other panic is resumed untouched, so a boundary never
//! hides failures it does not own.
//!
//! The closure is run as if it were [`UnwindSafe`]. State it mutates may be
//! observed half-updated once a failure has been captured.
//!
//! [`UnwindSafe`]: std::panic::UnwindSafe

use core::any::Any;
use core::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{AssertionError, Cause};

/// Runs `f`, turning a raised assertion failure into an `Err`.
///
/// # Errors
///
/// Returns the [`Cause`] of an assertion failure raised while running `f`.
///
/// # Panics
///
/// Resumes any panic raised by `f` that is not an assertion failure.
///
/// # Example
///
/// ```
/// let result = affirm::catch(|| {
///     affirm::is(false, "boom");
///     42
/// });
///
/// assert_eq!(result.unwrap_err().to_string(), "boom");
/// ```
pub fn catch<T, F>(f: F) -> Result<T, Cause>
where
    F: FnOnce() -> T,
{
    let result = {
        let _boundary = Boundary::enter();
        panic::catch_unwind(AssertUnwindSafe(f))
    };
    result.map_err(intercept)
}

/// Runs `f`, handing the cause of a raised assertion failure to `handler`.
///
/// `handler` is invoked at most once and only ever sees the unwrapped
/// [`Cause`]. Returns `None` if a failure was captured.
///
/// # Panics
///
/// Resumes any panic raised by `f` that is not an assertion failure.
///
/// # Example
///
/// ```
/// let mut error = None;
///
/// let value = affirm::capture(
///     || affirm::is(false, "boom"),
///     |cause| error = Some(cause.to_string()),
/// );
///
/// assert_eq!(value, None);
/// assert_eq!(error.as_deref(), Some("boom"));
/// ```
pub fn capture<T, F, H>(f: F, handler: H) -> Option<T>
where
    F: FnOnce() -> T,
    H: FnOnce(Cause),
{
    match catch(f) {
        Ok(value) => Some(value),
        Err(cause) => {
            handler(cause);
            None
        }
    }
}

/// Runs a fallible `f`, folding a raised assertion failure into its error
/// type.
///
/// # Errors
///
/// Returns the error of `f`, or the [`Cause`] of an assertion failure raised
/// while running it converted into `E`.
///
/// # Panics
///
/// Resumes any panic raised by `f` that is not an assertion failure.
///
/// # Example
///
/// ```
/// fn parse_port(s: &str) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
///     affirm::try_catch(|| {
///         let port = s.parse::<u16>()?;
///         affirm::is(port != 0, "port must not be zero");
///         Ok(port)
///     })
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// assert_eq!(parse_port("0").unwrap_err().to_string(), "port must not be zero");
/// ```
pub fn try_catch<T, E, F>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<Cause>,
{
    match catch(f) {
        Ok(result) => result,
        Err(cause) => Err(E::from(cause)),
    }
}

/// Returns `true` if a panic payload is an assertion failure.
///
/// Payloads are discriminated by type alone.
pub fn is_assertion(payload: &(dyn Any + Send)) -> bool {
    payload.is::<AssertionError>()
}

/// Returns `true` if the current thread is running inside a boundary.
pub(crate) fn within_boundary() -> bool {
    BOUNDARIES
        .try_with(|depth| depth.get() > 0)
        .unwrap_or(false)
}

thread_local! {
    static BOUNDARIES: Cell<usize> = const { Cell::new(0) };
}

/// Tracks the boundary depth of the current thread while alive.
struct Boundary;

impl Boundary {
    fn enter() -> Self {
        BOUNDARIES.with(|depth| depth.set(depth.get() + 1));
        Self
    }
}

impl Drop for Boundary {
    fn drop(&mut self) {
        BOUNDARIES.with(|depth| depth.set(depth.get() - 1));
    }
}

fn intercept(payload: Box<dyn Any + Send>) -> Cause {
    if !is_assertion(&*payload) {
        #[cfg(feature = "tracing")]
        tracing::trace!("forwarding unrelated panic");
        panic::resume_unwind(payload);
    }
    match payload.downcast::<AssertionError>() {
        Ok(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(cause = %error.cause(), "assertion failure captured");
            error.into_cause()
        }
        Err(payload) => panic::resume_unwind(payload),
    }
}

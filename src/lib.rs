//! Assertions that abort the current unit of work, and the boundaries that
//! turn them back into ordinary errors.
//!
//! # Basic usage
//!
//! ```rust
//! use affirm::Cause;
//!
//! fn checked_div(a: u32, b: u32) -> Result<u32, Cause> {
//!     affirm::catch(|| {
//!         affirm::is(b != 0, "division by zero");
//!         a / b
//!     })
//! }
//!
//! assert_eq!(checked_div(6, 3).unwrap(), 2);
//! assert_eq!(checked_div(6, 0).unwrap_err().to_string(), "division by zero");
//! ```
//!
//! # Failures
//!
//! A failed assertion raises an [`AssertionError`] as a panic payload. It
//! unwinds until it reaches a [`catch()`], [`capture()`] or [`try_catch()`]
//! boundary, which hands back its [`Cause`]. Panics that are not assertion
//! failures pass through every boundary untouched.
//!
//! Uncaught failures end the thread they were raised on. Install a
//! [`Hook`] to have them reported as `AssersionError: <cause>`.
//!
//! # Reasons
//!
//! Assertions accept any [`IntoReasons`]: nothing (`()`), text, a
//! [`Reason`] or an ordered collection of them. They are merged in order
//! once an assertion fails and the last one to set the reason wins.
//!
//! # Unwinding
//!
//! Boundaries rely on unwinding. Built with `panic = "abort"` every failed
//! assertion aborts the process.

#![deny(
    unused_qualifications,
    unused_results,
    clippy::pedantic
)]
#![forbid(
    unsafe_code,
    anonymous_parameters,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value
)]

#[macro_use]
mod macros;

mod absent;
mod assert;
mod capture;
mod error;
mod reason;

pub mod hook;

pub use self::absent::Absent;
pub use self::assert::{error_is_nil, error_is_nil_boxed, is, is_nil};
pub use self::capture::{capture, catch, is_assertion, try_catch};
pub use self::error::{AssertionError, Cause, UNKNOWN_CAUSE};
pub use self::hook::{Hook, Report};
pub use self::reason::{IntoReasons, Options, Reason};

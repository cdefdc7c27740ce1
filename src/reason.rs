use core::fmt;
use std::borrow::Cow;

use crate::error::{AssertionError, Cause};

/// A reason supplied alongside an assertion.
///
/// Reasons are merged in order into [`Options`] only once an assertion has
/// failed, the last one to set the reason wins.
pub enum Reason<'a> {
    /// Replaces the current reason with a text cause.
    Text(Cow<'static, str>),
    /// Invoked with the in-progress [`Options`].
    Configure(Box<dyn FnOnce(&mut Options) + 'a>),
}

impl<'a> Reason<'a> {
    /// Create a text reason.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(text.into())
    }

    /// Create a reason that configures the pending [`Options`] directly.
    ///
    /// # Example
    ///
    /// ```
    /// use affirm::{Cause, Reason};
    /// use std::fmt;
    ///
    /// let cause = affirm::catch(|| {
    ///     affirm::is(false, Reason::configure(|o| o.set_reason(Cause::error(fmt::Error))))
    /// })
    /// .unwrap_err();
    ///
    /// assert!(cause.is::<fmt::Error>());
    /// ```
    pub fn configure<F>(f: F) -> Self
    where
        F: FnOnce(&mut Options) + 'a,
    {
        Self::Configure(Box::new(f))
    }
}

impl<'a> fmt::Debug for Reason<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Configure(_) => f.write_str("Configure(..)"),
        }
    }
}

impl<'a> From<&'static str> for Reason<'a> {
    fn from(text: &'static str) -> Self {
        Self::text(text)
    }
}

impl<'a> From<String> for Reason<'a> {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

///////////////////////////////////////////////////////////////////////////////
// Options

/// The merged configuration of a failed assertion.
///
/// Built fresh for every failing assertion and discarded once the
/// [`AssertionError`] has been taken from it.
#[derive(Debug, Default)]
pub struct Options {
    reason: AssertionError,
}

impl Options {
    /// Merge reasons in order, starting from an empty reason.
    pub fn merge<'a>(reasons: impl IntoReasons<'a>) -> Self {
        let mut options = Self::default();
        reasons.apply_to(&mut options);
        options
    }

    /// Replace the current reason.
    pub fn set_reason(&mut self, cause: impl Into<Cause>) {
        self.reason = AssertionError::new(cause);
    }

    /// The current reason.
    pub fn reason(&self) -> &AssertionError {
        &self.reason
    }

    /// Consumes the options, returning the resolved reason.
    pub fn into_reason(self) -> AssertionError {
        self.reason
    }

    fn apply(&mut self, reason: Reason<'_>) {
        match reason {
            Reason::Text(text) => self.set_reason(text),
            Reason::Configure(configure) => configure(self),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
// IntoReasons

/// Implemented for everything accepted as the reasons of an assertion.
///
/// This covers no reason at all (`()`), text, a single [`Reason`] and
/// ordered collections of them (`Option`, arrays, `Vec` and tuples).
pub trait IntoReasons<'a> {
    /// Apply each reason, in order, to the pending options.
    fn apply_to(self, options: &mut Options);
}

impl<'a> IntoReasons<'a> for () {
    fn apply_to(self, _options: &mut Options) {}
}

impl<'a> IntoReasons<'a> for Reason<'a> {
    fn apply_to(self, options: &mut Options) {
        options.apply(self);
    }
}

impl<'a> IntoReasons<'a> for &'static str {
    fn apply_to(self, options: &mut Options) {
        options.apply(Reason::text(self));
    }
}

impl<'a> IntoReasons<'a> for String {
    fn apply_to(self, options: &mut Options) {
        options.apply(Reason::text(self));
    }
}

impl<'a, R> IntoReasons<'a> for Option<R>
where
    R: IntoReasons<'a>,
{
    fn apply_to(self, options: &mut Options) {
        if let Some(reasons) = self {
            reasons.apply_to(options);
        }
    }
}

impl<'a, R, const N: usize> IntoReasons<'a> for [R; N]
where
    R: IntoReasons<'a>,
{
    fn apply_to(self, options: &mut Options) {
        for reasons in self {
            reasons.apply_to(options);
        }
    }
}

impl<'a, R> IntoReasons<'a> for Vec<R>
where
    R: IntoReasons<'a>,
{
    fn apply_to(self, options: &mut Options) {
        for reasons in self {
            reasons.apply_to(options);
        }
    }
}

macro_rules! impl_into_reasons_tuple {
    ($($ty:ident),+) => {
        impl<'a, $($ty),+> IntoReasons<'a> for ($($ty,)+)
        where
            $($ty: IntoReasons<'a>),+
        {
            #[allow(non_snake_case)]
            fn apply_to(self, options: &mut Options) {
                let ($($ty,)+) = self;
                $($ty.apply_to(options);)+
            }
        }
    };
}

impl_into_reasons_tuple!(A, B);
impl_into_reasons_tuple!(A, B, C);
impl_into_reasons_tuple!(A, B, C, D);

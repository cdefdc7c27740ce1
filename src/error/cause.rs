use core::any::Any;
use core::fmt;
use std::borrow::Cow;
use std::error::Error as StdError;

use super::AssertionError;

/// The message of a [`Cause::Unknown`].
pub const UNKNOWN_CAUSE: &str = "unknown error object used";

/// The underlying reason an assertion failed.
///
/// Causes come in a closed set of representations. Anything outside of that
/// set is normalized to [`Cause::Unknown`] by [`Cause::from_any()`] rather
/// than failing the normalization itself.
#[derive(Debug, Default)]
#[must_use = "causes must be handled"]
pub enum Cause {
    /// No reason was supplied with the failed assertion.
    ///
    /// Renders as an empty string.
    #[default]
    Empty,
    /// A plain text reason.
    Message(Cow<'static, str>),
    /// An existing error, wrapped as-is.
    Error(Box<dyn StdError + Send + Sync + 'static>),
    /// A reason that was neither text nor an error.
    Unknown,
}

impl Cause {
    /// Create a text cause.
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Wrap an existing error.
    ///
    /// The error is kept as-is and can be recovered with
    /// [`Cause::downcast()`].
    ///
    /// # Example
    ///
    /// ```
    /// use affirm::Cause;
    /// use std::fmt;
    ///
    /// let cause = Cause::error(fmt::Error);
    ///
    /// assert_eq!(cause.downcast::<fmt::Error>().unwrap(), fmt::Error);
    /// ```
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Box::new(error))
    }

    /// Normalize an arbitrary value into a cause.
    ///
    /// - `String` and `&'static str` become [`Cause::Message`].
    /// - `Box<dyn Error + Send + Sync>` becomes [`Cause::Error`].
    /// - A `Cause` or an [`AssertionError`] yields the cause itself.
    /// - Anything else becomes [`Cause::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use affirm::Cause;
    ///
    /// assert_eq!(Cause::from_any(Box::new("a")).to_string(), "a");
    /// assert_eq!(Cause::from_any(Box::new(42)).to_string(), "unknown error object used");
    /// ```
    pub fn from_any(value: Box<dyn Any + Send>) -> Self {
        let value = match value.downcast::<Self>() {
            Ok(cause) => return *cause,
            Err(value) => value,
        };
        let value = match value.downcast::<AssertionError>() {
            Ok(error) => return error.into_cause(),
            Err(value) => value,
        };
        let value = match value.downcast::<String>() {
            Ok(message) => return Self::message(*message),
            Err(value) => value,
        };
        let value = match value.downcast::<&'static str>() {
            Ok(message) => return Self::message(*message),
            Err(value) => value,
        };
        match value.downcast::<Box<dyn StdError + Send + Sync>>() {
            Ok(error) => Self::Error(*error),
            Err(_) => Self::Unknown,
        }
    }

    /// Returns `true` if no reason was supplied.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the cause wraps an error of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Error(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Attempt to take back the wrapped error as `E`.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged if the cause does not wrap an `E`.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Error(error) => match error.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(error) => Err(Self::Error(error)),
            },
            other => Err(other),
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Message(message) => f.write_str(message),
            Self::Error(error) => fmt::Display::fmt(error, f),
            Self::Unknown => f.write_str(UNKNOWN_CAUSE),
        }
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Error(error) => error.source(),
            _ => None,
        }
    }
}

impl From<&'static str> for Cause {
    fn from(message: &'static str) -> Self {
        Self::message(message)
    }
}

impl From<String> for Cause {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<Cow<'static, str>> for Cause {
    fn from(message: Cow<'static, str>) -> Self {
        Self::Message(message)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Cause {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::Error(error)
    }
}

//! Reporting of assertion failures nobody captured.
//!
//! The default panic hook only knows how to print string payloads, an
//! uncaught [`AssertionError`] would be reported as `Box<dyn Any>`. Installing
//! a [`Hook`] reports it as `AssersionError: <cause>` instead, and keeps
//! quiet about failures that a boundary is about to capture.

use core::fmt;
use std::io;
use std::panic::{self, Location, PanicHookInfo};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::capture;
use crate::error::{AssertionError, MESSAGE_PREFIX};

const UNNAMED_THREAD: &str = "<unnamed>";

type SharedWriter = Arc<Mutex<dyn io::Write + Send>>;

/// Installs a [`Hook`] with its defaults.
///
/// Panics that are not assertion failures are passed on to the hook that was
/// installed before.
pub fn install() {
    Hook::new().install();
}

/// Configurable panic hook for uncaught assertion failures.
///
/// Failures raised inside a [`catch()`](crate::catch()) or
/// [`capture()`](crate::capture()) boundary on the same thread are not
/// reported, they are about to be handled.
#[derive(Clone)]
pub struct Hook {
    colored: Option<bool>,
    writer: Option<SharedWriter>,
}

impl Hook {
    /// Create a new `Hook` reporting to standard error.
    ///
    /// Unless set with [`Hook::colored()`], the report is coloured only when
    /// the `terminal` feature is enabled and standard error supports it.
    pub fn new() -> Self {
        Self {
            colored: None,
            writer: None,
        }
    }

    /// Set whether the report is coloured.
    ///
    /// Ignored without the `terminal` feature.
    pub fn colored(mut self, value: bool) -> Self {
        self.colored = Some(value);
        self
    }

    /// Report to `writer` instead of standard error.
    ///
    /// Reports are uncoloured unless [`Hook::colored()`] says otherwise.
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        self.writer = Some(Arc::new(Mutex::new(writer)));
        self
    }

    /// Installs the hook, chaining to the currently installed one.
    pub fn install(self) {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            match info.payload().downcast_ref::<AssertionError>() {
                Some(error) => {
                    if !capture::within_boundary() {
                        self.report(error, info);
                    }
                }
                None => previous(info),
            }
        }));
    }

    fn report(&self, error: &AssertionError, info: &PanicHookInfo<'_>) {
        use std::io::Write as _;

        let thread = thread::current();
        let report = Report::new(error)
            .thread(Some(thread.name().unwrap_or(UNNAMED_THREAD)))
            .location(info.location());
        let _ = match &self.writer {
            Some(writer) => {
                let report = report.colored(self.colored.unwrap_or(false));
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                writeln!(writer, "{}", report)
            }
            None => {
                let report = match self.colored {
                    Some(value) => report.colored(value),
                    None => report.coloring(Coloring::Stderr),
                };
                writeln!(io::stderr().lock(), "{}", report)
            }
        };
    }
}

impl Default for Hook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("colored", &self.colored)
            .field("writer", &self.writer.as_ref().map(|_| ".."))
            .finish()
    }
}

/// When the message prefix is coloured.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Coloring {
    Never,
    Always,
    /// Only if standard error supports colour.
    Stderr,
}

/// Provides configurable [`AssertionError`] formatting.
///
/// # Example
///
/// ```
/// use affirm::{AssertionError, Report};
///
/// let error = AssertionError::new("boom");
/// let report = Report::new(&error).thread(Some("worker"));
///
/// assert_eq!(report.to_string(), "thread 'worker' panicked:\nAssersionError: boom");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a AssertionError,
    thread: Option<&'a str>,
    location: Option<&'a Location<'a>>,
    #[cfg_attr(not(feature = "terminal"), allow(dead_code))]
    coloring: Coloring,
}

impl<'a> Report<'a> {
    /// Create a new `Report` rendering only the failure message.
    pub fn new(error: &'a AssertionError) -> Self {
        Self {
            error,
            thread: None,
            location: None,
            coloring: Coloring::Never,
        }
    }

    /// Set the name of the thread the failure was raised on.
    pub fn thread(mut self, name: Option<&'a str>) -> Self {
        self.thread = name;
        self
    }

    /// Set where the failure was raised.
    pub fn location(mut self, location: Option<&'a Location<'a>>) -> Self {
        self.location = location;
        self
    }

    /// Set whether the message prefix is coloured.
    pub fn colored(self, value: bool) -> Self {
        self.coloring(if value {
            Coloring::Always
        } else {
            Coloring::Never
        })
    }

    pub(crate) fn coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }

    /// Writes the report to a writer.
    ///
    /// # Errors
    ///
    /// Returns [`core::fmt::Error`] if failed to write.
    pub fn write<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match (self.thread, self.location) {
            (Some(thread), Some(location)) => {
                writeln!(w, "thread '{}' panicked at {}:", thread, location)?;
            }
            (Some(thread), None) => writeln!(w, "thread '{}' panicked:", thread)?,
            (None, Some(location)) => writeln!(w, "panicked at {}:", location)?,
            (None, None) => {}
        }
        self.write_prefix(w)?;
        write!(w, "{}", self.error.cause())
    }

    #[cfg(feature = "terminal")]
    fn write_prefix<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        use owo_colors::{OwoColorize, Stream, Style};

        let style = Style::new().red().bold();
        match self.coloring {
            Coloring::Never => w.write_str(MESSAGE_PREFIX),
            Coloring::Always => write!(w, "{}", MESSAGE_PREFIX.style(style)),
            Coloring::Stderr => write!(
                w,
                "{}",
                MESSAGE_PREFIX.if_supports_color(Stream::Stderr, |prefix| prefix.style(style))
            ),
        }
    }

    #[cfg(not(feature = "terminal"))]
    fn write_prefix<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        w.write_str(MESSAGE_PREFIX)
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

/// Asserts a condition holds, with an optional formatted reason.
///
/// The reason is only formatted once the condition is found to be false.
///
/// # Panics
///
/// Raises an [`AssertionError`](crate::AssertionError) if the condition is
/// `false`.
///
/// # Example
///
/// ```
/// let len = 3;
///
/// let cause = affirm::catch(|| affirm::is!(len % 2 == 0, "length {} is odd", len)).unwrap_err();
///
/// assert_eq!(cause.to_string(), "length 3 is odd");
/// ```
#[macro_export]
macro_rules! is {
    ($cond:expr $(,)?) => {
        $crate::is($cond, ())
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::is(false, $crate::Reason::text(::std::format!($($arg)+)))
        }
    };
}

/// Asserts a value is absent, with an optional formatted reason.
///
/// # Panics
///
/// Raises an [`AssertionError`](crate::AssertionError) if the value is
/// present.
///
/// # Example
///
/// ```
/// let pending: Option<&str> = Some("job-7");
///
/// let cause = affirm::catch(|| affirm::is_nil!(pending, "{:?} still pending", pending)).unwrap_err();
///
/// assert_eq!(cause.to_string(), "Some(\"job-7\") still pending");
/// ```
#[macro_export]
macro_rules! is_nil {
    ($value:expr $(,)?) => {
        $crate::is_nil(&$value, ())
    };
    ($value:expr, $($arg:tt)+) => {
        if !$crate::Absent::is_absent(&$value) {
            $crate::is(false, $crate::Reason::text(::std::format!($($arg)+)))
        }
    };
}

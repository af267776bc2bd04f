//! The boundary where panics and returned errors become [`Outcome::Failure`] data.
//!
//! Nothing else in the crate catches anything: a step that panics inside
//! [`chain`](crate::chain) unwinds straight through to the caller.

use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use crate::outcome::Outcome;
use crate::reason::{Reason, Tag};

/// Kind reported for a panic whose payload carries no message.
pub const PANIC_TAG: &str = "panic";

fn panic_reason(payload: Box<dyn Any + Send>) -> Reason {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());
    match message {
        Some(m) if !m.is_empty() => Reason::Message(m),
        _ => Reason::Tag(Tag::new(PANIC_TAG)),
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

fn error_reason<E: Error>(err: &E) -> Reason {
    let message = err.to_string();
    if message.is_empty() {
        Reason::Tag(Tag::new(short_type_name::<E>()))
    } else {
        Reason::Message(message)
    }
}

/// Run `thunk`, turning a normal return into `Success` and a panic into `Failure`.
///
/// The failure reason is the panic message, or the `:panic` tag when the payload has no
/// message.
///
/// ```rust
/// use okpipe::{error, ok, tuple_wrap, Tag};
///
/// assert_eq!(tuple_wrap(|| 10), ok(10));
///
/// let zero = std::hint::black_box(0);
/// # let hook = std::panic::take_hook();
/// # std::panic::set_hook(Box::new(|_| {}));
/// assert_eq!(tuple_wrap(|| 1 / zero), error("attempt to divide by zero"));
/// assert_eq!(
///     tuple_wrap(|| std::panic::panic_any(7_u8)),
///     error::<()>(Tag::new("panic")),
/// );
/// # std::panic::set_hook(hook);
/// ```
pub fn tuple_wrap<T, F>(thunk: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(v) => Outcome::Success(v),
        Err(payload) => {
            let reason = panic_reason(payload);
            tracing::debug!(%reason, "thunk panicked");
            Outcome::Failure(reason)
        }
    }
}

/// Like [`tuple_wrap`], for thunks that report errors by returning them.
///
/// `Err(e)` becomes `Failure` with `e`'s display text, or a tag naming the error type when
/// that text is empty. Panics are caught the same way as in [`tuple_wrap`].
///
/// ```rust
/// use okpipe::{error, ok, try_wrap};
///
/// assert_eq!(try_wrap(|| "10".parse::<i32>()), ok(10));
/// assert_eq!(
///     try_wrap(|| "ten".parse::<i32>()),
///     error("invalid digit found in string"),
/// );
/// ```
pub fn try_wrap<T, E, F>(thunk: F) -> Outcome<T>
where
    E: Error,
    F: FnOnce() -> Result<T, E>,
{
    match tuple_wrap(thunk) {
        Outcome::Success(Ok(v)) => Outcome::Success(v),
        Outcome::Success(Err(e)) => {
            let reason = error_reason(&e);
            tracing::debug!(%reason, "thunk returned an error");
            Outcome::Failure(reason)
        }
        Outcome::Failure(r) => Outcome::Failure(r),
        Outcome::PlainSuccess => Outcome::PlainSuccess,
        Outcome::PlainFailure => Outcome::PlainFailure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{error, ok};
    use std::fmt;

    #[derive(Debug)]
    struct Silent;

    impl fmt::Display for Silent {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl Error for Silent {}

    #[derive(Debug)]
    struct BadArith;

    impl fmt::Display for BadArith {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("bad argument in arithmetic expression")
        }
    }

    impl Error for BadArith {}

    #[test]
    fn test_normal_return_is_success() {
        assert_eq!(tuple_wrap(|| 10), ok(10));
        assert_eq!(tuple_wrap(|| ()), ok(()));
    }

    #[test]
    fn test_panic_with_message() {
        let out: Outcome<i32> = tuple_wrap(|| panic!("bad argument in arithmetic expression"));
        assert_eq!(out, error("bad argument in arithmetic expression"));
    }

    #[test]
    fn test_panic_with_formatted_message() {
        let n = 3;
        let out: Outcome<i32> = tuple_wrap(|| panic!("index {n} out of range"));
        assert_eq!(out, error("index 3 out of range"));
    }

    #[test]
    fn test_panic_without_message_reports_kind() {
        let out: Outcome<i32> = tuple_wrap(|| panic::panic_any(42_i32));
        assert_eq!(out, error(Tag::new(PANIC_TAG)));
        let out: Outcome<i32> = tuple_wrap(|| panic!(""));
        assert_eq!(out, error(Tag::new(PANIC_TAG)));
    }

    #[test]
    fn test_returned_outcome_is_not_rewrapped_twice() {
        let out = tuple_wrap(|| ok(1));
        assert_eq!(out, ok(ok(1)));
        assert_eq!(out.flatten(), ok(1));
    }

    #[test]
    fn test_try_wrap_error_message() {
        let out: Outcome<i32> = try_wrap(|| Err(BadArith));
        assert_eq!(out, error("bad argument in arithmetic expression"));
    }

    #[test]
    fn test_try_wrap_error_without_message_reports_kind() {
        let out: Outcome<i32> = try_wrap(|| Err(Silent));
        assert_eq!(out, error(Tag::new("Silent")));
    }

    #[test]
    fn test_try_wrap_catches_panics() {
        let out: Outcome<i32> = try_wrap(|| -> Result<i32, BadArith> { panic!("boom") });
        assert_eq!(out, error("boom"));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<BadArith>(), "BadArith");
        assert_eq!(short_type_name::<std::num::ParseIntError>(), "ParseIntError");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }
}

use crate::reason::Reason;

/// Outcome of a fallible step: a success payload, a failure reason, or one of the
/// payload-less markers.
///
/// `Outcome` plays the part `Result` plays in ordinary Rust, with two extra markers for
/// steps whose result is only a signal. [`Outcome::PlainSuccess`] is a valid outcome
/// everywhere except as the input to [`chain`](crate::chain), which has no value to hand
/// to the next step.
///
/// # Examples
///
/// ```rust
/// use okpipe::{ok, error, Outcome};
///
/// let good: Outcome<i32> = ok(42);
/// let bad: Outcome<i32> = error("out of range");
///
/// assert_eq!(good.clone().map(|x| x * 2), ok(84));
/// assert_eq!(bad.clone().map(|x| x * 2), error("out of range"));
/// assert!(good.is_success());
/// assert!(bad.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome<T> {
    /// Succeeded with a payload
    Success(T),
    /// Failed with a message or tag
    Failure(Reason),
    /// Succeeded with nothing to pass on
    PlainSuccess,
    /// Failed with no reason attached
    PlainFailure,
}

/// Wrap a value as a success.
///
/// ```rust
/// use okpipe::{ok, Outcome};
///
/// assert_eq!(ok(10), Outcome::Success(10));
/// ```
#[inline]
pub fn ok<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

/// Wrap a message or tag as a failure.
///
/// ```rust
/// use okpipe::{error, Outcome, Reason, Tag};
///
/// let failed: Outcome<()> = error(Tag::new("invalid"));
/// assert_eq!(failed, Outcome::Failure(Reason::tag_named("invalid")));
/// ```
#[inline]
pub fn error<T>(reason: impl Into<Reason>) -> Outcome<T> {
    Outcome::Failure(reason.into())
}

impl<T> Outcome<T> {
    /// Returns `true` if the outcome is `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use okpipe::{ok, Outcome};
    ///
    /// assert!(ok(1).is_success());
    /// assert!(!Outcome::<i32>::PlainSuccess.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns `true` if the outcome is the payload-less success marker.
    #[inline]
    pub const fn is_plain_success(&self) -> bool {
        matches!(self, Outcome::PlainSuccess)
    }

    /// Returns `true` if the outcome is the bare failure marker.
    #[inline]
    pub const fn is_plain_failure(&self) -> bool {
        matches!(self, Outcome::PlainFailure)
    }

    /// Returns `true` for `Success` and `PlainSuccess`.
    #[inline]
    pub const fn is_ok_like(&self) -> bool {
        matches!(self, Outcome::Success(_) | Outcome::PlainSuccess)
    }

    /// Returns `true` for `Failure` and `PlainFailure`.
    #[inline]
    pub const fn is_err_like(&self) -> bool {
        matches!(self, Outcome::Failure(_) | Outcome::PlainFailure)
    }

    /// Converts from `Outcome<T>` to `Option<T>`, discarding everything but a success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use okpipe::{ok, error, Outcome};
    ///
    /// assert_eq!(ok(3).success(), Some(3));
    /// assert_eq!(error::<i32>("nope").success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Converts from `Outcome<T>` to `Option<Reason>`, discarding everything but a failure reason.
    #[inline]
    pub fn failure(self) -> Option<Reason> {
        match self {
            Outcome::Failure(r) => Some(r),
            _ => None,
        }
    }

    /// Converts from `&Outcome<T>` to `Outcome<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(r) => Outcome::Failure(r.clone()),
            Outcome::PlainSuccess => Outcome::PlainSuccess,
            Outcome::PlainFailure => Outcome::PlainFailure,
        }
    }

    /// Maps an `Outcome<T>` to `Outcome<U>` by applying a function to a success payload.
    ///
    /// Every other variant passes through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(r) => Outcome::Failure(r),
            Outcome::PlainSuccess => Outcome::PlainSuccess,
            Outcome::PlainFailure => Outcome::PlainFailure,
        }
    }

    /// Rewrites a failure reason, leaving every other variant untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use okpipe::{error, Outcome, Reason};
    ///
    /// let failed: Outcome<i32> = error("disk full");
    /// let wrapped = failed.map_failure(|r| Reason::Message(format!("saving: {r}")));
    /// assert_eq!(wrapped, error("saving: disk full"));
    /// ```
    #[inline]
    pub fn map_failure<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(Reason) -> Reason,
    {
        match self {
            Outcome::Failure(r) => Outcome::Failure(f(r)),
            other => other,
        }
    }

    /// Returns the success payload or a default.
    #[inline]
    pub fn success_or(self, default: T) -> T {
        match self {
            Outcome::Success(v) => v,
            _ => default,
        }
    }

    /// Returns the success payload, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_success(self, msg: &str) -> T {
        match self {
            Outcome::Success(v) => v,
            _ => panic!("{}", msg),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(r) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value: {r}")
            }
            Outcome::PlainSuccess => {
                panic!("called `Outcome::unwrap_success()` on a `PlainSuccess` value")
            }
            Outcome::PlainFailure => {
                panic!("called `Outcome::unwrap_success()` on a `PlainFailure` value")
            }
        }
    }

    /// Splits into a std `Result`; the plain markers carry no payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use okpipe::{ok, Outcome};
    ///
    /// assert_eq!(ok(1).into_result(), Ok(Some(1)));
    /// assert_eq!(Outcome::<i32>::PlainSuccess.into_result(), Ok(None));
    /// assert_eq!(Outcome::<i32>::PlainFailure.into_result(), Err(None));
    /// ```
    pub fn into_result(self) -> Result<Option<T>, Option<Reason>> {
        match self {
            Outcome::Success(v) => Ok(Some(v)),
            Outcome::PlainSuccess => Ok(None),
            Outcome::Failure(r) => Err(Some(r)),
            Outcome::PlainFailure => Err(None),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    ///
    /// Useful when a value-producing thunk handed to [`tuple_wrap`](crate::tuple_wrap)
    /// already returned an outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use okpipe::{ok, error, Outcome};
    ///
    /// assert_eq!(ok(ok(5)).flatten(), ok(5));
    /// assert_eq!(ok(error::<i32>("inner")).flatten(), error("inner"));
    /// assert_eq!(error::<Outcome<i32>>("outer").flatten(), error("outer"));
    /// ```
    pub fn flatten(self) -> Outcome<T> {
        match self {
            Outcome::Success(inner) => inner,
            Outcome::Failure(r) => Outcome::Failure(r),
            Outcome::PlainSuccess => Outcome::PlainSuccess,
            Outcome::PlainFailure => Outcome::PlainFailure,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Reason>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e.into()),
        }
    }
}

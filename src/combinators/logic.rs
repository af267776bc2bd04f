//! Value-level conjunction and disjunction of outcomes.
//!
//! Unlike [`chain`](crate::chain) these do not short-circuit: both operands are already
//! computed by the time either function runs. The first operand must carry a payload or a
//! reason; the plain markers are rejected as [`InvalidShape`].

use crate::outcome::Outcome;
use crate::shape::{InvalidShape, IntoOutcome};

/// Keep `b` if `a` succeeded, otherwise keep `a`.
///
/// ```rust
/// use okpipe::{and_then_keep, error, ok};
///
/// assert_eq!(and_then_keep(ok("happy"), ok("success")), Ok(ok("success")));
/// assert_eq!(and_then_keep(error("failure"), ok("happy")), Ok(error("failure")));
/// ```
pub fn and_then_keep<A, B>(a: A, b: B) -> Result<Outcome<A::Value>, InvalidShape>
where
    A: IntoOutcome,
    B: IntoOutcome<Value = A::Value>,
{
    let (a, b) = (a.into_outcome()?, b.into_outcome()?);
    match a {
        Outcome::Success(_) => Ok(b),
        Outcome::Failure(_) => Ok(a),
        plain => Err(InvalidShape::unchainable("and_then_keep", &plain)),
    }
}

/// Keep `a` if it succeeded, otherwise keep `b` whatever it is.
///
/// ```rust
/// use okpipe::{error, ok, or_else_keep};
///
/// assert_eq!(or_else_keep(ok("happy"), error("failure")), Ok(ok("happy")));
/// assert_eq!(or_else_keep(error("failure"), error("oops")), Ok(error::<&str>("oops")));
/// ```
pub fn or_else_keep<A, B>(a: A, b: B) -> Result<Outcome<A::Value>, InvalidShape>
where
    A: IntoOutcome,
    B: IntoOutcome<Value = A::Value>,
{
    let (a, b) = (a.into_outcome()?, b.into_outcome()?);
    match a {
        Outcome::Success(_) => Ok(a),
        Outcome::Failure(_) => Ok(b),
        plain => Err(InvalidShape::unchainable("or_else_keep", &plain)),
    }
}

impl<T> Outcome<T> {
    /// Method form of [`and_then_keep`].
    #[inline]
    pub fn and_keep(self, other: Outcome<T>) -> Result<Outcome<T>, InvalidShape> {
        and_then_keep(self, other)
    }

    /// Method form of [`or_else_keep`].
    #[inline]
    pub fn or_keep(self, other: Outcome<T>) -> Result<Outcome<T>, InvalidShape> {
        or_else_keep(self, other)
    }
}

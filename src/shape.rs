//! The shape guard.
//!
//! Domain failures travel as [`Outcome::Failure`] data. Misuse of the library (a value
//! that is not a result, or a result variant an operation refuses) is reported through
//! [`InvalidShape`] instead, so a usage bug can never pass itself off as business data.

use crate::outcome::Outcome;
use crate::reason::Reason;
use crate::term::Term;

/// A value was supplied where a result was expected, and it had the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidShape {
    /// The value matched none of the result shapes
    #[error("expected a result, got {found}")]
    NotAResult { found: String },

    /// A recognized result variant that the operation does not accept
    #[error("{operation} does not accept {found}")]
    Unchainable {
        operation: &'static str,
        found: &'static str,
    },
}

impl InvalidShape {
    pub(crate) fn unchainable<T>(operation: &'static str, outcome: &Outcome<T>) -> Self {
        let found = match outcome {
            Outcome::Success(_) => "a success",
            Outcome::Failure(_) => "a failure",
            Outcome::PlainSuccess => "a payload-less success",
            Outcome::PlainFailure => "a bare failure marker",
        };
        tracing::debug!(operation, found, "rejected result shape");
        InvalidShape::Unchainable { operation, found }
    }
}

/// Values that may be a result.
///
/// Typed outcomes and std results always are; a [`Term`] is checked against the result
/// shapes at runtime.
pub trait IntoOutcome {
    /// Payload type of the success variant.
    type Value;

    /// Check the shape and convert.
    fn into_outcome(self) -> Result<Outcome<Self::Value>, InvalidShape>;
}

impl<T> IntoOutcome for Outcome<T> {
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Result<Outcome<T>, InvalidShape> {
        Ok(self)
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    E: Into<Reason>,
{
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Result<Outcome<T>, InvalidShape> {
        Ok(Outcome::from(self))
    }
}

impl IntoOutcome for Term {
    type Value = Term;

    fn into_outcome(self) -> Result<Outcome<Term>, InvalidShape> {
        self.match_shape().map_err(|term| {
            tracing::debug!(%term, "value is not a result");
            InvalidShape::NotAResult {
                found: term.to_string(),
            }
        })
    }
}

/// Pass a result through unchanged, or report that the value is not one.
///
/// Accepts `Success`, `Failure`, `PlainSuccess` and the bare failure marker.
///
/// # Examples
///
/// ```rust
/// use okpipe::{ensure_is_result, ok, InvalidShape, Outcome, Term};
///
/// assert_eq!(ensure_is_result(ok(1)), Ok(ok(1)));
/// assert_eq!(ensure_is_result(Term::atom("ok")), Ok(Outcome::PlainSuccess));
///
/// let three = Term::tuple([Term::atom("ok"), Term::Int(1), Term::Int(2)]);
/// assert!(matches!(
///     ensure_is_result(three),
///     Err(InvalidShape::NotAResult { .. })
/// ));
/// ```
#[inline]
pub fn ensure_is_result<V>(value: V) -> Result<Outcome<V::Value>, InvalidShape>
where
    V: IntoOutcome,
{
    value.into_outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{error, ok};

    #[test]
    fn test_identity_on_typed_outcomes() {
        let cases: [Outcome<i32>; 4] = [
            ok(1),
            error("x"),
            Outcome::PlainSuccess,
            Outcome::PlainFailure,
        ];
        for case in cases {
            assert_eq!(ensure_is_result(case.clone()), Ok(case));
        }
    }

    #[test]
    fn test_std_results_are_results() {
        assert_eq!(ensure_is_result(Ok::<_, String>(3)), Ok(ok(3)));
        assert_eq!(ensure_is_result(Err::<i32, _>("e")), Ok(error("e")));
    }

    #[test]
    fn test_rejects_raw_number() {
        assert_eq!(
            ensure_is_result(Term::Int(10)),
            Err(InvalidShape::NotAResult {
                found: "10".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_three_element_tuple() {
        let t = Term::tuple([Term::atom("ok"), Term::Int(1), Term::Int(2)]);
        let err = ensure_is_result(t).unwrap_err();
        assert_eq!(err.to_string(), "expected a result, got {:ok, 1, 2}");
    }

    #[test]
    fn test_unchainable_message() {
        let err = InvalidShape::unchainable("chain", &Outcome::<()>::PlainSuccess);
        assert_eq!(err.to_string(), "chain does not accept a payload-less success");
    }
}

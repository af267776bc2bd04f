use crate::outcome::Outcome;
use crate::shape::{InvalidShape, IntoOutcome};

/// Feed a success payload to the next step; pass failures through untouched.
///
/// - `Success(v)`: runs `step(v)` and returns its result after the shape check.
/// - `Failure(r)` or the bare failure marker: returned as is, `step` never runs.
/// - `PlainSuccess` or anything that is not a result: [`InvalidShape`].
///
/// `step` may return any [`IntoOutcome`], so plain `std::result::Result`s work too.
///
/// ```rust
/// use okpipe::{chain, error, ok, Outcome, Tag};
///
/// # fn main() -> Result<(), okpipe::InvalidShape> {
/// let parsed = chain(ok("42"), |s: &str| s.parse::<i32>().map_err(|e| e.to_string()))?;
/// assert_eq!(parsed, ok(42));
///
/// let failed: Outcome<String> = chain(error::<i32>(Tag::new("invalid")), |n| ok(n.to_string()))?;
/// assert_eq!(failed, error(Tag::new("invalid")));
/// # Ok(())
/// # }
/// ```
pub fn chain<I, R, F>(input: I, step: F) -> Result<Outcome<R::Value>, InvalidShape>
where
    I: IntoOutcome,
    R: IntoOutcome,
    F: FnOnce(I::Value) -> R,
{
    match input.into_outcome()? {
        Outcome::Success(v) => step(v).into_outcome(),
        Outcome::Failure(r) => {
            tracing::trace!(reason = %r, "chain short-circuited");
            Ok(Outcome::Failure(r))
        }
        Outcome::PlainFailure => {
            tracing::trace!("chain short-circuited on bare failure");
            Ok(Outcome::PlainFailure)
        }
        plain @ Outcome::PlainSuccess => Err(InvalidShape::unchainable("chain", &plain)),
    }
}

impl<T> Outcome<T> {
    /// Method form of [`chain`].
    ///
    /// ```rust
    /// use okpipe::{ok, error, Outcome};
    ///
    /// # fn main() -> Result<(), okpipe::InvalidShape> {
    /// let halve = |x: i32| if x % 2 == 0 { ok(x / 2) } else { error("odd") };
    ///
    /// assert_eq!(ok(8).then(halve)?.then(halve)?, ok(2));
    /// assert_eq!(ok(6).then(halve)?.then(halve)?, error("odd"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn then<R, F>(self, step: F) -> Result<Outcome<R::Value>, InvalidShape>
    where
        R: IntoOutcome,
        F: FnOnce(T) -> R,
    {
        chain(self, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{error, ok};
    use crate::reason::Tag;
    use crate::term::Term;
    use std::cell::Cell;

    #[test]
    fn test_chain_success_runs_step() {
        assert_eq!(chain(ok(2), |x: i32| ok(x * 10)), Ok(ok(20)));
    }

    #[test]
    fn test_chain_failure_skips_step() {
        let calls = Cell::new(0);
        let out = chain(error::<i32>("failure"), |x| {
            calls.set(calls.get() + 1);
            ok(x)
        });
        assert_eq!(out, Ok(error("failure")));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_bare_failure_skips_step() {
        let calls = Cell::new(0);
        let out = chain(Outcome::<i32>::PlainFailure, |x| {
            calls.set(calls.get() + 1);
            ok(x)
        });
        assert_eq!(out, Ok(Outcome::PlainFailure));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_plain_success_is_invalid() {
        let calls = Cell::new(0);
        let out = chain(Outcome::<i32>::PlainSuccess, |x| {
            calls.set(calls.get() + 1);
            ok(x)
        });
        assert_eq!(
            out,
            Err(InvalidShape::Unchainable {
                operation: "chain",
                found: "a payload-less success",
            })
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_step_may_return_plain_markers() {
        assert_eq!(
            chain(ok(1), |_| Outcome::<()>::PlainSuccess),
            Ok(Outcome::PlainSuccess)
        );
    }

    #[test]
    fn test_chain_on_terms() {
        let list = Term::ok(Term::list([Term::Int(1), Term::Int(2), Term::Int(3)]));
        let first = |t: Term| match t {
            Term::List(items) => Term::ok(items.into_iter().next().unwrap_or(Term::Nil)),
            other => Term::error(Term::str(format!("not a list: {other}"))),
        };
        assert_eq!(chain(list, first), Ok(Outcome::Success(Term::Int(1))));
    }

    #[test]
    fn test_chain_failed_term_skips_to_string() {
        let calls = Cell::new(0);
        let out = chain(Term::error(Term::atom("invalid")), |t: Term| {
            calls.set(calls.get() + 1);
            Term::ok(Term::str(t.to_string()))
        });
        assert_eq!(out, Ok(error(Tag::new("invalid"))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_rejects_malformed_input_and_step_output() {
        assert!(matches!(
            chain(Term::Int(3), Term::ok),
            Err(InvalidShape::NotAResult { .. })
        ));
        assert!(matches!(
            chain(Term::ok(Term::Int(3)), |_| Term::Int(4)),
            Err(InvalidShape::NotAResult { .. })
        ));
    }

    #[test]
    fn test_then_chains_pipeline() {
        let out = ok(3)
            .then(|x: i32| ok(x + 1))
            .and_then(|o| o.then(|x| Ok::<_, String>(x * 2)));
        assert_eq!(out, Ok(ok(8)));
    }
}

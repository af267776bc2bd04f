use crate::outcome::Outcome;
use crate::shape::{InvalidShape, IntoOutcome};

/// Collect the payloads of a run of outcomes, stopping at the first failure.
///
/// A failure or bare failure marker is returned as soon as it is seen; later items are not
/// pulled from the iterator. A payload-less success has nothing to collect and is reported
/// as [`InvalidShape`].
///
/// # Examples
///
/// ```
/// use okpipe::{error, ok, sequence};
///
/// # fn main() -> Result<(), okpipe::InvalidShape> {
/// assert_eq!(sequence([ok(1), ok(2), ok(3)])?, ok(vec![1, 2, 3]));
/// assert_eq!(sequence([ok(1), error("two"), ok(3)])?, error("two"));
/// # Ok(())
/// # }
/// ```
pub fn sequence<I>(
    items: I,
) -> Result<Outcome<Vec<<I::Item as IntoOutcome>::Value>>, InvalidShape>
where
    I: IntoIterator,
    I::Item: IntoOutcome,
{
    let items = items.into_iter();
    let mut values = Vec::with_capacity(items.size_hint().0);
    for item in items {
        match item.into_outcome()? {
            Outcome::Success(v) => values.push(v),
            Outcome::Failure(r) => return Ok(Outcome::Failure(r)),
            Outcome::PlainFailure => return Ok(Outcome::PlainFailure),
            plain @ Outcome::PlainSuccess => {
                return Err(InvalidShape::unchainable("sequence", &plain))
            }
        }
    }
    Ok(Outcome::Success(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{error, ok};
    use crate::term::Term;

    #[test]
    fn test_empty_is_success() {
        let empty: Vec<Outcome<i32>> = Vec::new();
        assert_eq!(sequence(empty), Ok(ok(vec![])));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let mut pulled = 0;
        let items = (0..5).map(|i| {
            pulled += 1;
            if i == 1 { error("stop") } else { ok(i) }
        });
        assert_eq!(sequence(items), Ok(error("stop")));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_bare_failure_stops() {
        assert_eq!(
            sequence([ok(1), Outcome::PlainFailure, ok(3)]),
            Ok(Outcome::PlainFailure)
        );
    }

    #[test]
    fn test_plain_success_is_invalid() {
        assert!(matches!(
            sequence([ok(1), Outcome::PlainSuccess]),
            Err(InvalidShape::Unchainable { operation: "sequence", .. })
        ));
    }

    #[test]
    fn test_terms_and_std_results() {
        let terms = [Term::ok(Term::Int(1)), Term::ok(Term::atom("a"))];
        assert_eq!(
            sequence(terms),
            Ok(ok(vec![Term::Int(1), Term::atom("a")]))
        );

        let results: Vec<Result<u8, String>> = vec![Ok(1), Ok(2)];
        assert_eq!(sequence(results), Ok(ok(vec![1, 2])));
    }
}

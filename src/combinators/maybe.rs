use crate::term::Term;

/// Values that may be absent.
///
/// Absence is not failure: a `None` or `Term::Nil` says nothing about whether an operation
/// went wrong.
pub trait Nullable: Sized {
    /// What a present value hands to the next step.
    type Present;

    /// The absent marker.
    fn absent() -> Self;

    /// `None` when absent.
    fn present(self) -> Option<Self::Present>;
}

impl<T> Nullable for Option<T> {
    type Present = T;

    #[inline]
    fn absent() -> Self {
        None
    }

    #[inline]
    fn present(self) -> Option<T> {
        self
    }
}

impl Nullable for Term {
    type Present = Term;

    #[inline]
    fn absent() -> Self {
        Term::Nil
    }

    #[inline]
    fn present(self) -> Option<Term> {
        match self {
            Term::Nil => None,
            other => Some(other),
        }
    }
}

/// Run `step` on a present value; keep an absent one absent.
///
/// The step's return value comes back as is, with no result shape check.
///
/// ```rust
/// use okpipe::{maybe, Term};
///
/// let first_char = |s: &str| s.chars().next();
/// assert_eq!(maybe(Some("abc"), first_char), Some('a'));
/// assert_eq!(maybe(None::<&str>, first_char), None);
///
/// assert_eq!(maybe(Term::Nil, |_| Term::Int(1)), Term::Nil);
/// ```
pub fn maybe<V, R, F>(value: V, step: F) -> R
where
    V: Nullable,
    R: Nullable,
    F: FnOnce(V::Present) -> R,
{
    match value.present() {
        Some(v) => step(v),
        None => {
            tracing::trace!("maybe skipped absent value");
            R::absent()
        }
    }
}

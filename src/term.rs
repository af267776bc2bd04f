//! Loosely shaped values.
//!
//! A [`Term`] is what an outcome looks like before anyone has checked it: a tuple, an atom, a
//! number, a list. Boundaries that receive untyped data (decoded messages, scripting hosts,
//! test fixtures) build terms and hand them to [`ensure_is_result`](crate::ensure_is_result),
//! which either recognizes a result shape or reports [`InvalidShape`](crate::InvalidShape).
//!
//! Recognized shapes:
//!
//! | Term                 | Outcome                      |
//! |----------------------|------------------------------|
//! | `{:ok, v}`           | `Success(v)`                 |
//! | `{:error, "text"}`   | `Failure(Reason::Message)`   |
//! | `{:error, :name}`    | `Failure(Reason::Tag)`       |
//! | `:ok`                | `PlainSuccess`               |
//! | `:error`             | `PlainFailure`               |

use std::fmt;

use crate::outcome::Outcome;
use crate::reason::{Reason, Tag};

const OK_ATOM: &str = "ok";
const ERROR_ATOM: &str = "error";

/// A dynamically shaped value.
///
/// `Nil` is the absent marker used by [`maybe`](crate::maybe).
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Absence of a value
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Symbolic name, written `:name`
    Atom(String),
    Str(String),
    List(Vec<Term>),
    /// Fixed-size group, written `{a, b}`
    Tuple(Vec<Term>),
}

impl Term {
    /// Build an atom.
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    /// Build a string.
    pub fn str(text: impl Into<String>) -> Self {
        Term::Str(text.into())
    }

    /// Build a tuple from its elements.
    pub fn tuple(items: impl IntoIterator<Item = Term>) -> Self {
        Term::Tuple(items.into_iter().collect())
    }

    /// Build a list from its elements.
    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        Term::List(items.into_iter().collect())
    }

    /// `{:ok, value}`
    pub fn ok(value: Term) -> Self {
        Term::tuple([Term::atom(OK_ATOM), value])
    }

    /// `{:error, reason}`
    pub fn error(reason: Term) -> Self {
        Term::tuple([Term::atom(ERROR_ATOM), reason])
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Term::Nil)
    }

    /// Match the term against the result shapes, handing it back if none fits.
    pub(crate) fn match_shape(self) -> Result<Outcome<Term>, Term> {
        match self {
            Term::Atom(a) if a == OK_ATOM => Ok(Outcome::PlainSuccess),
            Term::Atom(a) if a == ERROR_ATOM => Ok(Outcome::PlainFailure),
            Term::Tuple(items) if items.len() == 2 => {
                let [head, payload]: [Term; 2] = match items.try_into() {
                    Ok(pair) => pair,
                    Err(items) => return Err(Term::Tuple(items)),
                };
                match (head, payload) {
                    (Term::Atom(a), v) if a == OK_ATOM => Ok(Outcome::Success(v)),
                    (Term::Atom(a), Term::Str(m)) if a == ERROR_ATOM => {
                        Ok(Outcome::Failure(Reason::Message(m)))
                    }
                    (Term::Atom(a), Term::Atom(t)) if a == ERROR_ATOM => {
                        Ok(Outcome::Failure(Reason::Tag(Tag::new(t))))
                    }
                    (head, payload) => Err(Term::tuple([head, payload])),
                }
            }
            other => Err(other),
        }
    }
}

impl From<Reason> for Term {
    fn from(reason: Reason) -> Self {
        match reason {
            Reason::Message(m) => Term::Str(m),
            Reason::Tag(t) => Term::Atom(t.name().to_owned()),
        }
    }
}

impl From<Outcome<Term>> for Term {
    fn from(outcome: Outcome<Term>) -> Self {
        match outcome {
            Outcome::Success(v) => Term::ok(v),
            Outcome::Failure(r) => Term::error(r.into()),
            Outcome::PlainSuccess => Term::atom(OK_ATOM),
            Outcome::PlainFailure => Term::atom(ERROR_ATOM),
        }
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Int(n)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Bool(b)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Str(s.to_owned())
    }
}

impl<T: Into<Term>> From<Option<T>> for Term {
    fn from(value: Option<T>) -> Self {
        value.map_or(Term::Nil, Into::into)
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Term]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Nil => f.write_str("nil"),
            Term::Bool(b) => write!(f, "{b}"),
            Term::Int(n) => write!(f, "{n}"),
            Term::Float(x) => write!(f, "{x:?}"),
            Term::Atom(a) => write!(f, ":{a}"),
            Term::Str(s) => write!(f, "{s:?}"),
            Term::List(items) => {
                f.write_str("[")?;
                write_seq(f, items)?;
                f.write_str("]")
            }
            Term::Tuple(items) => {
                f.write_str("{")?;
                write_seq(f, items)?;
                f.write_str("}")
            }
        }
    }
}

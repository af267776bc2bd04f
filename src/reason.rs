//! Failure reasons carried by [`Outcome::Failure`](crate::Outcome::Failure).
//!
//! A reason is either a human-readable message or a symbolic [`Tag`]. Nothing richer is
//! modelled: callers that need structured errors keep them out of the outcome channel.

use std::borrow::Cow;
use std::fmt;

/// A symbolic error identifier such as `:invalid` or `:not_found`.
///
/// # Examples
///
/// ```rust
/// use okpipe::Tag;
///
/// let tag = Tag::new("invalid");
/// assert_eq!(tag.name(), "invalid");
/// assert_eq!(tag.to_string(), ":invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// Create a tag from a static or owned name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Tag(name.into())
    }

    /// The tag name without the leading colon.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// Why a computation failed.
///
/// Strings convert into [`Reason::Message`], tags into [`Reason::Tag`].
///
/// # Examples
///
/// ```rust
/// use okpipe::{Reason, Tag};
///
/// let message: Reason = "bad argument".into();
/// assert_eq!(message.message(), Some("bad argument"));
///
/// let tag: Reason = Tag::new("invalid").into();
/// assert_eq!(tag.tag(), Some(&Tag::new("invalid")));
/// assert_eq!(tag.to_string(), ":invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reason {
    /// Human-readable description
    Message(String),
    /// Symbolic identifier
    Tag(Tag),
}

impl Reason {
    /// Shorthand for `Reason::Tag(Tag::new(name))`.
    pub fn tag_named(name: impl Into<Cow<'static, str>>) -> Self {
        Reason::Tag(Tag::new(name))
    }

    /// Returns `true` if the reason is a message.
    #[inline]
    pub const fn is_message(&self) -> bool {
        matches!(self, Reason::Message(_))
    }

    /// Returns `true` if the reason is a symbolic tag.
    #[inline]
    pub const fn is_tag(&self) -> bool {
        matches!(self, Reason::Tag(_))
    }

    /// The message text, if this is a message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Reason::Message(m) => Some(m),
            Reason::Tag(_) => None,
        }
    }

    /// The tag, if this is a tag.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Reason::Message(_) => None,
            Reason::Tag(t) => Some(t),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Message(m) => f.write_str(m),
            Reason::Tag(t) => t.fmt(f),
        }
    }
}

impl From<&str> for Reason {
    fn from(message: &str) -> Self {
        Reason::Message(message.to_owned())
    }
}

impl From<String> for Reason {
    fn from(message: String) -> Self {
        Reason::Message(message)
    }
}

impl From<Tag> for Reason {
    fn from(tag: Tag) -> Self {
        Reason::Tag(tag)
    }
}

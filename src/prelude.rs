//! Commonly used imports
//!
//! Use `use okpipe::prelude::*;` for quick access to the types and every combinator.

// Core types
pub use crate::{InvalidShape, IntoOutcome, Outcome, Reason, Tag, Term};

// Constructors
pub use crate::{error, ok};

// Composition
pub use crate::{and_then_keep, chain, ensure_is_result, or_else_keep, sequence};

// Absence
pub use crate::{maybe, Nullable};

// Boundaries and helpers
pub use crate::{id, try_wrap, tuple_wrap};

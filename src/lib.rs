//! # Okpipe: Railway-Style Outcome Combinators
//!
//! Thread success and failure through a sequence of steps without writing a `match` at
//! each one. The first failure short-circuits the rest of the chain.
//!
//! ## Core Types
//!
//! - **[`Outcome<T>`]**: `Success(T)`, `Failure(Reason)`, or one of the payload-less markers
//!   `PlainSuccess` / `PlainFailure`
//! - **[`Reason`]**: a message or a symbolic [`Tag`]
//! - **[`Term`]**: a loosely shaped value, checked against the result shapes at runtime
//! - **[`InvalidShape`]**: misuse of the library, kept apart from domain failures
//!
//! ## Example
//!
//! ```
//! use okpipe::*;
//!
//! fn parse(s: &str) -> Result<i32, String> {
//!     s.trim().parse().map_err(|e| format!("{e}"))
//! }
//!
//! fn positive(n: i32) -> Outcome<i32> {
//!     if n > 0 { ok(n) } else { error(Tag::new("not_positive")) }
//! }
//!
//! # fn main() -> Result<(), InvalidShape> {
//! let good = chain(ok(" 12 "), parse)?.then(positive)?;
//! assert_eq!(good, ok(12));
//!
//! let bad = chain(ok("-3"), parse)?.then(positive)?;
//! assert_eq!(bad, error(Tag::new("not_positive")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Common Functions
//!
//! **Building outcomes:**
//! - [`ok(v)`](ok) / [`error(reason)`](error) - Wrap a value or a reason
//! - [`tuple_wrap(thunk)`](tuple_wrap) - Run a closure, turning a panic into a failure
//! - [`try_wrap(thunk)`](try_wrap) - Same, for closures returning `Result`
//!
//! **Composition:**
//! - [`chain(input, step)`](chain) - Feed a success payload to the next step
//! - [`and_then_keep(a, b)`](and_then_keep) / [`or_else_keep(a, b)`](or_else_keep) - Pick
//!   between two computed outcomes
//! - [`sequence(items)`](sequence) - Collect payloads until the first failure
//! - [`maybe(value, step)`](maybe) - Skip a step when the value is absent
//! - [`ensure_is_result(value)`](ensure_is_result) - Check a value has a result shape

mod combinators;
mod outcome;
mod reason;
mod shape;
mod term;

pub mod prelude;

pub use combinators::*;
pub use outcome::*;
pub use reason::*;
pub use shape::*;
pub use term::*;

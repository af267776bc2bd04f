/// Returns its argument.
///
/// A no-op stage for pipelines that need a step in a slot but nothing done there.
///
/// ```rust
/// use okpipe::{chain, id, ok, Outcome};
///
/// # fn main() -> Result<(), okpipe::InvalidShape> {
/// assert_eq!(id(5), 5);
/// assert_eq!(chain(ok(ok(7)), id)?, ok(7));
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn id<T>(x: T) -> T {
    x
}

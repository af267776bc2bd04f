mod chain;
mod func;
mod logic;
mod maybe;
mod sequence;
mod wrap;

pub use chain::*;
pub use func::*;
pub use logic::*;
pub use maybe::*;
pub use sequence::*;
pub use wrap::*;

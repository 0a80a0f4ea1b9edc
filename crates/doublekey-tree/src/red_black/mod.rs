//! Red-black insertion, lookup and invariant checking over an arena.

pub mod error;
pub mod types;
pub mod util;

pub use error::{InsertError, InvariantViolation};
pub use types::{Color, DkNode, RbNodeLike, Side};
pub use util::{check_invariants, find, insert, insert_large, insert_small, lookup, print};

//! Lazy range-aggregation tree ("lazy segment tree").
//!
//! - One tree is bound to one [`RangeAlgebra`] for its whole lifetime.
//! - Build once from assigned leaves, then interleave range updates and
//!   range queries freely; both are `O(log N)`.
//! - Queries push pending deltas down, so they are writers too.

pub mod algebra;

mod error;
mod tree;

pub use algebra::{AddMax, AddMin, AddSum, BitAnd, BitOr, RangeAlgebra};
pub use error::TreeError;
pub use tree::LazyTree;

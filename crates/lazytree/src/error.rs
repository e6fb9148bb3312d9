use thiserror::Error;

/// Misuse of a [`LazyTree`](crate::LazyTree). Every variant is detected
/// before any node is touched, so a failed call leaves the tree unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    #[error("capacity must be positive")]
    Capacity,
    #[error("tree used before build()")]
    NotBuilt,
    #[error("invalid range [{lo}, {hi}] for padded length {len}")]
    Range { lo: usize, hi: usize, len: usize },
}

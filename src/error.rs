//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when constructing a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Face symbol is not one of `J`, `Q` or `K`.
    #[error("face rank must be one of J, Q or K")]
    InvalidFace,
    /// Pip count is outside `2..=10`.
    #[error("numeric rank must be between 2 and 10")]
    InvalidPips,
    /// Rank order is outside `1..=13`.
    #[error("rank order must be between 1 and 13")]
    InvalidOrder,
}

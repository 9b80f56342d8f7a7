// src/core/indexing/range_tree/error.rs

use std::fmt;

/// Errors raised by range tree construction and validation.
///
/// Insertion and counting never fail on valid input; only the balance
/// factor is checked up front and invariants are checked on request.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeTreeError {
    /// The balance factor was outside the open interval (0, 1).
    InvalidAlpha(f64),
    /// A structural invariant did not hold.
    InvariantViolation(String),
}

impl fmt::Display for RangeTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlpha(alpha) => {
                write!(f, "Range tree balance factor must lie in (0, 1), got {alpha}")
            }
            Self::InvariantViolation(msg) => write!(f, "Range tree invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for RangeTreeError {}

impl RangeTreeError {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

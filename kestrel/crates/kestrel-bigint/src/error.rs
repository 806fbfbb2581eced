//! Error types for the checked big-integer API.

use thiserror::Error;

/// Error type for arithmetic that cannot produce an unsigned result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Subtraction would produce a negative number
    #[error("subtraction underflow: subtrahend has {rhs_words} significant words, minuend has {lhs_words}")]
    NegativeDifference {
        /// Significant words in the minuend
        lhs_words: usize,
        /// Significant words in the subtrahend
        rhs_words: usize,
    },

    /// The value is the invalid sentinel
    #[error("value has no unsigned representation")]
    InvalidValue,
}

/// Result type alias for checked arithmetic
pub type ArithmeticResult<T> = std::result::Result<T, ArithmeticError>;

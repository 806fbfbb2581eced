//! Core error types for kestrel-util crate

use thiserror::Error;

/// Error type for span and line index operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Span ends before it starts
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Offset lies past the end of the source
    #[error("Offset out of bounds: source has {source_len} bytes, offset is {offset}")]
    OffsetOutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Requested offset
        offset: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested 1-based line
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;

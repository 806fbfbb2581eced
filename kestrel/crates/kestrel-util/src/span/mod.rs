//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range into a source buffer. Spans carry no
//! line or column information; callers that need it build a [`LineIndex`]
//! once per source and resolve offsets on demand.
//!
//! # Examples
//!
//! ```
//! use kestrel_util::span::Span;
//!
//! let span = Span::new(4, 7);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.slice("let foo = 1;"), Some("foo"));
//! ```

mod line_index;

pub use line_index::LineIndex;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// Byte offsets `start..end` into the source the span was produced from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use kestrel_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span, rejecting ranges that end before they start
    ///
    /// # Examples
    ///
    /// ```
    /// use kestrel_util::span::Span;
    ///
    /// assert!(Span::try_new(3, 5).is_ok());
    /// assert!(Span::try_new(5, 3).is_err());
    /// ```
    pub fn try_new(start: usize, end: usize) -> SpanResult<Self> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create an empty span at a single offset
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use kestrel_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use kestrel_util::span::Span;
    ///
    /// let merged = Span::new(10, 20).merge(Span::new(25, 35));
    /// assert_eq!(merged, Span::new(10, 35));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the text this span covers in `source`
    ///
    /// `None` when the span is out of range or does not fall on character
    /// boundaries.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        assert!(Span::point(4).is_empty());
        assert_eq!(Span::new(2, 9).len(), 7);
        assert_eq!(Span::DUMMY, Span::default());
    }

    #[test]
    fn test_try_new_rejects_reversed() {
        assert_eq!(
            Span::try_new(8, 2),
            Err(SpanError::InvalidSpan { start: 8, end: 2 })
        );
    }

    #[test]
    fn test_slice_out_of_range() {
        assert_eq!(Span::new(0, 3).slice("ab"), None);
        assert_eq!(Span::new(0, 2).slice("ab"), Some("ab"));
    }

    #[test]
    fn test_from_range() {
        assert_eq!(Span::from(3..6), Span::new(3, 6));
    }
}

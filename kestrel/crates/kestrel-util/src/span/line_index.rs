//! Offset to line/column mapping.
//!
//! The lexer reports byte offsets only. [`LineIndex`] precomputes the start
//! of every line so that offsets can be resolved with a binary search.

use crate::error::{SpanError, SpanResult};

/// Precomputed line start offsets for one source buffer
///
/// # Examples
///
/// ```
/// use kestrel_util::span::LineIndex;
///
/// let index = LineIndex::new("line1\nline2\nline3");
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.line_col(8), Ok((2, 3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Build the index for `source`
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (1-based line number)
    pub fn line_start(&self, line: usize) -> SpanResult<usize> {
        line.checked_sub(1)
            .and_then(|i| self.line_starts.get(i).copied())
            .ok_or(SpanError::InvalidLineNumber {
                line,
                max_lines: self.line_starts.len(),
            })
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Columns count bytes from the start of the line. The offset one past
    /// the last byte is valid and resolves to the end-of-file position.
    pub fn line_col(&self, offset: usize) -> SpanResult<(usize, usize)> {
        if offset > self.len {
            return Err(SpanError::OffsetOutOfBounds {
                source_len: self.len,
                offset,
            });
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // line_starts[0] == 0, so an insertion point is never 0
            Err(insert_point) => insert_point - 1,
        };
        Ok((line + 1, offset - self.line_starts[line] + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("let x = 42;");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), Ok((1, 1)));
        assert_eq!(index.line_col(4), Ok((1, 5)));
    }

    #[test]
    fn test_newline_belongs_to_its_line() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_col(2), Ok((1, 3)));
        assert_eq!(index.line_col(3), Ok((2, 1)));
    }

    #[test]
    fn test_end_of_source() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.line_col(3), Ok((2, 1)));
        assert_eq!(
            index.line_col(4),
            Err(SpanError::OffsetOutOfBounds {
                source_len: 3,
                offset: 4
            })
        );
    }

    #[test]
    fn test_line_start() {
        let index = LineIndex::new("a\nbb\nccc");
        assert_eq!(index.line_start(1), Ok(0));
        assert_eq!(index.line_start(3), Ok(5));
        assert!(index.line_start(0).is_err());
        assert!(index.line_start(4).is_err());
    }

    #[test]
    fn test_empty_source() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), Ok((1, 1)));
    }

    #[quickcheck]
    fn prop_line_matches_newline_count(source: String) -> bool {
        let index = LineIndex::new(&source);
        source.char_indices().all(|(offset, _)| {
            let expected = source[..offset].matches('\n').count() + 1;
            index.line_col(offset).map(|(line, _)| line) == Ok(expected)
        })
    }
}

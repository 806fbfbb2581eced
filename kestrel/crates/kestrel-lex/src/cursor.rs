//! Character cursor for traversing source code.
//!
//! The cursor walks a borrowed source string one character at a time. The
//! current character is `None` once the end of input is reached, which
//! serves as the end-of-file sentinel: no character of the source can
//! compare equal to it.

/// A cursor over a borrowed source string.
///
/// # Example
///
/// ```
/// use kestrel_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), Some('a'));
/// assert_eq!(cursor.peek_char(), Some('b'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// The whole source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Text from the current character to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The current character, `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        // Fast path for ASCII (most common case)
        match self.source.as_bytes().get(self.position) {
            None => None,
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.remaining().chars().next(),
        }
    }

    /// The character after the current one.
    pub fn peek_char(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    /// The current character and the one after it as a single slice.
    ///
    /// `None` when fewer than two characters remain.
    pub fn peek_pair(&self) -> Option<&'a str> {
        let remaining = self.remaining();
        let mut indices = remaining.char_indices().skip(1);
        let (second_start, second) = indices.next()?;
        Some(&remaining[..second_start + second.len_utf8()])
    }

    /// Advances past the current character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    /// Source text from byte offset `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

//! Trivia skipping.
//!
//! Whitespace, line comments and block comments are consumed before every
//! token and handed to it as trivia.

use crate::Lexer;

/// The C `isspace` set.
#[inline]
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments until neither applies.
    ///
    /// Returns the start offset of a block comment that runs into the end of
    /// input, in which case the cursor is left at the end.
    pub(crate) fn skip_trivia(&mut self) -> Option<usize> {
        loop {
            match (self.cursor.current_char(), self.cursor.peek_char()) {
                (Some(c), _) if is_space(c) => self.cursor.eat_while(is_space),
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => {
                    let start = self.cursor.position();
                    if !self.skip_block_comment() {
                        return Some(start);
                    }
                },
                _ => return None,
            }
        }
    }

    /// Skips a line comment (from `//` up to, not including, the newline).
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment. Block comments do not nest.
    ///
    /// Returns false if the input ends before `*/`.
    fn skip_block_comment(&mut self) -> bool {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            match (self.cursor.current_char(), self.cursor.peek_char()) {
                (Some('*'), Some('/')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return true;
                },
                (Some(_), _) => self.cursor.advance(),
                (None, _) => {
                    log::debug!("unterminated block comment starting at byte {}", start);
                    return false;
                },
            }
        }
    }
}

//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use kestrel_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenType};

/// Lexer for the scripting language.
///
/// Produces one [`Token`] per call to [`Lexer::next_token`]. The source is
/// borrowed for the lexer's whole lifetime and never copied; token texts
/// are slices of it.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// The most recently produced token.
    current_token: Token<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            current_token: Token::new(TokenType::Eof, "", "", Span::point(0)),
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Once the input is exhausted every call returns an `Eof`
    /// token carrying any trailing trivia.
    pub fn next_token(&mut self) -> Token<'a> {
        let trivia_start = self.cursor.position();

        let (kind, value_start) = match self.skip_trivia() {
            Some(comment_start) => (TokenType::UnterminatedComment, comment_start),
            None => {
                let value_start = self.cursor.position();
                (self.lex_value(), value_start)
            },
        };

        let source = self.cursor.source();
        let value_end = self.cursor.position();
        self.current_token = Token::new(
            kind,
            &source[trivia_start..value_start],
            &source[value_start..value_end],
            Span::new(value_start, value_end),
        );
        self.current_token
    }

    fn lex_value(&mut self) -> TokenType {
        match self.cursor.current_char() {
            None => TokenType::Eof,
            Some(c) if is_identifier_start(c) => self.lex_identifier(),
            Some(c) if c.is_ascii_digit() => self.lex_number(),
            Some('"') => self.lex_string(),
            Some(c) => self.lex_operator(c),
        }
    }

    /// The most recently produced token.
    ///
    /// Before the first call to [`Lexer::next_token`] this is an empty `Eof`.
    #[inline]
    pub fn current_token(&self) -> Token<'a> {
        self.current_token
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The source being lexed.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[inline]
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub(crate) fn is_identifier_middle(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

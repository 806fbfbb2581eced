//! Operator and punctuation lexing.
//!
//! Two-character operators are tried first so that `+=` never splits into
//! `+` and `=`. Anything in neither table becomes a one-character
//! `Invalid` token.

use crate::tables::{SINGLE_CHAR_TOKENS, TWO_CHAR_TOKENS};
use crate::token::TokenType;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator, punctuation, or invalid character starting with `c`.
    pub(crate) fn lex_operator(&mut self, c: char) -> TokenType {
        if let Some(&kind) = self
            .cursor
            .peek_pair()
            .and_then(|pair| TWO_CHAR_TOKENS.get(pair))
        {
            self.cursor.advance();
            self.cursor.advance();
            return kind;
        }

        self.cursor.advance();
        SINGLE_CHAR_TOKENS
            .get(&c)
            .copied()
            .unwrap_or(TokenType::Invalid)
    }
}

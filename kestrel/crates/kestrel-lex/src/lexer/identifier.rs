//! Identifier and keyword lexing.

use super::core::is_identifier_middle;
use crate::token::{keyword_from_ident, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter, `_` or `$` and continue with
    /// those or ASCII digits.
    pub(crate) fn lex_identifier(&mut self) -> TokenType {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(is_identifier_middle);

        keyword_from_ident(self.cursor.slice_from(start)).unwrap_or(TokenType::Identifier)
    }
}

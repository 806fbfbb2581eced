//! String literal lexing.
//!
//! Strings are delimited by `"` and have no escape sequences: the first `"`
//! after the opening one closes the literal.

use crate::token::TokenType;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// Stops at end of input if the closing quote is missing and reports the
    /// literal as `UnterminatedStringLiteral`.
    pub(crate) fn lex_string(&mut self) -> TokenType {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            log::debug!("unterminated string literal starting at byte {}", start);
            return TokenType::UnterminatedStringLiteral;
        }

        self.cursor.advance();
        TokenType::StringLiteral
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenType};

    #[test]
    fn test_simple_string() {
        let token = Lexer::new(r#""hello, world" x"#).next_token();
        assert_eq!(token.kind(), TokenType::StringLiteral);
        assert_eq!(token.value(), r#""hello, world""#);
        assert_eq!(token.string_value(), Some("hello, world"));
    }

    #[test]
    fn test_empty_string() {
        let token = Lexer::new(r#""""#).next_token();
        assert_eq!(token.kind(), TokenType::StringLiteral);
        assert_eq!(token.string_value(), Some(""));
    }

    #[test]
    fn test_backslash_is_not_an_escape() {
        let mut lexer = Lexer::new(r#""a\"b"#);
        let token = lexer.next_token();
        assert_eq!(token.value(), r#""a\""#);
        assert_eq!(lexer.next_token().value(), "b");
    }

    #[test]
    fn test_string_spans_lines_and_unicode() {
        let token = Lexer::new("\"línea\nnext\"").next_token();
        assert_eq!(token.kind(), TokenType::StringLiteral);
        assert_eq!(token.string_value(), Some("línea\nnext"));
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("x = \"open");
        lexer.next_token();
        lexer.next_token();

        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenType::UnterminatedStringLiteral);
        assert_eq!(token.value(), "\"open");
        assert_eq!(token.string_value(), Some("open"));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_lone_quote() {
        let mut lexer = Lexer::new("\"");
        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenType::UnterminatedStringLiteral);
        assert_eq!(token.value(), "\"");
        assert!(lexer.next_token().is_eof());
    }
}

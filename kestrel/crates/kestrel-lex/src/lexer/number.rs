//! Number literal lexing.
//!
//! Only decimal integers are recognized. A `.` after the digits is left for
//! the operator table.

use crate::token::TokenType;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits.
    pub(crate) fn lex_number(&mut self) -> TokenType {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        TokenType::NumericLiteral
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenType};

    #[test]
    fn test_integer() {
        let token = Lexer::new("12345;").next_token();
        assert_eq!(token.kind(), TokenType::NumericLiteral);
        assert_eq!(token.value(), "12345");
        assert_eq!(token.numeric_value(), Some(12345.0));
    }

    #[test]
    fn test_no_fraction_or_radix() {
        let tokens: Vec<_> = Lexer::new("1.5 0x1F").map(|t| (t.kind(), t.value())).collect();
        assert_eq!(
            tokens,
            vec![
                (TokenType::NumericLiteral, "1"),
                (TokenType::Period, "."),
                (TokenType::NumericLiteral, "5"),
                (TokenType::NumericLiteral, "0"),
                (TokenType::Identifier, "x1F"),
            ]
        );
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(Lexer::new("007").next_token().value(), "007");
    }
}

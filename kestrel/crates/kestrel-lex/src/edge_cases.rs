//! Edge case tests for kestrel-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenType};
    use proptest::prelude::*;

    /// Every token up to and including Eof, with a hard cap so a lexer that
    /// stops making progress fails instead of hanging.
    fn lex_with_eof(source: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        for _ in 0..=source.len() + 1 {
            let token = lexer.next_token();
            tokens.push(token);
            if token.is_eof() {
                return tokens;
            }
        }
        panic!("lexer did not reach Eof for {source:?}");
    }

    fn rebuild(tokens: &[Token<'_>]) -> String {
        tokens
            .iter()
            .flat_map(|t| [t.trivia(), t.value()])
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        let tokens = lex_with_eof("   \n\t  \n  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].trivia(), "   \n\t  \n  ");
    }

    #[test]
    fn test_edge_comments_only() {
        let tokens = lex_with_eof("// comment\n/* block */\n// another");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let source = format!("let {} = 1;", name);
        let tokens = lex_with_eof(&source);
        assert_eq!(tokens[1].value(), name);
    }

    #[test]
    fn test_edge_nul_byte_is_invalid_not_eof() {
        let tokens = lex_with_eof("a\0b");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenType::Identifier,
                TokenType::Invalid,
                TokenType::Identifier,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_unterminated_comment_after_tokens() {
        let tokens = lex_with_eof("x /* y");
        assert_eq!(tokens[1].kind(), TokenType::UnterminatedComment);
        assert_eq!(rebuild(&tokens), "x /* y");
    }

    #[test]
    fn test_edge_lone_slash_star() {
        let tokens = lex_with_eof("/*");
        assert_eq!(tokens[0].kind(), TokenType::UnterminatedComment);
        assert_eq!(tokens[0].value(), "/*");
    }

    #[test]
    fn test_edge_concurrent_lexers() {
        let source = "while (i < 10) { i += 1; }";
        let expected: Vec<_> = Lexer::new(source).map(|t| t.kind()).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| Lexer::new(source).map(|t| t.kind()).collect::<Vec<_>>()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    // ==================== PROPERTY TESTS ====================

    proptest! {
        #[test]
        fn prop_reconstructs_source(source in ".{0,200}") {
            let tokens = lex_with_eof(&source);
            prop_assert_eq!(rebuild(&tokens), source);
        }

        #[test]
        fn prop_only_eof_is_empty(source in "[ -~\n\t]{0,200}") {
            for token in lex_with_eof(&source) {
                prop_assert_eq!(token.value().is_empty(), token.is_eof());
            }
        }

        #[test]
        fn prop_identifiers_round_trip(input in "[a-zA-Z_$][a-zA-Z0-9_$]{0,100}") {
            let tokens = lex_with_eof(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].value(), input.as_str());
            let expected = crate::keyword_from_ident(&input).unwrap_or(TokenType::Identifier);
            prop_assert_eq!(tokens[0].kind(), expected);
        }

        #[test]
        fn prop_numbers_round_trip(input in "[0-9]{1,40}") {
            let tokens = lex_with_eof(&input);
            prop_assert_eq!(tokens[0].kind(), TokenType::NumericLiteral);
            prop_assert_eq!(tokens[0].value(), input.as_str());
        }

        #[test]
        fn prop_strings_round_trip(body in "[^\"]{0,100}") {
            let source = format!("\"{}\"", body);
            let tokens = lex_with_eof(&source);
            prop_assert_eq!(tokens[0].kind(), TokenType::StringLiteral);
            prop_assert_eq!(tokens[0].string_value(), Some(body.as_str()));
        }
    }
}

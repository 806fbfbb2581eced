//! Token definitions.
//!
//! A [`Token`] is a snapshot of one lexeme: its [`TokenType`], the trivia
//! (whitespace and comments) that preceded it, and its own source text.
//! Both texts borrow from the source, so tokens are `Copy` and cheap to
//! hand around.

use std::fmt;

use kestrel_util::Span;

use crate::tables::KEYWORDS;

macro_rules! token_types {
    ($($(#[$doc:meta])* $variant:ident,)*) => {
        /// Category of a lexed token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TokenType {
            $($(#[$doc])* $variant,)*
        }

        impl TokenType {
            /// The variant name, e.g. `"PlusEquals"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(TokenType::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

token_types! {
    /// `&`
    Ampersand,
    /// `&=`
    AmpersandEquals,
    /// `*`
    Asterisk,
    /// `*=`
    AsteriskEquals,
    /// `true` or `false`
    BoolLiteral,
    /// `]`
    BracketClose,
    /// `[`
    BracketOpen,
    /// `catch`
    Catch,
    /// `class`
    Class,
    /// `,`
    Comma,
    /// `const`
    Const,
    /// `}`
    CurlyClose,
    /// `{`
    CurlyOpen,
    /// `delete`
    Delete,
    /// `do`
    Do,
    /// `&&`
    DoubleAmpersand,
    /// `||`
    DoublePipe,
    /// `else`
    Else,
    /// End of input
    Eof,
    /// `=`
    Equals,
    /// `==`
    EqualsEquals,
    /// `!`
    ExclamationMark,
    /// `!=`
    ExclamationMarkEquals,
    /// `finally`
    Finally,
    /// `function`
    Function,
    /// `>`
    GreaterThan,
    /// Name that is not a keyword
    Identifier,
    /// `if`
    If,
    /// `interface`
    Interface,
    /// Character with no meaning in the language
    Invalid,
    /// `<`
    LessThan,
    /// `let`
    Let,
    /// `-`
    Minus,
    /// `-=`
    MinusEquals,
    /// `--`
    MinusMinus,
    /// `new`
    New,
    /// `null`
    NullLiteral,
    /// Run of decimal digits
    NumericLiteral,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `%`
    Percent,
    /// `%=`
    PercentEquals,
    /// `.`
    Period,
    /// `|`
    Pipe,
    /// `|=`
    PipeEquals,
    /// `+`
    Plus,
    /// `+=`
    PlusEquals,
    /// `++`
    PlusPlus,
    /// `?`
    QuestionMark,
    /// `return`
    Return,
    /// `;`
    Semicolon,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `/`
    Slash,
    /// `/=`
    SlashEquals,
    /// Double-quoted string
    StringLiteral,
    /// `try`
    Try,
    /// Block comment that reaches end of input without `*/`
    UnterminatedComment,
    /// String literal that reaches end of input without a closing quote
    UnterminatedStringLiteral,
    /// `var`
    Var,
    /// `while`
    While,
}

impl TokenType {
    /// True for the token types that signal malformed input.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenType::Invalid | TokenType::UnterminatedComment | TokenType::UnterminatedStringLiteral
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a keyword.
///
/// # Example
///
/// ```
/// use kestrel_lex::{keyword_from_ident, TokenType};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenType::While));
/// assert_eq!(keyword_from_ident("false"), Some(TokenType::BoolLiteral));
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenType> {
    KEYWORDS.get(ident).copied()
}

/// One lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenType,
    trivia: &'a str,
    value: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token whose value occupies `span` and whose trivia ends
    /// where the value starts.
    pub fn new(kind: TokenType, trivia: &'a str, value: &'a str, span: Span) -> Self {
        debug_assert_eq!(value.len(), span.len());
        debug_assert!(trivia.len() <= span.start);
        Self {
            kind,
            trivia,
            value,
            span,
        }
    }

    /// The token category.
    #[inline]
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Whitespace and comments immediately before the token.
    #[inline]
    pub fn trivia(&self) -> &'a str {
        self.trivia
    }

    /// The token's own source text.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Byte range of [`Token::value`] in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Byte range of [`Token::trivia`] in the source.
    pub fn trivia_span(&self) -> Span {
        Span::new(self.span.start - self.trivia.len(), self.span.start)
    }

    /// Name of the token type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// True for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }

    /// Numeric value of a `NumericLiteral`.
    pub fn numeric_value(&self) -> Option<f64> {
        match self.kind {
            TokenType::NumericLiteral => self.value.parse().ok(),
            _ => None,
        }
    }

    /// Contents of a string literal without its quotes.
    ///
    /// An unterminated literal yields everything after the opening quote.
    pub fn string_value(&self) -> Option<&'a str> {
        match self.kind {
            TokenType::StringLiteral => self.value.get(1..self.value.len() - 1),
            TokenType::UnterminatedStringLiteral => self.value.get(1..),
            _ => None,
        }
    }

    /// Value of a `BoolLiteral`.
    pub fn bool_value(&self) -> Option<bool> {
        match self.kind {
            TokenType::BoolLiteral => Some(self.value == "true"),
            _ => None,
        }
    }
}

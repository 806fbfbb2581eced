//! Static token tables.
//!
//! Built on first access behind `lazy_static`'s one-time guard and never
//! mutated afterwards, so every lexer on every thread shares them without
//! locking.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::token::TokenType;

lazy_static! {
    /// Reserved words.
    pub(crate) static ref KEYWORDS: FxHashMap<&'static str, TokenType> = [
        ("true", TokenType::BoolLiteral),
        ("false", TokenType::BoolLiteral),
        ("catch", TokenType::Catch),
        ("class", TokenType::Class),
        ("const", TokenType::Const),
        ("delete", TokenType::Delete),
        ("do", TokenType::Do),
        ("else", TokenType::Else),
        ("finally", TokenType::Finally),
        ("function", TokenType::Function),
        ("if", TokenType::If),
        ("interface", TokenType::Interface),
        ("let", TokenType::Let),
        ("new", TokenType::New),
        ("null", TokenType::NullLiteral),
        ("return", TokenType::Return),
        ("try", TokenType::Try),
        ("var", TokenType::Var),
        ("while", TokenType::While),
    ]
    .into_iter()
    .collect();

    /// Operators spelled with two characters; matched before single ones.
    pub(crate) static ref TWO_CHAR_TOKENS: FxHashMap<&'static str, TokenType> = [
        ("+=", TokenType::PlusEquals),
        ("-=", TokenType::MinusEquals),
        ("*=", TokenType::AsteriskEquals),
        ("/=", TokenType::SlashEquals),
        ("%=", TokenType::PercentEquals),
        ("&=", TokenType::AmpersandEquals),
        ("|=", TokenType::PipeEquals),
        ("&&", TokenType::DoubleAmpersand),
        ("||", TokenType::DoublePipe),
        ("==", TokenType::EqualsEquals),
        ("!=", TokenType::ExclamationMarkEquals),
        ("--", TokenType::MinusMinus),
        ("++", TokenType::PlusPlus),
        ("<<", TokenType::ShiftLeft),
        (">>", TokenType::ShiftRight),
    ]
    .into_iter()
    .collect();

    /// Punctuation and operators spelled with one character.
    pub(crate) static ref SINGLE_CHAR_TOKENS: FxHashMap<char, TokenType> = [
        ('&', TokenType::Ampersand),
        ('*', TokenType::Asterisk),
        ('[', TokenType::BracketOpen),
        (']', TokenType::BracketClose),
        (',', TokenType::Comma),
        ('{', TokenType::CurlyOpen),
        ('}', TokenType::CurlyClose),
        ('=', TokenType::Equals),
        ('!', TokenType::ExclamationMark),
        ('-', TokenType::Minus),
        ('(', TokenType::ParenOpen),
        (')', TokenType::ParenClose),
        ('%', TokenType::Percent),
        ('.', TokenType::Period),
        ('|', TokenType::Pipe),
        ('+', TokenType::Plus),
        ('?', TokenType::QuestionMark),
        (';', TokenType::Semicolon),
        ('/', TokenType::Slash),
        ('<', TokenType::LessThan),
        ('>', TokenType::GreaterThan),
    ]
    .into_iter()
    .collect();
}

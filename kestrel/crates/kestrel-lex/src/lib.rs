//! kestrel-lex - Lexical scanner for the Kestrel scripting language
//!
//! The lexer turns a borrowed source string into tokens, one per call to
//! [`Lexer::next_token`]. Every token records the trivia (whitespace and
//! comments) in front of it alongside its own text, so concatenating
//! `trivia + value` over all tokens up to and including `Eof` reproduces
//! the source exactly.
//!
//! # Example Usage
//!
//! ```
//! use kestrel_lex::{Lexer, TokenType};
//!
//! let mut lexer = Lexer::new("let x = 42;");
//!
//! let token = lexer.next_token();
//! assert_eq!(token.kind(), TokenType::Let);
//! assert_eq!(token.value(), "let");
//!
//! // Or iterate; iteration ends before the Eof token
//! let rest: Vec<_> = lexer.map(|t| t.value()).collect();
//! assert_eq!(rest, ["x", "=", "42", ";"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! - **Keywords**: `catch class const delete do else finally function if
//!   interface let new return try var while`, plus `true`/`false`
//!   (`BoolLiteral`) and `null` (`NullLiteral`)
//! - **Identifiers**: `[A-Za-z_$][A-Za-z0-9_$]*`
//! - **Numbers**: runs of decimal digits
//! - **Strings**: `"..."` without escapes
//! - **Operators**: `+= -= *= /= %= &= |= && || == != -- ++ << >>` and
//!   `& * [ ] , { } = ! - ( ) % . | + ? ; / < >`
//!
//! ## Malformed input
//!
//! Lexing never fails. Unknown characters become `Invalid` tokens, and a
//! string literal or block comment that runs into the end of input becomes
//! `UnterminatedStringLiteral` or `UnterminatedComment`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
mod tables;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenType};

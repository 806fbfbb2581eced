//! kestrel-util - Foundation types shared by the Kestrel core crates.
//!
//! This crate holds the small pieces of infrastructure that both the lexer
//! and the command-line front end need:
//!
//! - [`span`] - byte ranges into a source buffer and a [`LineIndex`] for
//!   turning byte offsets into human-readable line/column pairs
//! - [`error`] - error types for the fallible operations in this crate
//!
//! # Example
//!
//! ```
//! use kestrel_util::{LineIndex, Span};
//!
//! let source = "let a = 1;\nlet b = 2;";
//! let index = LineIndex::new(source);
//! let span = Span::new(15, 16);
//!
//! assert_eq!(span.slice(source), Some("b"));
//! assert_eq!(index.line_col(span.start), Ok((2, 5)));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{SpanError, SpanResult};
pub use span::{LineIndex, Span};

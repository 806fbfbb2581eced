//! Command modules for the kst CLI.
//!
//! Each subcommand is implemented in its own file following the pattern
//! set by [`traits::Command`].

pub mod common;
pub mod traits;

pub mod calc;
pub mod lex;

// Re-export command types and functions
pub use calc::{run_calc, CalcArgs};
pub use lex::{run_lex, LexArgs};

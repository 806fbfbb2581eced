//! Common types and utilities for kst commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across the command implementations.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use kestrel_bigint::{UnsignedBigInteger, Word, BITS_IN_WORD};
use serde::{Deserialize, Serialize};

use crate::error::{KstError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array per file
    Json,
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Check that every input path names an existing regular file.
pub fn validate_input_files(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(KstError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }
    for file in files {
        validate_input_file(file)?;
    }
    Ok(())
}

fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(KstError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(KstError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(())
}

// ============================================================================
// Hexadecimal Operands
// ============================================================================

/// Hex digits needed to print one word.
pub const HEX_DIGITS_PER_WORD: usize = BITS_IN_WORD / 4;

/// Parse a hexadecimal operand, with an optional `0x` prefix and `_`
/// digit separators, into a big integer.
pub fn parse_hex_operand(input: &str) -> Result<UnsignedBigInteger> {
    let body = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let digits: String = body.chars().filter(|&c| c != '_').collect();

    if digits.is_empty() {
        return Err(KstError::Validation(format!(
            "{}: {:?}",
            error_messages::EMPTY_OPERAND,
            input
        )));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(KstError::Validation(format!(
            "{} {:?} in {:?}",
            error_messages::INVALID_HEX_DIGIT,
            bad,
            input
        )));
    }

    // Least significant chunk first, matching word order.
    let words = digits
        .as_bytes()
        .rchunks(HEX_DIGITS_PER_WORD)
        .map(|chunk| {
            std::str::from_utf8(chunk)
                .ok()
                .and_then(|text| Word::from_str_radix(text, 16).ok())
                .ok_or_else(|| {
                    KstError::Validation(format!(
                        "{} {:?}",
                        error_messages::INVALID_HEX_DIGIT,
                        input
                    ))
                })
        })
        .collect::<Result<Vec<Word>>>()?;

    Ok(UnsignedBigInteger::from_words(words))
}

/// Largest accepted shift amount, 2^24 bits (2 MiB of words).
pub const MAX_SHIFT_BITS: usize = 1 << 24;

/// Parse a decimal bit count for shifts, at most [`MAX_SHIFT_BITS`].
pub fn parse_bit_count(input: &str) -> Result<usize> {
    let bits = input.parse::<usize>().map_err(|e| {
        KstError::Validation(format!(
            "{} {:?}: {}",
            error_messages::INVALID_BIT_COUNT,
            input,
            e
        ))
    })?;
    if bits > MAX_SHIFT_BITS {
        return Err(KstError::Validation(format!(
            "{} {}: exceeds the maximum of {}",
            error_messages::INVALID_BIT_COUNT,
            bits,
            MAX_SHIFT_BITS
        )));
    }
    Ok(bits)
}

/// Render a big integer as `0x`-prefixed hexadecimal without leading zeros.
pub fn format_hex(value: &UnsignedBigInteger, uppercase: bool) -> String {
    if value.is_invalid() {
        return output_messages::INVALID_VALUE.to_string();
    }

    let words = &value.words()[..value.trimmed_length()];
    let mut out = String::from("0x");
    match words.split_last() {
        None => out.push('0'),
        Some((top, rest)) => {
            let width = HEX_DIGITS_PER_WORD;
            if uppercase {
                out.push_str(&format!("{:X}", top));
                for word in rest.iter().rev() {
                    out.push_str(&format!("{:0width$X}", word));
                }
            } else {
                out.push_str(&format!("{:x}", top));
                for word in rest.iter().rev() {
                    out.push_str(&format!("{:0width$x}", word));
                }
            }
        }
    }
    out
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// No input files were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Input path is not a regular file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Operand has no digits.
    pub const EMPTY_OPERAND: &str = "Empty hexadecimal operand";

    /// Operand contains a non-hex character.
    pub const INVALID_HEX_DIGIT: &str = "Invalid hexadecimal digit";

    /// Shift amount is not a decimal count or exceeds the limit.
    pub const INVALID_BIT_COUNT: &str = "Invalid bit count";

    /// Malformed tokens were produced while denied.
    pub const MALFORMED_TOKENS: &str = "malformed token(s)";

    /// Worker pool could not be created.
    pub const THREAD_POOL: &str = "Failed to build thread pool";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Printed in place of a value without an unsigned representation.
    pub const INVALID_VALUE: &str = "<invalid>";

    /// Separator line in front of each file's tokens.
    pub const FILE_HEADER_OPEN: &str = "==> ";

    /// Closing part of the file separator line.
    pub const FILE_HEADER_CLOSE: &str = " <==";
}

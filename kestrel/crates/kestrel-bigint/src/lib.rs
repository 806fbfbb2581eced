//! kestrel-bigint - Arbitrary-precision unsigned integers.
//!
//! [`UnsignedBigInteger`] stores its magnitude as a vector of 32-bit words,
//! least-significant word first, and supports addition, subtraction,
//! multiplication, left shifts, equality and ordering.
//!
//! # Invalid values
//!
//! Results that have no unsigned representation (a subtraction whose
//! subtrahend is larger than its minuend) are not errors. They produce the
//! invalid sentinel from [`UnsignedBigInteger::create_invalid`], and every
//! operation that consumes an invalid operand yields the sentinel again.
//! Callers check [`UnsignedBigInteger::is_invalid`] before trusting a
//! result, or opt into [`UnsignedBigInteger::checked_sub`] and
//! [`UnsignedBigInteger::into_result`].
//!
//! # Example
//!
//! ```
//! use kestrel_bigint::UnsignedBigInteger;
//!
//! let a = UnsignedBigInteger::new(u32::MAX);
//! let b = UnsignedBigInteger::new(1);
//!
//! let sum = a.add(&b);
//! assert_eq!(sum.words(), &[0, 1]);
//! assert_eq!(sum.sub(&b), a);
//!
//! assert!(b.sub(&a).is_invalid());
//! ```

#![warn(missing_docs)]

pub mod error;
mod ops;
mod unsigned;

pub use error::{ArithmeticError, ArithmeticResult};
pub use unsigned::{UnsignedBigInteger, Word, BITS_IN_WORD};

//! Operator overloads.
//!
//! The operators borrow their operands and forward to the named methods, so
//! `&a + &b` is exactly `a.add(&b)` including invalid-sentinel propagation.
//! Only reference impls exist: a by-value `Add` impl would shadow the
//! inherent `add(&self, &Self)` wherever `std::ops::Add` is in scope.

use std::ops::{Add, Mul, Shl, Sub};

use crate::unsigned::UnsignedBigInteger;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl<'a> $trait<&'a UnsignedBigInteger> for &'a UnsignedBigInteger {
            type Output = UnsignedBigInteger;

            #[inline]
            fn $method(self, rhs: &'a UnsignedBigInteger) -> UnsignedBigInteger {
                UnsignedBigInteger::$inherent(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, multiply);

impl Shl<usize> for &UnsignedBigInteger {
    type Output = UnsignedBigInteger;

    #[inline]
    fn shl(self, num_bits: usize) -> UnsignedBigInteger {
        self.shift_left(num_bits)
    }
}

//! Bitwise operators and comparisons.
//!
//! Binary operations size their result to the *left* operand: the result
//! keeps `self`'s boundedness and width, and a wider right operand is
//! silently truncated to it (a narrower one is zero-extended). This
//! asymmetry is deliberate and matches the indexing rules.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use num_bigint::BigUint;

use crate::error::Result;

use super::{ones, BitSource, BitString};

impl BitString {
    /// Bitwise AND with anything coercible to a bit source.
    pub fn and(&self, rhs: impl Into<BitSource>) -> Result<BitString> {
        Ok(self.apply_masked(&self.value & rhs.into().into_uint()?))
    }

    /// Bitwise inclusive OR with anything coercible to a bit source.
    pub fn or(&self, rhs: impl Into<BitSource>) -> Result<BitString> {
        Ok(self.apply_masked(&self.value | rhs.into().into_uint()?))
    }

    /// Bitwise exclusive OR with anything coercible to a bit source.
    pub fn xor(&self, rhs: impl Into<BitSource>) -> Result<BitString> {
        Ok(self.apply_masked(&self.value ^ rhs.into().into_uint()?))
    }

    pub fn and_assign(&mut self, rhs: impl Into<BitSource>) -> Result<()> {
        *self = self.and(rhs)?;
        Ok(())
    }

    pub fn or_assign(&mut self, rhs: impl Into<BitSource>) -> Result<()> {
        *self = self.or(rhs)?;
        Ok(())
    }

    pub fn xor_assign(&mut self, rhs: impl Into<BitSource>) -> Result<()> {
        *self = self.xor(rhs)?;
        Ok(())
    }

    /// Complement within the effective length: every bit up to the fixed
    /// width (or the current significant length when unbounded) flips.
    pub fn complement(&self) -> BitString {
        self.with_value(ones(self.len()) ^ &self.value)
    }

    /// Shift toward the more significant end. Bounded results lose the
    /// bits pushed past the fixed width.
    pub fn shl(&self, bits: usize) -> BitString {
        self.apply_masked(&self.value << bits)
    }

    /// Shift toward the less significant end; zeros come in at the top.
    pub fn shr(&self, bits: usize) -> BitString {
        self.with_value(&self.value >> bits)
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident) => {
        impl $trait<&BitString> for &BitString {
            type Output = BitString;

            fn $method(self, rhs: &BitString) -> BitString {
                self.apply_masked((&self.value).$method(&rhs.value))
            }
        }

        impl $trait<&BitString> for BitString {
            type Output = BitString;

            fn $method(self, rhs: &BitString) -> BitString {
                (&self).$method(rhs)
            }
        }
    };
}

binop!(BitAnd, bitand);
binop!(BitOr, bitor);
binop!(BitXor, bitxor);

macro_rules! binop_assign {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<&BitString> for BitString {
            fn $method(&mut self, rhs: &BitString) {
                *self = (&*self).$op(rhs);
            }
        }
    };
}

binop_assign!(BitAndAssign, bitand_assign, bitand);
binop_assign!(BitOrAssign, bitor_assign, bitor);
binop_assign!(BitXorAssign, bitxor_assign, bitxor);

impl Not for &BitString {
    type Output = BitString;

    fn not(self) -> BitString {
        self.complement()
    }
}

impl Not for BitString {
    type Output = BitString;

    fn not(self) -> BitString {
        self.complement()
    }
}

impl Shl<usize> for &BitString {
    type Output = BitString;

    fn shl(self, bits: usize) -> BitString {
        BitString::shl(self, bits)
    }
}

impl Shl<usize> for BitString {
    type Output = BitString;

    fn shl(self, bits: usize) -> BitString {
        BitString::shl(&self, bits)
    }
}

impl Shr<usize> for &BitString {
    type Output = BitString;

    fn shr(self, bits: usize) -> BitString {
        BitString::shr(self, bits)
    }
}

impl Shr<usize> for BitString {
    type Output = BitString;

    fn shr(self, bits: usize) -> BitString {
        BitString::shr(&self, bits)
    }
}

impl ShlAssign<usize> for BitString {
    fn shl_assign(&mut self, bits: usize) {
        *self = BitString::shl(self, bits);
    }
}

impl ShrAssign<usize> for BitString {
    fn shr_assign(&mut self, bits: usize) {
        *self = BitString::shr(self, bits);
    }
}

/// Two bit-strings are equal iff they agree on boundedness and on the
/// underlying integer value. Two bounded strings of different widths
/// holding the same value are equal; an unbounded string never equals a
/// bounded one.
impl PartialEq for BitString {
    fn eq(&self, other: &Self) -> bool {
        self.width.is_some() == other.width.is_some() && self.value == other.value
    }
}

impl Eq for BitString {}

impl Hash for BitString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.is_some().hash(state);
        self.value.hash(state);
    }
}

/// Ordering follows the integer values. Equal values with mismatched
/// boundedness compare as incomparable so that ordering stays consistent
/// with equality.
impl PartialOrd for BitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.cmp(&other.value) {
            Ordering::Equal if self.width.is_some() != other.width.is_some() => None,
            ord => Some(ord),
        }
    }
}

impl PartialEq<BigUint> for BitString {
    fn eq(&self, other: &BigUint) -> bool {
        &self.value == other
    }
}

impl PartialEq<u64> for BitString {
    fn eq(&self, other: &u64) -> bool {
        self.value == BigUint::from(*other)
    }
}

/// Value-level comparison against a digit string; text that does not
/// parse as binary digits simply compares unequal.
impl PartialEq<&str> for BitString {
    fn eq(&self, other: &&str) -> bool {
        matches!(BitSource::from(*other).into_uint(), Ok(v) if v == self.value)
    }
}

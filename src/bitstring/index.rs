use core::ops::{Index, RangeInclusive};

use num_bigint::BigUint;

use crate::error::{Error, Result};

use super::{ones, BitSource, BitString};

const SPAN_OVERFLOW: &str = "bit span overflows the address space";

impl BitString {
    fn check_index(&self, index: usize) -> Result<()> {
        if let Some(w) = self.width {
            if index >= w {
                return Err(Error::IndexOutOfRange { index, length: w });
            }
        }
        Ok(())
    }

    /// Read the bit at `index`. Bounded bit-strings reject indices at or
    /// past their width; unbounded ones read arbitrarily far past the
    /// significant length, where every bit is 0.
    pub fn bit(&self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        Ok(self.value.bit(index as u64) as u8)
    }

    /// Write `bit` (which must be exactly 0 or 1) at `index`.
    pub fn set_bit(&mut self, index: usize, bit: u8) -> Result<()> {
        self.check_index(index)?;
        if bit > 1 {
            return Err(Error::InvalidDigit(bit.to_string()));
        }
        self.value.set_bit(index as u64, bit == 1);
        Ok(())
    }

    /// Extract `count` bits starting at bit `start` as a new *bounded*
    /// bit-string of width `count`, preserving leading zeros.
    pub fn substring(&self, start: usize, count: usize) -> Result<BitString> {
        if count == 0 {
            return Err(Error::NegativeWidth);
        }
        let top = start
            .checked_add(count - 1)
            .ok_or(Error::BadArguments(SPAN_OVERFLOW))?;
        self.check_index(top)?;
        let value = (&self.value >> start) & ones(count);
        Ok(BitString {
            value,
            width: Some(count),
        })
    }

    /// Range form of [`substring`](BitString::substring). Endpoints are
    /// inclusive and order-insensitive: the numerically larger endpoint
    /// is always the more significant bit.
    pub fn slice(&self, range: RangeInclusive<usize>) -> Result<BitString> {
        let (lo, hi) = order_endpoints(&range);
        self.substring(lo, hi - lo + 1)
    }

    /// Write the low `count` bits of `src` into the span starting at
    /// `start`, the most significant of them landing at the top of the
    /// span. Returns the masked value actually written.
    pub fn set_substring(
        &mut self,
        start: usize,
        count: usize,
        src: impl Into<BitSource>,
    ) -> Result<BigUint> {
        if count == 0 {
            return Err(Error::NegativeWidth);
        }
        let top = start
            .checked_add(count - 1)
            .ok_or(Error::BadArguments(SPAN_OVERFLOW))?;
        self.check_index(top)?;
        let written = src.into().into_uint()? & ones(count);
        let current = (&self.value >> start) & ones(count);
        self.value -= current << start;
        self.value |= &written << start;
        Ok(written)
    }

    /// Range form of [`set_substring`](BitString::set_substring).
    pub fn set_slice(
        &mut self,
        range: RangeInclusive<usize>,
        src: impl Into<BitSource>,
    ) -> Result<BigUint> {
        let (lo, hi) = order_endpoints(&range);
        self.set_substring(lo, hi - lo + 1, src)
    }
}

fn order_endpoints(range: &RangeInclusive<usize>) -> (usize, usize) {
    let (a, b) = (*range.start(), *range.end());
    (a.min(b), a.max(b))
}

/// Panicking sugar for [`BitString::bit`], mirroring slice indexing.
impl Index<usize> for BitString {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        static BITS: [u8; 2] = [0, 1];
        match self.bit(index) {
            Ok(bit) => &BITS[bit as usize],
            Err(err) => panic!("{}", err),
        }
    }
}

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{Error, Result};

use super::{ones, BitString};

/// Selects which end of a bit-string an operation applies to. The high
/// end is the most significant; the low end is bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BitEnd {
    High,
    Low,
}

impl BitEnd {
    /// Parse an end selector from text, mapping failures onto the
    /// bit-string error taxonomy.
    pub fn parse(s: &str) -> Result<BitEnd> {
        s.parse()
            .map_err(|_| Error::InvalidDirection(s.to_owned()))
    }
}

impl BitString {
    /// Add `bits` bits at the chosen end, each set to `fill` (0 or 1).
    /// Growing at the low end shifts the existing value up and is always
    /// legal; growing at the high end needs a fixed width, since an
    /// unbounded bit-string has no high end to pin new bits to. Zero
    /// bits is a no-op copy.
    pub fn grow(&self, bits: usize, fill: u8, end: BitEnd) -> Result<BitString> {
        if fill > 1 {
            return Err(Error::InvalidDigit(fill.to_string()));
        }
        match (end, self.width) {
            (BitEnd::High, None) => Err(Error::UnboundedNotApplicable("high-end grow")),
            (BitEnd::High, Some(w)) => {
                if bits == 0 {
                    return Ok(self.clone());
                }
                let mut value = self.value.clone();
                if fill == 1 {
                    value |= ones(bits) << w;
                }
                Ok(BitString {
                    value,
                    width: Some(w + bits),
                })
            }
            (BitEnd::Low, _) => {
                if bits == 0 {
                    return Ok(self.clone());
                }
                let mut value = &self.value << bits;
                if fill == 1 {
                    value |= ones(bits);
                }
                Ok(BitString {
                    value,
                    width: self.width.map(|w| w + bits),
                })
            }
        }
    }

    /// In-place form of [`grow`](BitString::grow).
    pub fn grow_assign(&mut self, bits: usize, fill: u8, end: BitEnd) -> Result<()> {
        *self = self.grow(bits, fill, end)?;
        Ok(())
    }

    /// Remove `bits` bits from the chosen end. Shrinking at the low end
    /// divides the value by `2^bits` and works on any bit-string;
    /// shrinking at the high end needs a fixed width and masks the value
    /// down to what remains. A bounded bit-string cannot shrink to zero
    /// width or below.
    pub fn shrink(&self, bits: usize, end: BitEnd) -> Result<BitString> {
        if bits == 0 {
            return Ok(self.clone());
        }
        if let Some(w) = self.width {
            if bits >= w {
                return Err(Error::ShrinkTooLarge { bits, length: w });
            }
        }
        let width = self.width.map(|w| w - bits);
        let value = match end {
            BitEnd::Low => &self.value >> bits,
            BitEnd::High => {
                let w = match width {
                    Some(w) => w,
                    None => return Err(Error::UnboundedNotApplicable("high-end shrink")),
                };
                &self.value & ones(w)
            }
        };
        Ok(BitString { value, width })
    }

    /// In-place form of [`shrink`](BitString::shrink).
    pub fn shrink_assign(&mut self, bits: usize, end: BitEnd) -> Result<()> {
        *self = self.shrink(bits, end)?;
        Ok(())
    }

    /// Produce a *bounded* bit-string of exactly `new_width` bits by
    /// growing or shrinking at the high end from the current effective
    /// length. This is the one operation that turns an unbounded
    /// bit-string into a bounded one.
    pub fn resize(&self, new_width: usize) -> Result<BitString> {
        if new_width == 0 {
            return Err(Error::NegativeWidth);
        }
        let len = self.len();
        let mut bs = BitString {
            value: self.value.clone(),
            width: Some(len),
        };
        if new_width >= len {
            bs.grow_assign(new_width - len, 0, BitEnd::High)?;
        } else {
            bs.shrink_assign(len - new_width, BitEnd::High)?;
        }
        Ok(bs)
    }

    /// In-place form of [`resize`](BitString::resize); the receiver is
    /// bounded afterwards.
    pub fn resize_assign(&mut self, new_width: usize) -> Result<()> {
        *self = self.resize(new_width)?;
        Ok(())
    }

    /// Rotate a bounded bit-string. Positive `bits` rotates toward the
    /// low end (bits leave at bit 0 and re-enter at the top); negative
    /// rotates toward the high end. The magnitude is taken modulo the
    /// width, so any count is accepted.
    pub fn rotate(&self, bits: i64) -> Result<BitString> {
        let w = match self.width {
            Some(w) => w,
            None => return Err(Error::UnboundedNotApplicable("rotation")),
        };
        let n = (bits.unsigned_abs() % w as u64) as usize;
        if n == 0 {
            return Ok(self.clone());
        }
        let value = if bits > 0 {
            let residue = &self.value & ones(n);
            (&self.value >> n) | (residue << (w - n))
        } else {
            let residue = &self.value >> (w - n);
            ((&self.value & ones(w - n)) << n) | residue
        };
        Ok(BitString {
            value,
            width: Some(w),
        })
    }

    /// In-place form of [`rotate`](BitString::rotate).
    pub fn rotate_assign(&mut self, bits: i64) -> Result<()> {
        *self = self.rotate(bits)?;
        Ok(())
    }

    /// An integer with every bit of the effective length set.
    pub fn mask(&self) -> BigUint {
        ones(self.len())
    }

    /// An integer with `bits` set bits positioned at the chosen end of
    /// an effective-length-bit field.
    pub fn mask_bits(&self, bits: usize, end: BitEnd) -> Result<BigUint> {
        let len = self.len();
        if bits > len {
            return Err(Error::IndexOutOfRange {
                index: bits,
                length: len,
            });
        }
        Ok(match end {
            BitEnd::High => ones(bits) << (len - bits),
            BitEnd::Low => ones(bits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_parse_and_print() {
        assert_eq!(BitEnd::parse("high").unwrap(), BitEnd::High);
        assert_eq!(BitEnd::parse("low").unwrap(), BitEnd::Low);
        assert_eq!(BitEnd::High.to_string(), "high");
        assert_eq!(
            BitEnd::parse("sideways").unwrap_err(),
            Error::InvalidDirection("sideways".to_owned())
        );
    }
}

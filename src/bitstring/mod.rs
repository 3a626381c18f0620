mod convert;
mod index;
mod iter;
mod ops;
mod width;

pub use iter::Bits;
pub use width::BitEnd;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A sequence of binary digits backed by an arbitrary-precision integer.
///
/// Bit `i` (with bit 0 the least significant) is `(value >> i) & 1`. A
/// bit-string is either *bounded*, carrying a fixed positive width that
/// every operation is checked against and masked to, or *unbounded*, in
/// which case its width is derived from the significant bits of the
/// current value and leading zeros are insignificant.
///
/// Boundedness is fixed at construction. The one exception is
/// [`resize`](BitString::resize), which always produces a bounded result
/// and is the only way an unbounded bit-string becomes bounded; nothing
/// ever converts a bounded bit-string back.
#[derive(Clone, Serialize, Deserialize)]
pub struct BitString {
    value: BigUint,
    width: Option<usize>,
}

/// The closed set of representations a bit-string value can be built
/// from. Every constructor, binary operator, and range write funnels its
/// operand through [`BitSource::into_uint`].
#[derive(Debug, Clone)]
pub enum BitSource {
    /// Text consisting only of `'0'` and `'1'` characters, parsed base 2.
    Digits(String),
    /// Individual bit values, most significant first; each must be 0 or 1.
    Bits(Vec<u8>),
    /// An integer value, used directly.
    Uint(BigUint),
}

impl BitSource {
    /// Reduce the source to its integer value, validating digits along
    /// the way.
    pub fn into_uint(self) -> Result<BigUint> {
        match self {
            BitSource::Digits(s) => parse_digits(&s),
            BitSource::Bits(bits) => {
                let mut value = BigUint::zero();
                for &bit in &bits {
                    if bit > 1 {
                        return Err(Error::InvalidDigit(bit.to_string()));
                    }
                    value = (value << 1usize) | BigUint::from(bit);
                }
                Ok(value)
            }
            BitSource::Uint(value) => Ok(value),
        }
    }
}

fn parse_digits(s: &str) -> Result<BigUint> {
    if let Some(bad) = s.chars().find(|c| *c != '0' && *c != '1') {
        return Err(Error::InvalidDigit(bad.to_string()));
    }
    if s.is_empty() {
        return Ok(BigUint::zero());
    }
    // Only 0/1 characters remain, so the radix-2 parse cannot fail.
    BigUint::parse_bytes(s.as_bytes(), 2).ok_or_else(|| Error::InvalidDigit(s.to_owned()))
}

/// An integer with the low `bits` bits set.
pub(crate) fn ones(bits: usize) -> BigUint {
    (BigUint::one() << bits) - BigUint::one()
}

impl BitString {
    /// Create an unbounded bit-string from any accepted source.
    pub fn new(src: impl Into<BitSource>) -> Result<Self> {
        Ok(BitString {
            value: src.into().into_uint()?,
            width: None,
        })
    }

    /// Create a bounded bit-string of exactly `width` bits. The source
    /// value is masked to `width` bits; a zero width is rejected.
    pub fn bounded(src: impl Into<BitSource>, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::NegativeWidth);
        }
        let value = src.into().into_uint()? & ones(width);
        Ok(BitString {
            value,
            width: Some(width),
        })
    }

    /// Create a bounded bit-string of `width` bits where bit `i` is the
    /// low bit of `f(i)`.
    pub fn from_fn<F>(width: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> u64,
    {
        if width == 0 {
            return Err(Error::NegativeWidth);
        }
        let mut value = BigUint::zero();
        for i in 0..width {
            if f(i) & 1 == 1 {
                value.set_bit(i as u64, true);
            }
        }
        Ok(BitString {
            value,
            width: Some(width),
        })
    }

    pub(crate) fn with_value(&self, value: BigUint) -> BitString {
        BitString {
            value,
            width: self.width,
        }
    }

    /// Mask `raw` to the receiver's shape: bounded results are truncated
    /// to the fixed width, unbounded results are left as computed.
    pub(crate) fn apply_masked(&self, raw: BigUint) -> BitString {
        let value = match self.width {
            Some(w) => raw & ones(w),
            None => raw,
        };
        self.with_value(value)
    }

    /// Fixed width when bounded, otherwise the number of significant
    /// binary digits (a zero value still has length 1, like `"0"`).
    pub fn len(&self) -> usize {
        match self.width {
            Some(w) => w,
            None => self.value.bits().max(1) as usize,
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.width.is_some()
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// True iff the underlying value is zero, whatever the width.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The least significant bit.
    pub fn lsb(&self) -> u8 {
        self.value.bit(0) as u8
    }

    /// The most significant bit. Only meaningful with a fixed width.
    pub fn msb(&self) -> Result<u8> {
        match self.width {
            Some(w) => self.bit(w - 1),
            None => Err(Error::UnboundedNotApplicable("most significant bit")),
        }
    }

    /// A copy with every bit clear, keeping width and boundedness.
    pub fn clear(&self) -> BitString {
        self.with_value(BigUint::zero())
    }

    /// Clear every bit in place.
    pub fn clear_assign(&mut self) {
        self.value = BigUint::zero();
    }

    /// Replace the whole value at once, masked to the fixed width when
    /// bounded.
    pub fn set_value(&mut self, src: impl Into<BitSource>) -> Result<()> {
        let mut value = src.into().into_uint()?;
        if let Some(w) = self.width {
            value &= ones(w);
        }
        self.value = value;
        Ok(())
    }

    /// The full value as an integer. Never fails.
    pub fn to_uint(&self) -> BigUint {
        self.value.clone()
    }
}

impl Default for BitString {
    /// An unbounded bit-string with all bits clear.
    fn default() -> Self {
        BitString {
            value: BigUint::zero(),
            width: None,
        }
    }
}

impl From<&str> for BitSource {
    fn from(s: &str) -> Self {
        BitSource::Digits(s.to_owned())
    }
}

impl From<String> for BitSource {
    fn from(s: String) -> Self {
        BitSource::Digits(s)
    }
}

impl From<&[u8]> for BitSource {
    fn from(bits: &[u8]) -> Self {
        BitSource::Bits(bits.to_vec())
    }
}

impl From<Vec<u8>> for BitSource {
    fn from(bits: Vec<u8>) -> Self {
        BitSource::Bits(bits)
    }
}

impl<const N: usize> From<[u8; N]> for BitSource {
    fn from(bits: [u8; N]) -> Self {
        BitSource::Bits(bits.to_vec())
    }
}

impl From<BigUint> for BitSource {
    fn from(value: BigUint) -> Self {
        BitSource::Uint(value)
    }
}

impl From<&BigUint> for BitSource {
    fn from(value: &BigUint) -> Self {
        BitSource::Uint(value.clone())
    }
}

impl From<&BitString> for BitSource {
    fn from(bs: &BitString) -> Self {
        BitSource::Uint(bs.value.clone())
    }
}

impl From<BitString> for BitSource {
    fn from(bs: BitString) -> Self {
        BitSource::Uint(bs.value)
    }
}

macro_rules! uint_source {
    ($($t:ty),*) => {$(
        impl From<$t> for BitSource {
            fn from(value: $t) -> Self {
                BitSource::Uint(BigUint::from(value))
            }
        }
    )*};
}

uint_source!(u8, u16, u32, u64, u128, usize);

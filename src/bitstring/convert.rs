use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};

use super::BitString;

impl BitString {
    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Result<u64> {
        self.value.to_u64().ok_or(Error::NotConvertible)
    }
}

/// The canonical textual form: binary digits, zero-filled on the left to
/// the fixed width when bounded, bare significant digits otherwise (a
/// zero value prints as `"0"`).
impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.value.to_str_radix(2);
        match self.width {
            Some(w) => write!(f, "{:0>width$}", digits, width = w),
            None => f.write_str(&digits),
        }
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            Some(w) => write!(f, "BitString({}, width={})", self, w),
            None => write!(f, "BitString({}, unbounded)", self),
        }
    }
}

/// Parse an unbounded bit-string from binary digits.
impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BitString::new(s)
    }
}

impl From<BigUint> for BitString {
    fn from(value: BigUint) -> Self {
        BitString { value, width: None }
    }
}

impl From<BitString> for BigUint {
    fn from(bs: BitString) -> BigUint {
        bs.value
    }
}

macro_rules! from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for BitString {
            fn from(value: $t) -> Self {
                BitString {
                    value: BigUint::from(value),
                    width: None,
                }
            }
        }
    )*};
}

from_uint!(u8, u16, u32, u64, u128, usize);

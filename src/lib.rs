//! Bounded and unbounded bit-strings backed by arbitrary-precision
//! integers. Bits are addressable individually, as contiguous spans, or
//! as a whole value, with the usual bitwise operators on top.

pub mod bitstring;
pub mod error;

pub use bitstring::{BitEnd, BitSource, BitString, Bits};
pub use error::{Error, Result};

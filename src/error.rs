use core::fmt;

/// Everything that can go wrong while constructing or operating on a
/// bit-string. Validation always happens before any mutation, so a
/// returned error never leaves a value in a half-written state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value offered where binary digits are required contained
    /// something other than 0 or 1.
    InvalidDigit(String),
    /// A width or bit-count argument cannot be interpreted as an
    /// integer. Counts are statically typed here, so nothing in this
    /// crate raises it; the kind is kept so the taxonomy stays complete
    /// for callers matching on it.
    NotInteger,
    /// A width or bit count that must be strictly positive was zero.
    NegativeWidth,
    /// A bit index or span lies outside a bounded bit-string.
    IndexOutOfRange { index: usize, length: usize },
    /// An end selector could not be parsed as `high` or `low`.
    InvalidDirection(String),
    /// The operation needs a fixed width but the bit-string is unbounded.
    UnboundedNotApplicable(&'static str),
    /// Shrinking by this many bits would leave no width at all.
    ShrinkTooLarge { bits: usize, length: usize },
    /// Conflicting or malformed arguments, such as a bit span that
    /// overflows the address space.
    BadArguments(&'static str),
    /// The value cannot be reduced to the requested integer form.
    NotConvertible,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDigit(what) => {
                write!(f, "value '{what}' contains invalid binary digits")
            }
            Error::NotInteger => write!(f, "bit count must be an integer"),
            Error::NegativeWidth => write!(f, "bit count must be greater than 0"),
            Error::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range for width {length}")
            }
            Error::InvalidDirection(what) => {
                write!(f, "invalid direction '{what}' for operation")
            }
            Error::UnboundedNotApplicable(op) => {
                write!(f, "{op} only applies to bounded bit-strings")
            }
            Error::ShrinkTooLarge { bits, length } => {
                write!(f, "shrink count {bits} exceeds bit-string width {length}")
            }
            Error::BadArguments(what) => write!(f, "{what}"),
            Error::NotConvertible => {
                write!(f, "value cannot be reduced to an integer of the requested size")
            }
        }
    }
}

impl std::error::Error for Error {}

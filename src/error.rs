//! Errors reported by division and radix conversion.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Alias for a `Result` with this crate's [`Error`].
pub type Result<T> = result::Result<T, Error>;

/// The errors that can arise from [`Uint`](crate::Uint) operations.
///
/// Every error is synchronous and leaves the operands untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// Division or modulo with a divisor of zero.
    DivideByZero,

    /// Radix outside the supported set (2 through 36, and 256 for raw
    /// bytes).
    UnsupportedBase(u32),

    /// A byte in the input is not a digit of the requested radix.
    InvalidDigit { byte: u8, base: u32 },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::DivideByZero => f.write_str("division or modulus by zero"),
            Error::UnsupportedBase(base) => {
                write!(f, "cannot convert from base {}", base)
            }
            Error::InvalidDigit { byte, base } => {
                write!(f, "not a digit in base {}: {:?}", base, byte as char)
            }
        }
    }
}

impl error::Error for Error {}

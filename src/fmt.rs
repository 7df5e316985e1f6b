//! Formatting and parsing trait impls, all thin wrappers over the radix
//! conversions.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::uint::Uint;

impl Uint {
    fn pad_digits(&self, f: &mut fmt::Formatter, base: u32, prefix: &str) -> fmt::Result {
        let digits: String = self.format_digits(base).into_iter().map(char::from).collect();
        f.pad_integral(true, prefix, &digits)
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.pad_digits(f, 10, "")
    }
}

impl fmt::Binary for Uint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.pad_digits(f, 2, "0b")
    }
}

impl fmt::Octal for Uint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.pad_digits(f, 8, "0o")
    }
}

impl fmt::LowerHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.pad_digits(f, 16, "0x")
    }
}

impl fmt::UpperHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = self.format_digits(16);
        digits.make_ascii_uppercase();
        let digits: String = digits.into_iter().map(char::from).collect();
        f.pad_integral(true, "0x", &digits)
    }
}

impl FromStr for Uint {
    type Err = Error;

    /// Parses decimal digits; the empty string parses to zero.
    fn from_str(s: &str) -> Result<Uint, Error> {
        Uint::from_radix(s.as_bytes(), 10)
    }
}

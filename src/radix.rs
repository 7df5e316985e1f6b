//! Conversion to and from textual digits (bases 2-36) and raw bytes
//! (base 256).
//!
//! Digits are big-endian in the byte string, lowercase `0-9a-z` on output;
//! parsing also accepts uppercase. Power-of-two bases convert by bit
//! manipulation alone; other bases go through multiply-add (parse) and
//! repeated single-limb divmod (format). Base 256 is the raw big-endian
//! byte representation with leading zeros stripped, except that zero
//! formats as a single zero byte.

use crate::div::single_divmod;
use crate::error::{Error, Result};
use crate::uint::Uint;

/// Output digit alphabet.
static DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Digit value per input byte; 0xff marks bytes outside `0-9a-zA-Z`.
static DIGIT_ORD: [u8; 256] = {
    let mut table = [0xffu8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 26 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

/// Bits per digit for power-of-two bases, indexed by base; 0 otherwise.
static BASE_BITS: [u8; 37] = {
    let mut table = [0u8; 37];
    table[2] = 1;
    table[4] = 2;
    table[8] = 3;
    table[16] = 4;
    table[32] = 5;
    table
};

/// `ceil(64 / log2(base))` digits per limb, indexed by base: an upper
/// bound used to preallocate formatted output.
static BASE_SIZE: [u8; 37] = [
    0, 0, 64, 41, 32, 28, 25, 23, 22, 21, 20, 19, 18, 18, 17, 17, 16, 16, 16,
    16, 15, 15, 15, 15, 14, 14, 14, 14, 14, 14, 14, 13, 13, 13, 13, 13, 13,
];

impl Uint {
    /// Parses big-endian digits in `base` (2-36), or raw big-endian bytes
    /// when `base` is 256. Empty input parses to zero.
    pub fn from_radix(bytes: &[u8], base: u32) -> Result<Uint> {
        match base {
            2..=36 => {
                let bits = BASE_BITS[base as usize];
                let mut out = Uint::ZERO;
                if bits != 0 {
                    for &byte in bytes {
                        let d = DIGIT_ORD[byte as usize];
                        if u32::from(d) >= base {
                            return Err(Error::InvalidDigit { byte, base });
                        }
                        out.shl_assign_bits(u64::from(bits));
                        out.or_low_limb(u64::from(d));
                    }
                } else {
                    let scale = Uint::from(u64::from(base));
                    for &byte in bytes {
                        let d = DIGIT_ORD[byte as usize];
                        if u32::from(d) >= base {
                            return Err(Error::InvalidDigit { byte, base });
                        }
                        out = &out * &scale;
                        out.add_shifted(&Uint::from(u64::from(d)), 0);
                    }
                }
                Ok(out)
            }
            256 => {
                let mut raw = Vec::with_capacity(bytes.len().div_ceil(8));
                for chunk in bytes.rchunks(8) {
                    let mut limb = [0u8; 8];
                    limb[8 - chunk.len()..].copy_from_slice(chunk);
                    raw.push(u64::from_be_bytes(limb));
                }
                Ok(Uint::from_raw(raw))
            }
            _ => Err(Error::UnsupportedBase(base)),
        }
    }

    /// Formats as big-endian digit bytes in `base` (2-36), or as the raw
    /// big-endian byte representation when `base` is 256.
    pub fn to_radix(&self, base: u32) -> Result<Vec<u8>> {
        match base {
            2..=36 => Ok(self.format_digits(base)),
            256 => {
                if self.is_zero() {
                    return Ok(vec![0]);
                }
                let limbs = self.limbs.limbs();
                let mut out = Vec::with_capacity(limbs.len() * 8);
                for &limb in limbs.iter().rev() {
                    out.extend_from_slice(&limb.to_be_bytes());
                }
                let used = out.iter().position(|&b| b != 0).unwrap_or(0);
                out.drain(..used);
                Ok(out)
            }
            _ => Err(Error::UnsupportedBase(base)),
        }
    }

    /// Formats as a string of digits in `base` (2-36 only).
    pub fn to_str_radix(&self, base: u32) -> Result<String> {
        match base {
            2..=36 => Ok(self.format_digits(base).into_iter().map(char::from).collect()),
            _ => Err(Error::UnsupportedBase(base)),
        }
    }

    /// Digit extraction for a validated base in 2-36, least significant
    /// digit first, reversed before returning.
    pub(crate) fn format_digits(&self, base: u32) -> Vec<u8> {
        if self.is_zero() {
            return vec![b'0'];
        }

        let mut out =
            Vec::with_capacity(self.limb_count() * usize::from(BASE_SIZE[base as usize]));
        let bits = u32::from(BASE_BITS[base as usize]);

        if bits != 0 {
            // Slide a bit window across the limbs; digits of power-of-two
            // bases straddle limb boundaries by at most `bits - 1` bits.
            let mask = u64::from(base) - 1;
            let mut window = 0u128;
            let mut window_bits = 0u32;
            for &limb in self.limbs.limbs() {
                window |= (limb as u128) << window_bits;
                window_bits += 64;
                while window_bits >= bits {
                    out.push(DIGITS[(window as u64 & mask) as usize]);
                    window >>= bits;
                    window_bits -= bits;
                }
            }
            while window != 0 {
                out.push(DIGITS[(window as u64 & mask) as usize]);
                window >>= bits;
            }
            while out.last() == Some(&b'0') {
                out.pop();
            }
        } else {
            let mut rest = self.clone();
            loop {
                let (next, digit) = single_divmod(&rest, u64::from(base));
                out.push(DIGITS[digit as usize]);
                rest = next;
                if rest.is_zero() {
                    break;
                }
            }
        }

        out.reverse();
        out
    }

    /// ORs a value into the low limb; used by the power-of-two parse path.
    pub(crate) fn or_low_limb(&mut self, value: u64) {
        if value == 0 {
            return;
        }
        if self.limbs.is_empty() {
            self.limbs.push(value);
        } else {
            self.limbs.limbs_mut()[0] |= value;
        }
    }
}

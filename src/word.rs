//! Single-word building blocks for the multi-limb algorithms.
//!
//! Everything here is a pure function over `u64`. The `u128` casts and
//! `overflowing_add`/`overflowing_sub` chains are patterns LLVM recognizes:
//! - x86_64: `mul`/`mulx` for the widening multiplies, `adc`/`sbb` chains
//! - AArch64: `umulh`, `adds`/`adcs`, `subs`/`sbcs`
//!
//! No inline assembly needed.

/// Number of significant bits in `x`: index of the highest set bit plus one,
/// or 0 when `x` is 0.
#[inline]
pub(crate) fn bit_width(x: u64) -> u32 {
    64 - x.leading_zeros()
}

/// Full 64x64 -> 128 multiplication, returned as `(high, low)`.
#[inline]
pub(crate) fn widening_mul(x: u64, y: u64) -> (u64, u64) {
    let p = (x as u128) * (y as u128);
    ((p >> 64) as u64, p as u64)
}

/// `x * y + acc + carry`, returned as `(high, low)`.
///
/// The sum cannot overflow 128 bits: the product is at most
/// `(2^64 - 1)^2` and the two addends contribute at most `2 * (2^64 - 1)`.
#[inline]
pub(crate) fn muladd(x: u64, y: u64, acc: u64, carry: u64) -> (u64, u64) {
    let p = (x as u128) * (y as u128) + (acc as u128) + (carry as u128);
    ((p >> 64) as u64, p as u64)
}

/// `x + y + carry_in`, returned as `(sum, carry_out)`.
#[inline]
pub(crate) fn add_carry(x: u64, y: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = x.overflowing_add(y);
    let (sum, c2) = sum.overflowing_add(carry as u64);
    (sum, c1 | c2)
}

/// `x - y - borrow_in`, returned as `(difference, borrow_out)`.
#[inline]
pub(crate) fn sub_borrow(x: u64, y: u64, borrow: bool) -> (u64, bool) {
    let (diff, b1) = x.overflowing_sub(y);
    let (diff, b2) = diff.overflowing_sub(borrow as u64);
    (diff, b1 | b2)
}

/// Divides the 128-bit value `hi * 2^64 + lo` by `d`, returning
/// `(quotient, remainder)`.
///
/// Requires `hi < d` so the quotient fits in one limb; every caller
/// maintains this by feeding the previous remainder back in as `hi`.
#[inline]
pub(crate) fn div_wide(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(hi < d);
    let n = ((hi as u128) << 64) | (lo as u128);
    ((n / (d as u128)) as u64, (n % (d as u128)) as u64)
}

//! Multi-precision multiplication.
//!
//! Strategy, after the zero/one short-circuits:
//! - at or below [`KARATSUBA_CUTOFF`] limbs on the shorter operand,
//!   schoolbook long multiplication wins;
//! - when the longer operand is at least twice the shorter, the longer one
//!   is sliced into chunks the size of the shorter and each slice is
//!   multiplied and accumulated at its limb offset (splitting down the
//!   middle of such lopsided inputs would degenerate);
//! - otherwise balanced Karatsuba.

use crate::limbs::LimbBuf;
use crate::uint::Uint;
use crate::word::muladd;

/// Limb count at or below which long multiplication beats Karatsuba.
/// Empirical crossover; not part of the contract.
pub(crate) const KARATSUBA_CUTOFF: usize = 70;

/// Entry point used by the `Mul` operators.
pub(crate) fn mult(lhs: &Uint, rhs: &Uint) -> Uint {
    // First try saving some calculations:
    if lhs.is_zero() || rhs.is_zero() {
        return Uint::ZERO;
    }
    if lhs.limb_count() == 1 && lhs.limb(0) == 1 {
        return rhs.clone();
    }
    if rhs.limb_count() == 1 && rhs.limb(0) == 1 {
        return lhs.clone();
    }

    karatsuba_mult(lhs, rhs, KARATSUBA_CUTOFF)
}

/// Schoolbook multiplication: one muladd stream per non-zero limb of the
/// shorter operand.
fn long_mult(lhs: &Uint, rhs: &Uint) -> Uint {
    if lhs.limb_count() > rhs.limb_count() {
        // rhs should be the largest:
        return long_mult(rhs, lhs);
    }

    let rhs_limbs = rhs.limbs.limbs();
    let mut result = LimbBuf::with_len(lhs.limb_count() + rhs.limb_count());
    let mut highest = 0;

    for (i, &l) in lhs.limbs.limbs().iter().enumerate() {
        if l == 0 {
            continue;
        }
        let out = result.limbs_mut();
        let mut carry = 0u64;
        for (j, &r) in rhs_limbs.iter().enumerate() {
            let (hi, lo) = muladd(r, l, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        let mut end = i + rhs_limbs.len();
        if carry != 0 {
            out[end] = carry;
            end += 1;
        }
        highest = highest.max(end);
    }

    result.truncate(highest);
    result.trim();
    Uint { limbs: result }
}

/// Splits `num` at limb `at` into `(low, high)`; `high` is empty when the
/// value has no limbs past the split point.
fn split(num: &Uint, at: usize) -> (Uint, Uint) {
    let limbs = num.limbs.limbs();
    let at = at.min(limbs.len());
    (Uint::from_raw(limbs[..at].to_vec()), Uint::from_raw(limbs[at..].to_vec()))
}

/// Karatsuba multiplication.
///
/// ```text
///                  A      B
///               x  C      D
///     ---------------------
///                 AD     BD
///       AC        BC
///     ---------------------
///       AC    AD + BC    BD
///
///   AD + BC = (A + B)(C + D) - AC - BD
/// ```
///
/// Three recursive products instead of four; the pieces are joined by
/// placing BD low, AC at `2*shift` limbs, and adding the middle term at
/// `shift` limbs.
fn karatsuba_mult(lhs: &Uint, rhs: &Uint, cutoff: usize) -> Uint {
    if lhs.limb_count() > rhs.limb_count() {
        // rhs should be the largest:
        return karatsuba_mult(rhs, lhs, cutoff);
    }

    if lhs.limb_count() <= cutoff {
        return long_mult(lhs, rhs);
    }

    // If lhs is too small compared to rhs, splitting on rhs gives a
    // degenerate case in which Karatsuba may be much less efficient than
    // long multiplication.
    if 2 * lhs.limb_count() <= rhs.limb_count() {
        return lopsided_mult(lhs, rhs, cutoff);
    }

    // Split point near the middle of the largest (rhs).
    let shift = rhs.limb_count() >> 1;

    let (b, a) = split(lhs, shift);
    let (d, c) = split(rhs, shift);

    let ac = karatsuba_mult(&a, &c, cutoff);
    let bd = karatsuba_mult(&b, &d, cutoff);

    let mut mid = karatsuba_mult(&(&a + &b), &(&c + &d), cutoff);
    mid.sub_shifted(&ac, 0);
    mid.sub_shifted(&bd, 0);

    // Join AC and BD (they cannot overlap), then add the middle term:
    let mut out = bd;
    out.limbs.resize(shift * 2, 0);
    out.limbs.extend_from_slice(ac.limbs.limbs());
    out.add_shifted(&mid, shift);
    out.limbs.trim();
    out
}

/// Lopsided case: view `rhs` as a sequence of `lhs`-sized slices and
/// multiply them by `lhs` one at a time, accumulating at each slice's
/// offset. All-zero slices contribute nothing and are skipped.
fn lopsided_mult(lhs: &Uint, rhs: &Uint, cutoff: usize) -> Uint {
    let mut result = Uint::ZERO;
    let mut shift = 0;

    for slice in rhs.limbs.limbs().chunks(lhs.limb_count()) {
        let piece = Uint::from_raw(slice.to_vec());
        if !piece.is_zero() {
            let product = karatsuba_mult(lhs, &piece, cutoff);
            result.add_shifted(&product, shift);
        }
        shift += slice.len();
    }

    result
}

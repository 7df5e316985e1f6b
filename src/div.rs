//! Multi-precision division.
//!
//! `divmod` dispatches in order of decreasing cheapness:
//!
//! 1. zero divisor fails;
//! 2. divisor one, equal operands, and dividend-smaller-than-divisor all
//!    short-circuit without computing anything;
//! 3. two single-limb operands use the hardware 64-bit divide;
//! 4. a single-limb divisor runs one 128/64 divide per dividend limb,
//!    feeding the remainder back in from the top;
//! 5. everything else is Knuth's Algorithm D (TAOCP vol. 2, 4.3.1):
//!    normalise so the divisor's top bit is set, estimate each quotient
//!    limb from the top two dividend limbs, correct the estimate by at
//!    most two decrements, multiply-subtract, and add back on the rare
//!    overshoot.

use crate::error::{Error, Result};
use crate::limbs::LimbBuf;
use crate::uint::Uint;
use crate::word::{add_carry, bit_width, div_wide, muladd, sub_borrow, widening_mul};

impl Uint {
    /// Returns `(self / rhs, self % rhs)`.
    ///
    /// Fails with [`Error::DivideByZero`] when `rhs` is zero; neither
    /// operand is mutated on failure.
    pub fn divmod(&self, rhs: &Uint) -> Result<(Uint, Uint)> {
        // First try saving some calculations:
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        if rhs.limb_count() == 1 && rhs.limb(0) == 1 {
            return Ok((self.clone(), Uint::ZERO));
        }
        match self.cmp(rhs) {
            std::cmp::Ordering::Equal => return Ok((Uint::one(), Uint::ZERO)),
            std::cmp::Ordering::Less => return Ok((Uint::ZERO, self.clone())),
            std::cmp::Ordering::Greater => {}
        }
        // rhs < self from here on.
        if self.limb_count() == 1 {
            let (a, b) = (self.limb(0), rhs.limb(0));
            return Ok((Uint::from(a / b), Uint::from(a % b)));
        }
        if rhs.limb_count() == 1 {
            let (q, r) = single_divmod(self, rhs.limb(0));
            return Ok((q, Uint::from(r)));
        }
        Ok(knuth_divmod(self, rhs))
    }
}

/// Division by one limb: walk the dividend from the top, dividing the
/// running remainder paired with each limb.
pub(crate) fn single_divmod(lhs: &Uint, d: u64) -> (Uint, u64) {
    let limbs = lhs.limbs.limbs();
    let mut q = LimbBuf::with_len(limbs.len());
    let mut r = 0u64;
    {
        let out = q.limbs_mut();
        for i in (0..limbs.len()).rev() {
            let (qi, ri) = div_wide(r, limbs[i], d);
            out[i] = qi;
            r = ri;
        }
    }
    q.trim();
    (Uint { limbs: q }, r)
}

/// Knuth's Algorithm D. Requires `lhs >= rhs` and a divisor of at least
/// two limbs.
fn knuth_divmod(lhs: &Uint, rhs: &Uint) -> (Uint, Uint) {
    let mut v = lhs.clone();
    let mut w = rhs.clone();

    let n = w.limb_count();
    debug_assert!(v.limb_count() >= n && n >= 2);

    // D1. Normalise: shift both operands left so the divisor's top limb
    // has bit 63 set. The quotient is unchanged; the remainder is shifted
    // back at the end.
    let d = u64::from(64 - bit_width(w.limb(n - 1)));
    v.shl_assign_bits(d);
    w.shl_assign_bits(d);

    // Guarantee v's top limb is strictly below w's so every window
    // estimate fits one limb; the extra zero is the window sentinel.
    if v.limb(v.limb_count() - 1) >= w.limb(n - 1) {
        v.limbs.push(0);
    }
    let m = v.limb_count() - n;
    v.limbs.push(0);

    let mut q = LimbBuf::with_len(m + 1);

    let wm1 = w.limb(n - 1);
    let wm2 = w.limb(n - 2);

    {
        let vs = v.limbs.limbs_mut();
        let ws = w.limbs.limbs();
        let qs = q.limbs_mut();

        // D2-D7. One quotient limb per window, top window first.
        for k in (0..=m).rev() {
            // D3. Estimate the quotient limb from the top two window
            // limbs, then lower it (at most twice) while the next divisor
            // limb would overdraw the window.
            let numer = ((vs[k + n] as u128) << 64) | (vs[k + n - 1] as u128);
            let mut qhat = if vs[k + n] >= wm1 {
                u64::MAX
            } else {
                (numer / (wm1 as u128)) as u64
            };
            loop {
                let rhat = numer.wrapping_sub((qhat as u128) * (wm1 as u128));
                if rhat > u64::MAX as u128 {
                    break;
                }
                // Compare qhat * w[n-2] against rhat:v[k+n-2], both as
                // (high, low) pairs.
                if widening_mul(qhat, wm2) <= (rhat as u64, vs[k + n - 2]) {
                    break;
                }
                qhat -= 1;
            }

            // D4. Subtract qhat * w from the window.
            let mut mul_carry = 0u64;
            let mut borrow = false;
            for i in 0..n {
                let (hi, lo) = muladd(ws[i], qhat, 0, mul_carry);
                mul_carry = hi;
                let (diff, b) = sub_borrow(vs[k + i], lo, borrow);
                vs[k + i] = diff;
                borrow = b;
            }
            let (diff, b) = sub_borrow(vs[k + n], mul_carry, borrow);
            vs[k + n] = diff;

            if b {
                // D6. qhat was one too large (rare): undo one subtraction
                // of w.
                qhat -= 1;
                let mut carry = false;
                for i in 0..n {
                    let (sum, c) = add_carry(vs[k + i], ws[i], carry);
                    vs[k + i] = sum;
                    carry = c;
                }
                let (sum, _) = add_carry(vs[k + n], 0, carry);
                vs[k + n] = sum;
            }

            qs[k] = qhat;
        }
    }

    // D8. What is left of v is the shifted remainder.
    v.limbs.truncate(n);
    v.shr_assign_bits(d);
    v.limbs.trim();

    q.trim();
    (Uint { limbs: q }, v)
}

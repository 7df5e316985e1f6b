//! Bitwise operations and shifts.
//!
//! AND truncates to the shorter operand, OR and XOR grow to the longer.
//! Inversion is taken within the value's own bit length: the complement
//! over an unbounded domain would be infinite, so only the significant
//! bits flip. Zero is treated as one bit wide for inversion, so `!0 == 1`.

use crate::uint::Uint;
use crate::word::bit_width;

impl Uint {
    pub(crate) fn and_assign(&mut self, rhs: &Uint) {
        if self.limbs.len() > rhs.limbs.len() {
            self.limbs.truncate(rhs.limbs.len());
        }
        for (limb, &r) in self.limbs.limbs_mut().iter_mut().zip(rhs.limbs.limbs()) {
            *limb &= r;
        }
        self.limbs.trim();
    }

    pub(crate) fn or_assign(&mut self, rhs: &Uint) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        for (limb, &r) in self.limbs.limbs_mut().iter_mut().zip(rhs.limbs.limbs()) {
            *limb |= r;
        }
        self.limbs.trim();
    }

    pub(crate) fn xor_assign(&mut self, rhs: &Uint) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        for (limb, &r) in self.limbs.limbs_mut().iter_mut().zip(rhs.limbs.limbs()) {
            *limb ^= r;
        }
        self.limbs.trim();
    }

    /// Flips every bit up to and including the top significant bit.
    ///
    /// Zero counts as one bit wide here, so inverting zero yields one.
    pub(crate) fn invert(&mut self) {
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        let top = self.limbs.limbs()[self.limbs.len() - 1];
        let width =
            (self.limbs.len() as u64 - 1) * 64 + u64::from(bit_width(top).max(1));
        for limb in self.limbs.limbs_mut() {
            *limb = !*limb;
        }
        self.limbs.trim_masked(width);
    }

    /// Shifts left by `n` bits in place.
    ///
    /// `n = 64*q + r`: the `r` part carries bits across limbs and may
    /// append a new top limb; the `q` part prepends zero limbs through the
    /// buffer's low-end prefix.
    pub(crate) fn shl_assign_bits(&mut self, n: u64) {
        if n == 0 || self.is_zero() {
            return;
        }
        let q = (n / 64) as usize;
        let r = n % 64;
        if r != 0 {
            let mut carried = 0u64;
            for limb in self.limbs.limbs_mut() {
                let v = (*limb << r) | carried;
                carried = *limb >> (64 - r);
                *limb = v;
            }
            if carried != 0 {
                self.limbs.push(carried);
            }
        }
        if q > 0 {
            self.limbs.prepend_zeros(q);
        }
    }

    /// Shifts right by `n` bits in place; `n` at or beyond the value's
    /// width clears it.
    pub(crate) fn shr_assign_bits(&mut self, n: u64) {
        if n >= self.limbs.len() as u64 * 64 {
            self.limbs.clear();
            return;
        }
        if n == 0 {
            return;
        }
        let q = (n / 64) as usize;
        let r = n % 64;
        if q > 0 {
            self.limbs.drop_low(q);
        }
        if r != 0 {
            let mut carried = 0u64;
            for limb in self.limbs.limbs_mut().iter_mut().rev() {
                let v = (*limb >> r) | carried;
                carried = *limb << (64 - r);
                *limb = v;
            }
            self.limbs.trim();
        }
    }
}

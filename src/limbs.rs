//! Growable little-endian limb buffer.
//!
//! The buffer keeps an optional scratch prefix of `pad` physical limbs at
//! the low end which are logically absent: dropping low limbs (right shift
//! by a multiple of 64) just advances `pad`, and inserting low zero limbs
//! (left shift by a multiple of 64) fills prefix slots instead of shifting
//! the whole vector. When a prepend does have to reallocate, all of the new
//! slack goes to the low end so the next prepend is free again.
//!
//! Every accessor works on the logical limbs; the prefix never escapes.

/// Growth factor 1.5, applied when a push or prepend exhausts capacity.
const GROWTH_NUM: usize = 3;
const GROWTH_DEN: usize = 2;

#[derive(Debug, Clone, Default)]
pub(crate) struct LimbBuf {
    raw: Vec<u64>,
    pad: usize,
}

impl LimbBuf {
    pub(crate) const EMPTY: LimbBuf = LimbBuf { raw: Vec::new(), pad: 0 };

    pub(crate) fn with_len(len: usize) -> Self {
        LimbBuf { raw: vec![0; len], pad: 0 }
    }

    pub(crate) fn from_raw(raw: Vec<u64>) -> Self {
        let mut buf = LimbBuf { raw, pad: 0 };
        buf.trim();
        buf
    }

    /// Logical limb count.
    pub(crate) fn len(&self) -> usize {
        self.raw.len() - self.pad
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.raw.len() == self.pad
    }

    pub(crate) fn limbs(&self) -> &[u64] {
        &self.raw[self.pad..]
    }

    pub(crate) fn limbs_mut(&mut self) -> &mut [u64] {
        &mut self.raw[self.pad..]
    }

    /// Ensures capacity for `need` limbs, growing by 1.5x past the current
    /// capacity. Returns the capacity actually available.
    fn grow(&mut self, need: usize) -> usize {
        let cap = self.raw.capacity();
        if need >= cap {
            let target = need * GROWTH_NUM / GROWTH_DEN;
            self.raw.reserve(target - self.raw.len());
        }
        self.raw.capacity()
    }

    /// Appends a limb at the high end.
    pub(crate) fn push(&mut self, limb: u64) {
        self.grow(self.raw.len() + 1);
        self.raw.push(limb);
    }

    /// Appends limbs at the high end.
    pub(crate) fn extend_from_slice(&mut self, limbs: &[u64]) {
        self.grow(self.raw.len() + limbs.len());
        self.raw.extend_from_slice(limbs);
    }

    /// Inserts `count` zero limbs at the low end.
    ///
    /// Consumes prefix slots first; if those run out the buffer is rebuilt
    /// with the whole new slack at the low end, so the leftover becomes the
    /// new prefix.
    pub(crate) fn prepend_zeros(&mut self, mut count: usize) {
        let take = count.min(self.pad);
        if take > 0 {
            let start = self.pad - take;
            self.raw[start..self.pad].fill(0);
            self.pad -= take;
            count -= take;
        }
        if count > 0 {
            // Prefix exhausted: pad is 0 here.
            let len = self.raw.len();
            let cap = self.grow(len + count);
            let slack = cap - len;
            let mut rebuilt = Vec::with_capacity(cap);
            rebuilt.resize(slack, 0);
            rebuilt.extend_from_slice(&self.raw);
            self.raw = rebuilt;
            self.pad = slack - count;
        }
    }

    /// Drops `count` limbs from the low end by advancing the prefix.
    pub(crate) fn drop_low(&mut self, count: usize) {
        debug_assert!(count <= self.len());
        self.pad += count;
    }

    /// Resizes the logical limb count, filling new high limbs with `fill`.
    pub(crate) fn resize(&mut self, len: usize, fill: u64) {
        self.raw.resize(self.pad + len, fill);
    }

    /// Keeps only the low `len` logical limbs.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.raw.truncate(self.pad + len);
    }

    pub(crate) fn clear(&mut self) {
        self.raw.clear();
        self.pad = 0;
    }

    /// Drops trailing zero limbs so the top limb, if any, is non-zero.
    pub(crate) fn trim(&mut self) {
        while self.raw.len() > self.pad && self.raw.last() == Some(&0) {
            self.raw.pop();
        }
    }

    /// Masks the top limb to `bits % 64` bits (no mask when the count is a
    /// multiple of 64), then trims.
    pub(crate) fn trim_masked(&mut self, bits: u64) {
        let m = bits & 63;
        if m != 0 {
            if let Some(top) = self.limbs_mut().last_mut() {
                *top &= (1u64 << m) - 1;
            }
        }
        self.trim();
    }
}

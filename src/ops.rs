//! Operator overloads.
//!
//! The in-place assignment forms are the primitives; the pure forms reuse
//! the left operand's buffer when it is owned and clone it when borrowed.
//! `/` and `%` panic on a zero divisor like the built-in integers do;
//! fallible callers use [`Uint::divmod`] instead.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
    BitXorAssign, Div, DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl,
    ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::mul::mult;
use crate::uint::Uint;

// ============================================================================
// Arithmetic and bitwise binary operators
// ============================================================================

macro_rules! forward_binop {
    ($Trait:ident, $method:ident, $TraitAssign:ident, $method_assign:ident, $apply:expr) => {
        impl $TraitAssign<&Uint> for Uint {
            fn $method_assign(&mut self, rhs: &Uint) {
                let apply: fn(&mut Uint, &Uint) = $apply;
                apply(self, rhs);
            }
        }

        impl $TraitAssign<Uint> for Uint {
            fn $method_assign(&mut self, rhs: Uint) {
                self.$method_assign(&rhs);
            }
        }

        impl $Trait<&Uint> for Uint {
            type Output = Uint;

            fn $method(mut self, rhs: &Uint) -> Uint {
                self.$method_assign(rhs);
                self
            }
        }

        impl $Trait<Uint> for Uint {
            type Output = Uint;

            fn $method(mut self, rhs: Uint) -> Uint {
                self.$method_assign(&rhs);
                self
            }
        }

        impl $Trait<&Uint> for &Uint {
            type Output = Uint;

            fn $method(self, rhs: &Uint) -> Uint {
                self.clone().$method(rhs)
            }
        }

        impl $Trait<Uint> for &Uint {
            type Output = Uint;

            fn $method(self, rhs: Uint) -> Uint {
                self.clone().$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, |lhs, rhs| lhs.add_shifted(rhs, 0));
forward_binop!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| lhs.sub_shifted(rhs, 0));
forward_binop!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| *lhs = mult(lhs, rhs));
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, Uint::and_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, Uint::or_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, Uint::xor_assign);
forward_binop!(Div, div, DivAssign, div_assign, |lhs, rhs| {
    let (q, _) = lhs.divmod(rhs).expect("division by zero");
    *lhs = q;
});
forward_binop!(Rem, rem, RemAssign, rem_assign, |lhs, rhs| {
    let (_, r) = lhs.divmod(rhs).expect("modulus by zero");
    *lhs = r;
});

// ============================================================================
// Negation (bitwise)
// ============================================================================

impl Not for Uint {
    type Output = Uint;

    /// Complement within the value's own bit length; zero counts as one
    /// bit wide, so `!Uint::ZERO == Uint::one()`.
    fn not(mut self) -> Uint {
        self.invert();
        self
    }
}

impl Not for &Uint {
    type Output = Uint;

    fn not(self) -> Uint {
        !self.clone()
    }
}

// ============================================================================
// Shifts
// ============================================================================

macro_rules! forward_shift_scalar {
    ($($t:ty),*) => {$(
        impl ShlAssign<$t> for Uint {
            fn shl_assign(&mut self, n: $t) {
                self.shl_assign_bits(n as u64);
            }
        }

        impl ShrAssign<$t> for Uint {
            fn shr_assign(&mut self, n: $t) {
                self.shr_assign_bits(n as u64);
            }
        }

        impl Shl<$t> for Uint {
            type Output = Uint;

            fn shl(mut self, n: $t) -> Uint {
                self <<= n;
                self
            }
        }

        impl Shl<$t> for &Uint {
            type Output = Uint;

            fn shl(self, n: $t) -> Uint {
                self.clone() << n
            }
        }

        impl Shr<$t> for Uint {
            type Output = Uint;

            fn shr(mut self, n: $t) -> Uint {
                self >>= n;
                self
            }
        }

        impl Shr<$t> for &Uint {
            type Output = Uint;

            fn shr(self, n: $t) -> Uint {
                self.clone() >> n
            }
        }
    )*};
}

forward_shift_scalar!(u32, u64, usize);

impl ShlAssign<&Uint> for Uint {
    /// Shifting by a `Uint` amount requires the amount to fit in one limb.
    fn shl_assign(&mut self, n: &Uint) {
        assert!(n.limb_count() <= 1, "shift amount wider than one limb");
        self.shl_assign_bits(n.limb(0));
    }
}

impl ShrAssign<&Uint> for Uint {
    fn shr_assign(&mut self, n: &Uint) {
        assert!(n.limb_count() <= 1, "shift amount wider than one limb");
        self.shr_assign_bits(n.limb(0));
    }
}

impl Shl<&Uint> for Uint {
    type Output = Uint;

    fn shl(mut self, n: &Uint) -> Uint {
        self <<= n;
        self
    }
}

impl Shl<&Uint> for &Uint {
    type Output = Uint;

    fn shl(self, n: &Uint) -> Uint {
        self.clone() << n
    }
}

impl Shr<&Uint> for Uint {
    type Output = Uint;

    fn shr(mut self, n: &Uint) -> Uint {
        self >>= n;
        self
    }
}

impl Shr<&Uint> for &Uint {
    type Output = Uint;

    fn shr(self, n: &Uint) -> Uint {
        self.clone() >> n
    }
}

// ============================================================================
// Scalar comparison
// ============================================================================

impl PartialEq<u64> for Uint {
    fn eq(&self, other: &u64) -> bool {
        self.limb_count() <= 1 && self.limb(0) == *other
    }
}

impl PartialEq<Uint> for u64 {
    fn eq(&self, other: &Uint) -> bool {
        other == self
    }
}

impl PartialOrd<u64> for Uint {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(self.cmp(&Uint::from(*other)))
    }
}

impl PartialOrd<Uint> for u64 {
    fn partial_cmp(&self, other: &Uint) -> Option<Ordering> {
        Some(Uint::from(*self).cmp(other))
    }
}

//! Arbitrary-precision unsigned integer built from 64-bit limbs.
//!
//! [`Uint`] supports the full operation surface of a fixed-width unsigned
//! machine integer - arithmetic, bitwise logic, shifts, comparison - plus
//! conversion to and from digit strings in bases 2-36 and raw big-endian
//! bytes (base 256).
//!
//! ```
//! use biguint::Uint;
//!
//! let a = Uint::from_radix(b"fedcba9876543210", 16)?;
//! let b = Uint::from(1_000_000_007u64);
//! let (q, r) = (&a * &b).divmod(&a)?;
//! assert_eq!(q, b);
//! assert!(r.is_zero());
//! assert_eq!(a.to_string(), "18364758544493064720");
//! # Ok::<(), biguint::Error>(())
//! ```
//!
//! Values own their limb buffers; independent values can be used from
//! separate threads freely, while a single value needs external
//! serialisation to mutate.

mod bits;
mod div;
mod error;
mod fmt;
mod limbs;
mod mul;
mod ops;
mod radix;
mod uint;
mod word;


pub use error::{Error, Result};
pub use uint::Uint;

//! Field capability shared by every component of the construction.
//!
//! The duplex logic is written once against [`FieldElement`] and
//! instantiated per field family:
//!
//! * [`Bn254Fr`]: GF(p) with the BN254 scalar prime (the circom field).
//! * [`F101`]: GF(101), small enough to check vectors by hand.
//! * [`Gf2_64`]: GF(2^64) modulo `x^64 + x^4 + x^3 + x + 1`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

pub mod binary;
pub mod prime;

pub use binary::Gf2_64;
pub use prime::{Bn254Fr, Bn254FrConfig, F101Config, F101};

/// Arithmetic and encoding contract the construction relies on.
///
/// Encodings are little-endian and exactly [`ENCODED_LEN`](Self::ENCODED_LEN)
/// bytes wide.
pub trait FieldElement:
    Copy
    + Eq
    + fmt::Debug
    + Send
    + Sync
    + Zeroize
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Width of one canonical encoding, and of one round-constant window.
    const ENCODED_LEN: usize;

    /// Domain string hashed to derive the round constants, e.g. `GF(101)`.
    fn domain() -> String;

    /// Reduces an arbitrary little-endian byte string onto the field.
    fn from_uniform_bytes(bytes: &[u8]) -> Self;

    /// Canonical little-endian encoding.
    fn to_canonical_bytes(&self) -> Vec<u8>;

    /// Inverse of [`to_canonical_bytes`](Self::to_canonical_bytes); rejects
    /// wrong lengths and non-reduced encodings.
    fn from_canonical_bytes(bytes: &[u8]) -> Option<Self>;

    /// Parses a decimal representation; values outside the canonical range
    /// are rejected rather than reduced.
    fn from_decimal(s: &str) -> Option<Self>;

    /// Decimal rendering of the canonical representative.
    fn to_decimal(&self) -> String;

    /// Equality that does not short-circuit on the first differing byte.
    fn ct_eq(&self, other: &Self) -> Choice {
        let lhs = self.to_canonical_bytes();
        let rhs = other.to_canonical_bytes();
        lhs.as_slice().ct_eq(rhs.as_slice())
    }
}

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(test)]
use proptest::{
    arbitrary::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};
use zeroize::Zeroize;

use super::FieldElement;

/// Element of GF(2^64) = GF(2)[x] / (x^64 + x^4 + x^3 + x + 1).
///
/// Bit `i` of the wrapped word is the coefficient of `x^i`. Addition and
/// subtraction are both XOR, so masking in this family coincides with the
/// usual stream-cipher XOR.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct Gf2_64(pub u64);

#[macro_export]
/// Construct a [`Gf2_64`] from its coefficient word.
///
/// # Examples
/// ```
/// use ciminion::gf2;
///
/// assert_eq!(gf2!(0b11) * gf2!(0b11), gf2!(0b101)); // (x + 1)^2 = x^2 + 1
/// assert_eq!(gf2!(6) + gf2!(6), gf2!(0));
/// ```
macro_rules! gf2 {
    ($value:expr) => {
        $crate::field::Gf2_64::new($value)
    };
}

#[cfg(test)]
impl Arbitrary for Gf2_64 {
    type Parameters = ();
    type Strategy = BoxedStrategy<Gf2_64>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::num::u64::ANY.prop_map(Gf2_64).boxed()
    }
}

impl Gf2_64 {
    /// Low word of the reduction polynomial: x^64 = x^4 + x^3 + x + 1.
    pub const REDUCTION: u64 = 0x1B;

    pub const BYTES: usize = 8;

    #[inline]
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[cfg(test)]
    fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self(1);

        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse; `None` for zero.
    #[cfg(test)]
    fn inv(self) -> Option<Self> {
        // The multiplicative group has order 2^64 - 1.
        (self.0 != 0).then(|| self.pow(u64::MAX - 1))
    }

    /// Carry-less 64×64 → 128-bit product.
    #[inline]
    #[must_use]
    pub const fn clmul(a: u64, b: u64) -> u128 {
        let mut acc = 0u128;
        let mut i = 0;
        while i < 64 {
            if (b >> i) & 1 == 1 {
                acc ^= (a as u128) << i;
            }
            i += 1;
        }
        acc
    }

    /// Reduce a 127-bit carry-less product modulo the field polynomial.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // splitting into 64-bit halves
    pub const fn reduce(x: u128) -> u64 {
        let hi = (x >> 64) as u64;
        let lo = x as u64;

        // hi·x^64 ≡ hi·0x1B spills at most 4 bits past x^64; fold once more.
        let folded = Self::clmul(hi, Self::REDUCTION);
        let spill = (folded >> 64) as u64;
        let tail = Self::clmul(spill, Self::REDUCTION) as u64;

        lo ^ (folded as u64) ^ tail
    }
}

impl From<u64> for Gf2_64 {
    #[inline]
    fn from(v: u64) -> Self {
        Gf2_64::new(v)
    }
}

impl From<Gf2_64> for u64 {
    #[inline]
    fn from(fe: Gf2_64) -> Self {
        fe.0
    }
}

impl Add for Gf2_64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Gf2_64(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf2_64 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Gf2_64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Gf2_64(Self::reduce(Self::clmul(self.0, rhs.0)))
    }
}

impl MulAssign for Gf2_64 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sub for Gf2_64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Gf2_64(self.0 ^ rhs.0)
    }
}

impl SubAssign for Gf2_64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Gf2_64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self
    }
}

impl FieldElement for Gf2_64 {
    const ZERO: Self = Gf2_64(0);
    const ONE: Self = Gf2_64(1);
    const ENCODED_LEN: usize = Self::BYTES;

    fn domain() -> String {
        "GF(2^64)".to_owned()
    }

    /// Horner evaluation over the bytes, most significant (last) first, so
    /// inputs longer than eight bytes are reduced as polynomials.
    fn from_uniform_bytes(bytes: &[u8]) -> Self {
        let x8 = Gf2_64(0x100);
        bytes
            .iter()
            .rev()
            .fold(Gf2_64(0), |acc, &b| acc * x8 + Gf2_64(u64::from(b)))
    }

    fn to_canonical_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }

    fn from_canonical_bytes(bytes: &[u8]) -> Option<Self> {
        let word: [u8; 8] = bytes.try_into().ok()?;
        Some(Gf2_64(u64::from_le_bytes(word)))
    }

    fn from_decimal(s: &str) -> Option<Self> {
        s.parse::<u64>().ok().map(Gf2_64)
    }

    fn to_decimal(&self) -> String {
        self.0.to_string()
    }
}

//! GF(p) instances backed by arkworks Montgomery arithmetic.

use core::str::FromStr;

use ark_ff::{
    fields::{Fp256, Fp64},
    AdditiveGroup, BigInt, BigInteger, Field, Fp, MontBackend, MontConfig, PrimeField,
};

use super::FieldElement;

// The `MontConfig` derive resolves `ZERO` by method-style lookup, which is
// ambiguous while `FieldElement` is in scope; keep the configs apart from it.
mod configs {
    use ark_ff::MontConfig;

    /// BN254 scalar field, the prime the circom circuits use (`GLOBAL_FIELD_P`).
    #[derive(MontConfig)]
    #[modulus = "21888242871839275222246405745257275088548364400416034343698204186575808495617"]
    #[generator = "5"]
    pub struct Bn254FrConfig;

    /// GF(101). Only useful for regression vectors small enough to audit.
    #[derive(MontConfig)]
    #[modulus = "101"]
    #[generator = "2"] // primitive root modulo 101
    pub struct F101Config;
}

pub use configs::{Bn254FrConfig, F101Config};

pub type Bn254Fr = Fp256<MontBackend<Bn254FrConfig, 4>>;

pub type F101 = Fp64<MontBackend<F101Config, 1>>;

impl<C: MontConfig<N>, const N: usize> FieldElement for Fp<MontBackend<C, N>, N> {
    const ZERO: Self = <Self as AdditiveGroup>::ZERO;
    const ONE: Self = <Self as Field>::ONE;
    const ENCODED_LEN: usize = N * 8;

    fn domain() -> String {
        format!("GF({})", C::MODULUS)
    }

    #[inline]
    fn from_uniform_bytes(bytes: &[u8]) -> Self {
        Self::from_le_bytes_mod_order(bytes)
    }

    #[inline]
    fn to_canonical_bytes(&self) -> Vec<u8> {
        self.into_bigint().to_bytes_le()
    }

    fn from_canonical_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return None;
        }
        // Reduction is the identity exactly on canonical inputs.
        let candidate = Self::from_le_bytes_mod_order(bytes);
        (candidate.to_canonical_bytes() == bytes).then_some(candidate)
    }

    /// `from_bigint` rejects values at or above the modulus.
    fn from_decimal(s: &str) -> Option<Self> {
        BigInt::<N>::from_str(s).ok().and_then(Self::from_bigint)
    }

    fn to_decimal(&self) -> String {
        self.into_bigint().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BN254_MODULUS: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";
    const BN254_MODULUS_MINUS_ONE: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495616";

    #[test]
    fn decimal_parsing_is_canonical() {
        assert_eq!(F101::from_decimal("100"), Some(F101::from(100u64)));
        assert_eq!(F101::from_decimal("101"), None);
        assert_eq!(F101::from_decimal(""), None);
        assert_eq!(F101::from_decimal("-1"), None);
        assert_eq!(F101::from_decimal("1e3"), None);

        let max = Bn254Fr::from_decimal(BN254_MODULUS_MINUS_ONE).unwrap();
        assert_eq!(max + <Bn254Fr as FieldElement>::ONE, <Bn254Fr as FieldElement>::ZERO);
        assert_eq!(Bn254Fr::from_decimal(BN254_MODULUS), None);
    }

    #[test]
    fn decimal_rendering() {
        let x = Bn254Fr::from_decimal("3423412331").unwrap();
        assert_eq!(x.to_decimal(), "3423412331");
        assert_eq!(F101::from(205u64).to_decimal(), "3");
        assert_eq!(<F101 as FieldElement>::ZERO.to_decimal(), "0");
    }

    #[test]
    fn uniform_bytes_reduce_little_endian() {
        // 0x0100 = 256 = 2 * 101 + 54
        assert_eq!(F101::from_uniform_bytes(&[0x00, 0x01]), F101::from(54u64));
        assert_eq!(F101::ENCODED_LEN, 8);
        assert_eq!(Bn254Fr::ENCODED_LEN, 32);
    }

    #[test]
    fn non_reduced_encoding_is_rejected() {
        let mut bytes = [0u8; 8];
        bytes[0] = 101;
        assert_eq!(F101::from_canonical_bytes(&bytes), None);
        bytes[0] = 100;
        assert_eq!(F101::from_canonical_bytes(&bytes), Some(F101::from(100u64)));
    }

    proptest! {
        #[test]
        fn decimal_roundtrips_through_display(v in 0u64..101) {
            let x = F101::from(v);
            prop_assert_eq!(F101::from_decimal(&x.to_decimal()), Some(x));
        }

        #[test]
        fn canonical_bytes_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let x = Bn254Fr::from_uniform_bytes(&bytes);
            prop_assert_eq!(Bn254Fr::from_canonical_bytes(&x.to_canonical_bytes()), Some(x));
        }
    }
}

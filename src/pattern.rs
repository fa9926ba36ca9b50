//! Helper utilities for generating deterministic element sequences used in
//! benchmarks and tests.
use crate::{field::FieldElement, state::MasterKey};

/// `len` elements following `(index * multiplier + addend) mod 2^64`, each
/// mapped onto the field through its little-endian bytes.
#[must_use]
pub fn patterned_elements<F: FieldElement>(len: usize, multiplier: u64, addend: u64) -> Vec<F> {
    (0u64..)
        .take(len)
        .map(|i| patterned_element(i, multiplier, addend))
        .collect()
}

/// Key whose halves are the first two elements of the pattern.
#[must_use]
pub fn patterned_key<F: FieldElement>(multiplier: u64, addend: u64) -> MasterKey<F> {
    MasterKey::new(
        patterned_element(0, multiplier, addend),
        patterned_element(1, multiplier, addend),
    )
}

fn patterned_element<F: FieldElement>(index: u64, multiplier: u64, addend: u64) -> F {
    let word = index.wrapping_mul(multiplier).wrapping_add(addend);
    F::from_uniform_bytes(&word.to_le_bytes())
}

//! Round-constant derivation.
//!
//! All constants of one configuration come from a single SHAKE256 stream
//! over the field's domain string. The Small permutation never gets its own
//! stream: it reads a window of the Big table.

use std::sync::Arc;

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use crate::{
    error::ConfigurationError, field::FieldElement, params::CiminionParams,
    ROUND_CONSTANTS_PER_ROUND,
};

/// Expand `domain` into `count` field elements.
///
/// Element `i` is the `i`-th [`FieldElement::ENCODED_LEN`]-byte window of the
/// SHAKE256 output, read little-endian and reduced onto the field.
pub fn expand<F: FieldElement>(domain: &str, count: usize) -> Vec<F> {
    let mut shake = Shake256::default();
    shake.update(domain.as_bytes());
    let mut reader = shake.finalize_xof();

    let mut window = vec![0u8; F::ENCODED_LEN];
    (0..count)
        .map(|_| {
            reader.read(&mut window);
            F::from_uniform_bytes(&window)
        })
        .collect()
}

/// Immutable constant table shared by both permutations of one engine.
#[derive(Clone, Debug)]
pub struct RoundConstants<F> {
    table: Arc<[F]>,
    small_offset: usize,
    small_len: usize,
}

impl<F: FieldElement> RoundConstants<F> {
    /// Derive the table for `params` from the field's own domain string.
    pub fn derive(params: &CiminionParams) -> Result<Self, ConfigurationError> {
        Self::derive_with_domain(params, &F::domain())
    }

    pub fn derive_with_domain(
        params: &CiminionParams,
        domain: &str,
    ) -> Result<Self, ConfigurationError> {
        params.validate()?;
        let table: Arc<[F]> = expand(domain, params.constant_count()).into();

        let degenerate = table
            .iter()
            .filter(|c| **c == F::ZERO || **c == F::ONE)
            .count();
        if degenerate > 0 {
            tracing::warn!(
                domain,
                degenerate,
                "round constants include the additive or multiplicative identity"
            );
        }
        tracing::debug!(domain, count = table.len(), "derived round constants");

        Ok(Self {
            table,
            small_offset: params.small_offset(),
            small_len: params.rounds_small * ROUND_CONSTANTS_PER_ROUND,
        })
    }

    /// Constants consumed by the Big permutation.
    #[inline]
    pub fn big(&self) -> &[F] {
        &self.table
    }

    /// Constants consumed by the Small permutation, a window of [`big`](Self::big).
    #[inline]
    pub fn small(&self) -> &[F] {
        &self.table[self.small_offset..self.small_offset + self.small_len]
    }

    #[inline]
    pub(crate) fn table(&self) -> &Arc<[F]> {
        &self.table
    }

    #[inline]
    pub(crate) fn small_offset(&self) -> usize {
        self.small_offset
    }
}

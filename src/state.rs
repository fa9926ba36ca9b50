use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{field::FieldElement, STATE_WIDTH};

/// Index of the rate slot: carries the public mask, absorbs the block.
pub(crate) const RATE: usize = 0;
/// Capacity slot that receives the finalization domain separator.
pub(crate) const FINAL_CAPACITY: usize = 2;

/// Secret two-element master key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey<F: FieldElement>([F; 2]);

impl<F: FieldElement> MasterKey<F> {
    #[inline]
    pub fn new(k0: F, k1: F) -> Self {
        Self([k0, k1])
    }

    /// Borrow both halves.
    #[inline]
    pub fn as_elements(&self) -> &[F; 2] {
        &self.0
    }
}

impl<F: FieldElement> From<[F; 2]> for MasterKey<F> {
    fn from(elements: [F; 2]) -> Self {
        Self(elements)
    }
}

impl<F: FieldElement> core::fmt::Debug for MasterKey<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

/// Evolving secret state of one session.
///
/// Neither `Clone` nor `Copy`: every step consumes the state and
/// hands back its successor, so an intermediate state cannot be replayed.
/// The slots are wiped on drop.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DuplexState<F: FieldElement> {
    slots: [F; STATE_WIDTH],
}

impl<F: FieldElement> DuplexState<F> {
    #[inline]
    pub(crate) fn from_slots(slots: [F; STATE_WIDTH]) -> Self {
        Self { slots }
    }

    /// Copy of the slots; the state itself stays owned.
    #[inline]
    pub(crate) fn slots(&self) -> [F; STATE_WIDTH] {
        self.slots
    }

    /// Public mask squeezed by the last step.
    #[inline]
    pub(crate) fn rate(&self) -> F {
        self.slots[RATE]
    }

    /// Fold a plaintext block into the rate slot. After masking, the rate
    /// slot then equals the ciphertext element.
    #[inline]
    #[must_use]
    pub(crate) fn absorb(mut self, block: F) -> Self {
        self.slots[RATE] += block;
        self
    }

    /// Mark the state as final so the tag step differs from a block step.
    #[inline]
    #[must_use]
    pub(crate) fn separate_final(mut self) -> Self {
        self.slots[FINAL_CAPACITY] += F::ONE;
        self
    }
}

impl<F: FieldElement> core::fmt::Debug for DuplexState<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DuplexState(..)")
    }
}

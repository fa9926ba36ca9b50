use crate::{field::FieldElement, permutation::Permutation, state::DuplexState, STATE_WIDTH};

/// Nonlinear rolling map `(ι, ρ, γ) ↦ (γ + ι·ρ, ι, ρ)`.
#[inline]
pub fn rol<F: FieldElement>([iota, rho, gamma]: [F; STATE_WIDTH]) -> [F; STATE_WIDTH] {
    [gamma + iota * rho, iota, rho]
}

/// Per-block step built on the Small permutation.
#[derive(Clone, Debug)]
pub struct RollingFunction<F> {
    small: Permutation<F>,
}

impl<F: FieldElement> RollingFunction<F> {
    pub fn new(small: Permutation<F>) -> Self {
        Self { small }
    }

    /// Advance the state by one block.
    ///
    /// Returns the public mask (the rate slot of `Small(rol(state))`) and the
    /// successor state. The mask depends only on the state trajectory, which
    /// is why decryption can regenerate it from ciphertext alone.
    pub fn advance(&self, state: DuplexState<F>) -> (F, DuplexState<F>) {
        let next = DuplexState::from_slots(self.small.apply(rol(state.slots())));
        (next.rate(), next)
    }

    /// Squeeze the tag from the state left after the last block.
    pub fn finalize(&self, state: DuplexState<F>) -> F {
        let (tag, _) = self.advance(state.separate_final());
        tag
    }
}

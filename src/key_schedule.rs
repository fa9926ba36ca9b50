use crate::{
    field::FieldElement,
    permutation::Permutation,
    state::{DuplexState, MasterKey},
};

/// Derives the initial duplex state. The only user of the Big permutation.
#[derive(Clone, Debug)]
pub struct KeySchedule<F> {
    big: Permutation<F>,
}

impl<F: FieldElement> KeySchedule<F> {
    pub fn new(big: Permutation<F>) -> Self {
        Self { big }
    }

    /// `Big([nonce + iv, k0, k1])`.
    pub fn initialize(&self, key: &MasterKey<F>, nonce: F, iv: F) -> DuplexState<F> {
        let [k0, k1] = *key.as_elements();
        DuplexState::from_slots(self.big.apply([nonce + iv, k0, k1]))
    }
}

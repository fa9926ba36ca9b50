use std::sync::Arc;

use crate::{
    constants::RoundConstants, error::ConfigurationError, field::FieldElement,
    ROUND_CONSTANTS_PER_ROUND, STATE_WIDTH,
};

/// Keyless iterated permutation of `[F; 3]`.
///
/// Each round is a Toffoli gate followed by an affine layer with determinant
/// one. With round constants `(c1, c2, c3, c4)`:
///
/// ```text
/// t  = c + a·b
/// a' = t + c3
/// b' = a + c4·b + c4·t + c1
/// c' = b + t + c2
/// ```
///
/// Instances borrow their constants from a shared table, so the Big and
/// Small permutations of one engine never copy constants.
#[derive(Clone, Debug)]
pub struct Permutation<F> {
    rounds: usize,
    table: Arc<[F]>,
    offset: usize,
}

impl<F: FieldElement> Permutation<F> {
    /// Run `rounds` rounds with constants starting at `table[offset]`.
    pub fn new(rounds: usize, table: Arc<[F]>, offset: usize) -> Result<Self, ConfigurationError> {
        if rounds == 0 {
            return Err(ConfigurationError::ZeroRounds);
        }
        let needed = rounds * ROUND_CONSTANTS_PER_ROUND;
        let available = table.len().saturating_sub(offset);
        if available < needed {
            return Err(ConfigurationError::InsufficientRoundConstants { needed, available });
        }
        Ok(Self {
            rounds,
            table,
            offset,
        })
    }

    /// The wide instance, run once per session by the key schedule.
    pub fn big(constants: &RoundConstants<F>, rounds: usize) -> Result<Self, ConfigurationError> {
        Self::new(rounds, Arc::clone(constants.table()), 0)
    }

    /// The cheap instance, run once per block.
    pub fn small(constants: &RoundConstants<F>, rounds: usize) -> Result<Self, ConfigurationError> {
        Self::new(rounds, Arc::clone(constants.table()), constants.small_offset())
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    #[inline]
    fn round_constants(&self) -> &[F] {
        &self.table[self.offset..self.offset + self.rounds * ROUND_CONSTANTS_PER_ROUND]
    }

    #[must_use]
    pub fn apply(&self, state: [F; STATE_WIDTH]) -> [F; STATE_WIDTH] {
        let [mut a, mut b, mut c] = state;
        for rc in self.round_constants().chunks_exact(ROUND_CONSTANTS_PER_ROUND) {
            let (c1, c2, c3, c4) = (rc[0], rc[1], rc[2], rc[3]);
            let t = c + a * b;
            (a, b, c) = (t + c3, a + c4 * b + c4 * t + c1, b + t + c2);
        }
        [a, b, c]
    }

    /// Exact inverse of [`apply`](Self::apply); needs no field inversion.
    #[must_use]
    pub fn apply_inverse(&self, state: [F; STATE_WIDTH]) -> [F; STATE_WIDTH] {
        let [mut a, mut b, mut c] = state;
        for rc in self.round_constants().chunks_exact(ROUND_CONSTANTS_PER_ROUND).rev() {
            let (c1, c2, c3, c4) = (rc[0], rc[1], rc[2], rc[3]);
            let t = a - c3;
            let prev_b = c - t - c2;
            let prev_a = b - c4 * prev_b - c4 * t - c1;
            (a, b, c) = (prev_a, prev_b, t - prev_a * prev_b);
        }
        [a, b, c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::F101, params::CiminionParams};
    use proptest::prelude::*;

    fn toy() -> RoundConstants<F101> {
        RoundConstants::derive(&CiminionParams::new(6, 3)).unwrap()
    }

    fn fe(v: u64) -> F101 {
        F101::from(v)
    }

    #[test]
    fn toy_permutations_are_pinned() {
        let rc = toy();
        let big = Permutation::big(&rc, 6).unwrap();
        let small = Permutation::small(&rc, 3).unwrap();

        assert_eq!(big.apply([fe(0), fe(1), fe(2)]), [fe(84), fe(8), fe(62)]);
        assert_eq!(small.apply([fe(0), fe(1), fe(2)]), [fe(75), fe(25), fe(58)]);
    }

    #[test]
    fn zero_state_is_not_fixed() {
        let rc = toy();
        let small = Permutation::small(&rc, 3).unwrap();
        let zero = [fe(0); STATE_WIDTH];
        assert_ne!(small.apply(zero), zero);
    }

    #[test]
    fn rejects_short_tables() {
        let rc = toy();
        assert_eq!(
            Permutation::new(7, Arc::clone(rc.table()), 0).unwrap_err(),
            ConfigurationError::InsufficientRoundConstants {
                needed: 28,
                available: 24
            }
        );
        assert_eq!(
            Permutation::new(4, Arc::clone(rc.table()), 12).unwrap_err(),
            ConfigurationError::InsufficientRoundConstants {
                needed: 16,
                available: 12
            }
        );
        assert_eq!(
            Permutation::new(0, Arc::clone(rc.table()), 0).unwrap_err(),
            ConfigurationError::ZeroRounds
        );
    }

    proptest! {
        #[test]
        fn inverse_undoes_apply(a in 0u64..101, b in 0u64..101, c in 0u64..101) {
            let rc = toy();
            let big = Permutation::big(&rc, 6).unwrap();
            let state = [fe(a), fe(b), fe(c)];
            prop_assert_eq!(big.apply_inverse(big.apply(state)), state);
            prop_assert_eq!(big.apply(big.apply_inverse(state)), state);
        }

        #[test]
        fn apply_is_injective_on_toy_field(
            a in 0u64..101,
            b in 0u64..101,
            c in 0u64..101,
            d in 0u64..101,
        ) {
            prop_assume!(c != d);
            let rc = toy();
            let small = Permutation::small(&rc, 3).unwrap();
            prop_assert_ne!(small.apply([fe(a), fe(b), fe(c)]), small.apply([fe(a), fe(b), fe(d)]));
        }
    }
}

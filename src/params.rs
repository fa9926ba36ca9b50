//! Round-count configuration.

use crate::{error::ConfigurationError, ROUND_CONSTANTS_PER_ROUND};

/// Round counts of the two permutations.
///
/// The Small permutation reuses the constants of the last `rounds_small`
/// rounds of the Big permutation, so `rounds_small <= rounds_big` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CiminionParams {
    /// Rounds of the permutation used once per session by the key schedule.
    pub rounds_big: usize,
    /// Rounds of the permutation used once per block.
    pub rounds_small: usize,
}

impl CiminionParams {
    /// 128-bit security configuration.
    pub const DEFAULT: Self = Self::new(90, 14);

    #[inline]
    pub const fn new(rounds_big: usize, rounds_small: usize) -> Self {
        Self {
            rounds_big,
            rounds_small,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.rounds_small == 0 || self.rounds_big == 0 {
            return Err(ConfigurationError::ZeroRounds);
        }
        if self.rounds_small > self.rounds_big {
            return Err(ConfigurationError::SmallExceedsBig {
                big: self.rounds_big,
                small: self.rounds_small,
            });
        }
        Ok(())
    }

    /// Size of the shared constant table.
    #[inline]
    #[must_use]
    pub const fn constant_count(&self) -> usize {
        self.rounds_big * ROUND_CONSTANTS_PER_ROUND
    }

    /// Start of the Small permutation's window in the shared table.
    #[inline]
    #[must_use]
    pub const fn small_offset(&self) -> usize {
        self.rounds_big.saturating_sub(self.rounds_small) * ROUND_CONSTANTS_PER_ROUND
    }
}

impl Default for CiminionParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! Error types for the construction.

use thiserror::Error;

/// Errors produced by [`Ciminion`](crate::Ciminion) and its building blocks.
///
/// Every variant is a deterministic outcome of its inputs; retrying with the
/// same inputs yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The recomputed tag differs from the supplied one. No plaintext is
    /// released.
    #[error("authentication failed: tag mismatch")]
    Authentication,

    /// The engine could not be built from the requested parameters.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The sequence length disagrees with an independently supplied length.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Parameter problems detected before any session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("permutation must run at least one round")]
    ZeroRounds,

    #[error("small permutation rounds ({small}) exceed big permutation rounds ({big})")]
    SmallExceedsBig { big: usize, small: usize },

    #[error("insufficient round constants: need {needed}, have {available}")]
    InsufficientRoundConstants { needed: usize, available: usize },
}

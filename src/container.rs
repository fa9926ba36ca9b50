//! Loader for the public-signal array emitted alongside an encryption proof.
//!
//! The array holds decimal strings. Index 0 is an unrelated circuit output,
//! the next `len` entries are the ciphertext, followed by the tag. Nonce and IV
//! sit at fixed offsets from the end of the array.

use std::io::Read;

use thiserror::Error;

use crate::{farfalle::Sealed, field::FieldElement};

/// Positions counted back from the end of the array.
const NONCE_FROM_END: usize = 4;
const IV_FROM_END: usize = 3;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("malformed signal array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("signal array too short: need {needed} entries, found {available}")]
    TooShort { needed: usize, available: usize },

    #[error("signal {index} is not a canonical field element: {value:?}")]
    InvalidElement { index: usize, value: String },
}

/// Ciphertext, tag, nonce and IV extracted from a signal array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicSignals<F> {
    pub ciphertext: Vec<F>,
    pub tag: F,
    pub nonce: F,
    pub iv: F,
}

impl<F: FieldElement> PublicSignals<F> {
    /// Parse a JSON array of decimal strings holding `len` ciphertext elements.
    pub fn parse(json: &str, len: usize) -> Result<Self, ContainerError> {
        let signals: Vec<String> = serde_json::from_str(json)?;
        Self::from_signals(&signals, len)
    }

    pub fn from_reader<R: Read>(reader: R, len: usize) -> Result<Self, ContainerError> {
        let signals: Vec<String> = serde_json::from_reader(reader)?;
        Self::from_signals(&signals, len)
    }

    pub fn from_signals(signals: &[String], len: usize) -> Result<Self, ContainerError> {
        // Leading output, ciphertext, tag.
        let needed = len.checked_add(2).map_or(usize::MAX, |n| n.max(NONCE_FROM_END));
        if signals.len() < needed {
            return Err(ContainerError::TooShort {
                needed,
                available: signals.len(),
            });
        }

        let element = |index: usize| -> Result<F, ContainerError> {
            let value = &signals[index];
            F::from_decimal(value.trim()).ok_or_else(|| ContainerError::InvalidElement {
                index,
                value: value.clone(),
            })
        };

        let ciphertext = (1..=len).map(&element).collect::<Result<Vec<_>, _>>()?;
        let tag = element(len + 1)?;
        let nonce = element(signals.len() - NONCE_FROM_END)?;
        let iv = element(signals.len() - IV_FROM_END)?;

        tracing::debug!(len, signals = signals.len(), "parsed public signals");

        Ok(Self {
            ciphertext,
            tag,
            nonce,
            iv,
        })
    }

    /// Drop the IV, keeping what [`Ciminion::open`](crate::Ciminion::open) needs.
    pub fn into_sealed(self) -> (Sealed<F>, F) {
        let sealed = Sealed {
            nonce: self.nonce,
            ciphertext: self.ciphertext,
            tag: self.tag,
        };
        (sealed, self.iv)
    }
}

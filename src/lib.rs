#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::all, clippy::pedantic))]
#![cfg_attr(
    not(test),
    allow(
        clippy::module_name_repetitions,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc
    )
)]
//! Ciminion-family authenticated encryption over finite fields
//!
//! A Farfalle-like construction: a key schedule runs the Big permutation once
//! to derive a secret three-element state, then a rolling function runs the
//! Small permutation once per message element to produce a mask. Every
//! element is encrypted by field addition, so a ciphertext has exactly as many
//! elements as its plaintext plus one tag element.
//!
//! The logic is generic over [`FieldElement`]; GF(p) fields come from
//! `ark-ff`, and [`Gf2_64`] provides GF(2^64).
//!
//! ```
//! use ciminion::{presets, FieldElement, MasterKey};
//! use ciminion::field::Bn254Fr;
//!
//! let engine = presets::bn254().unwrap();
//! let key = MasterKey::new(Bn254Fr::from(2134u64), Bn254Fr::from(3_423_412_331u64));
//! let nonce = Bn254Fr::from(42u64);
//! let message = [1u64, 2, 3, 255].map(Bn254Fr::from);
//!
//! let (ciphertext, tag) = engine.encrypt(&key, nonce, &message);
//! assert_eq!(ciphertext.len(), message.len());
//! assert_eq!(engine.decrypt(&key, nonce, &ciphertext, tag).unwrap(), message);
//! assert!(engine.decrypt(&key, nonce, &ciphertext, tag + Bn254Fr::ONE).is_err());
//! ```

/// Elements in the duplex state: one rate slot and two capacity slots.
pub const STATE_WIDTH: usize = 3;
/// Constants consumed by one permutation round.
pub const ROUND_CONSTANTS_PER_ROUND: usize = 4;

pub mod constants;
pub mod container;
pub mod error;
pub mod farfalle;
pub mod field;
pub mod key_schedule;
pub mod params;
pub mod pattern;
pub mod permutation;
pub mod presets;
pub mod rolling;
pub mod state;

pub use crate::constants::{expand, RoundConstants};
pub use crate::container::{ContainerError, PublicSignals};
pub use crate::error::{ConfigurationError, Error};
pub use crate::farfalle::{Ciminion, Sealed};
pub use crate::field::{Bn254Fr, FieldElement, Gf2_64, F101};
pub use crate::key_schedule::KeySchedule;
pub use crate::params::CiminionParams;
pub use crate::permutation::Permutation;
pub use crate::rolling::{rol, RollingFunction};
pub use crate::state::{DuplexState, MasterKey};

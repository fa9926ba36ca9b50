//! Process-wide engines for the default parameter set.
//!
//! Deriving 360 constants costs one SHAKE256 stream plus one reduction per
//! constant, so each preset is built at most once and shared.

use once_cell::sync::Lazy;

use crate::{
    error::Error,
    farfalle::Ciminion,
    field::{Bn254Fr, Gf2_64},
    params::CiminionParams,
};

static BN254: Lazy<Result<Ciminion<Bn254Fr>, Error>> =
    Lazy::new(|| Ciminion::new(CiminionParams::DEFAULT));

static GF2_64: Lazy<Result<Ciminion<Gf2_64>, Error>> =
    Lazy::new(|| Ciminion::new(CiminionParams::DEFAULT));

/// Engine over the BN254 scalar field with 90/14 rounds and IV = 1.
pub fn bn254() -> Result<&'static Ciminion<Bn254Fr>, Error> {
    BN254.as_ref().map_err(Clone::clone)
}

/// Engine over GF(2^64) with 90/14 rounds and IV = 1.
pub fn gf2_64() -> Result<&'static Ciminion<Gf2_64>, Error> {
    GF2_64.as_ref().map_err(Clone::clone)
}

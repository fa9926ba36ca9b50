//! Farfalle-like orchestration of the key schedule and the rolling function.

use zeroize::Zeroize;

use crate::{
    constants::RoundConstants,
    error::Error,
    field::FieldElement,
    key_schedule::KeySchedule,
    params::CiminionParams,
    permutation::Permutation,
    rolling::RollingFunction,
    state::MasterKey,
};

/// Ciphertext together with the public values needed to open it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed<F> {
    pub nonce: F,
    pub ciphertext: Vec<F>,
    pub tag: F,
}

/// Authenticated encryption over field elements.
///
/// One engine holds the two permutations (sharing one constant table) and
/// the public IV; it carries no per-session state and can be shared across
/// threads. Every call runs one key schedule, one rolling step per element
/// and one finalization step.
///
/// # Examples
///
/// ```
/// use ciminion::{field::F101, Ciminion, CiminionParams, MasterKey};
///
/// let engine = Ciminion::<F101>::new(CiminionParams::new(6, 3)).unwrap();
/// let key = MasterKey::new(F101::from(3u64), F101::from(5u64));
/// let nonce = F101::from(7u64);
/// let message = [10u64, 20, 30].map(F101::from);
///
/// let (ciphertext, tag) = engine.encrypt(&key, nonce, &message);
/// assert_eq!(ciphertext, [96u64, 0, 74].map(F101::from));
/// assert_eq!(tag, F101::from(57u64));
///
/// let opened = engine.decrypt(&key, nonce, &ciphertext, tag).unwrap();
/// assert_eq!(opened, message);
/// ```
#[derive(Clone, Debug)]
pub struct Ciminion<F: FieldElement> {
    params: CiminionParams,
    key_schedule: KeySchedule<F>,
    rolling: RollingFunction<F>,
    iv: F,
}

impl<F: FieldElement> Ciminion<F> {
    /// Derive the constants for `params` and build the engine with IV = 1.
    pub fn new(params: CiminionParams) -> Result<Self, Error> {
        let constants = RoundConstants::derive(&params)?;
        Self::from_constants(params, &constants)
    }

    /// Build the engine on an existing constant table.
    pub fn from_constants(
        params: CiminionParams,
        constants: &RoundConstants<F>,
    ) -> Result<Self, Error> {
        params.validate()?;
        let big = Permutation::big(constants, params.rounds_big)?;
        let small = Permutation::small(constants, params.rounds_small)?;
        tracing::debug!(
            rounds_big = params.rounds_big,
            rounds_small = params.rounds_small,
            "built ciminion engine"
        );
        Ok(Self {
            params,
            key_schedule: KeySchedule::new(big),
            rolling: RollingFunction::new(small),
            iv: F::ONE,
        })
    }

    /// Same engine with a different public IV; the constants stay shared.
    #[must_use]
    pub fn with_iv(mut self, iv: F) -> Self {
        self.iv = iv;
        self
    }

    #[inline]
    pub fn iv(&self) -> F {
        self.iv
    }

    #[inline]
    pub fn params(&self) -> &CiminionParams {
        &self.params
    }

    /// Encrypt `message`, returning the ciphertext and the tag.
    pub fn encrypt(&self, key: &MasterKey<F>, nonce: F, message: &[F]) -> (Vec<F>, F) {
        let mut state = self.key_schedule.initialize(key, nonce, self.iv);
        let mut ciphertext = Vec::with_capacity(message.len());

        for &block in message {
            let (mask, next) = self.rolling.advance(state);
            ciphertext.push(block + mask);
            state = next.absorb(block);
        }

        let tag = self.rolling.finalize(state);
        (ciphertext, tag)
    }

    /// Decrypt and verify. On a tag mismatch the recovered plaintext is wiped
    /// and [`Error::Authentication`] is returned.
    pub fn decrypt(
        &self,
        key: &MasterKey<F>,
        nonce: F,
        ciphertext: &[F],
        tag: F,
    ) -> Result<Vec<F>, Error> {
        let mut state = self.key_schedule.initialize(key, nonce, self.iv);
        let mut message = Vec::with_capacity(ciphertext.len());

        for &block in ciphertext {
            let (mask, next) = self.rolling.advance(state);
            let plain = block - mask;
            message.push(plain);
            state = next.absorb(plain);
        }

        let expected = self.rolling.finalize(state);
        if bool::from(expected.ct_eq(&tag)) {
            Ok(message)
        } else {
            message.zeroize();
            Err(Error::Authentication)
        }
    }

    /// [`decrypt`](Self::decrypt) after checking `ciphertext` against a length
    /// announced elsewhere (container metadata, command line).
    pub fn decrypt_with_length(
        &self,
        key: &MasterKey<F>,
        nonce: F,
        ciphertext: &[F],
        expected_len: usize,
        tag: F,
    ) -> Result<Vec<F>, Error> {
        if ciphertext.len() != expected_len {
            return Err(Error::LengthMismatch {
                expected: expected_len,
                actual: ciphertext.len(),
            });
        }
        self.decrypt(key, nonce, ciphertext, tag)
    }

    pub fn seal(&self, key: &MasterKey<F>, nonce: F, message: &[F]) -> Sealed<F> {
        let (ciphertext, tag) = self.encrypt(key, nonce, message);
        Sealed {
            nonce,
            ciphertext,
            tag,
        }
    }

    pub fn open(&self, key: &MasterKey<F>, sealed: &Sealed<F>) -> Result<Vec<F>, Error> {
        self.decrypt(key, sealed.nonce, &sealed.ciphertext, sealed.tag)
    }

    /// Open independent ciphertexts under one key, e.g. the tiles of one
    /// image. Results keep the input order.
    #[cfg(feature = "parallel")]
    pub fn open_all(
        &self,
        key: &MasterKey<F>,
        sealed: &[Sealed<F>],
    ) -> Vec<Result<Vec<F>, Error>> {
        use rayon::prelude::*;

        sealed.par_iter().map(|s| self.open(key, s)).collect()
    }

    /// Open independent ciphertexts under one key, e.g. the tiles of one
    /// image. Results keep the input order.
    #[cfg(not(feature = "parallel"))]
    pub fn open_all(
        &self,
        key: &MasterKey<F>,
        sealed: &[Sealed<F>],
    ) -> Vec<Result<Vec<F>, Error>> {
        sealed.iter().map(|s| self.open(key, s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConfigurationError, field::F101};

    fn fe(v: u64) -> F101 {
        F101::from(v)
    }

    fn engine() -> Ciminion<F101> {
        Ciminion::new(CiminionParams::new(6, 3)).unwrap()
    }

    fn key() -> MasterKey<F101> {
        MasterKey::new(fe(3), fe(5))
    }

    #[test]
    fn empty_message_still_has_a_tag() {
        let (ciphertext, tag) = engine().encrypt(&key(), fe(7), &[]);
        assert!(ciphertext.is_empty());
        assert_eq!(tag, fe(15));
        assert_eq!(engine().decrypt(&key(), fe(7), &[], tag), Ok(vec![]));
        assert_eq!(
            engine().decrypt(&key(), fe(7), &[], fe(16)),
            Err(Error::Authentication)
        );
    }

    #[test]
    fn iv_changes_the_output() {
        let message = [fe(10), fe(20), fe(30)];
        let default_iv = engine().encrypt(&key(), fe(7), &message);
        let other_iv = engine().with_iv(fe(2)).encrypt(&key(), fe(7), &message);
        assert_ne!(default_iv, other_iv);
        assert_eq!(other_iv, (vec![fe(75), fe(40), fe(38)], fe(73)));
    }

    #[test]
    fn length_check_precedes_decryption() {
        let (ciphertext, tag) = engine().encrypt(&key(), fe(7), &[fe(10), fe(20), fe(30)]);
        assert_eq!(
            engine().decrypt_with_length(&key(), fe(7), &ciphertext, 4, tag),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            engine().decrypt_with_length(&key(), fe(7), &ciphertext, 3, tag),
            Ok(vec![fe(10), fe(20), fe(30)])
        );
    }

    #[test]
    fn rejects_tables_too_short_for_the_params() {
        let constants = RoundConstants::<F101>::derive(&CiminionParams::new(4, 2)).unwrap();
        let err = Ciminion::from_constants(CiminionParams::new(6, 3), &constants).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::InsufficientRoundConstants {
                needed: 24,
                available: 16
            })
        );
    }

    #[test]
    fn rejects_invalid_params_before_deriving() {
        assert_eq!(
            Ciminion::<F101>::new(CiminionParams::new(2, 3)).unwrap_err(),
            Error::Configuration(ConfigurationError::SmallExceedsBig { big: 2, small: 3 })
        );
    }

    #[test]
    fn seal_open_and_batch() {
        let engine = engine();
        let tiles: Vec<Sealed<F101>> = (0..4u64)
            .map(|i| engine.seal(&key(), fe(i), &[fe(i), fe(i + 1)]))
            .collect();

        let mut tampered = tiles.clone();
        tampered[2].tag += fe(1);

        let opened = engine.open_all(&key(), &tampered);
        assert_eq!(opened.len(), 4);
        assert_eq!(opened[0], Ok(vec![fe(0), fe(1)]));
        assert_eq!(opened[2], Err(Error::Authentication));
        assert_eq!(opened[3], Ok(vec![fe(3), fe(4)]));
    }
}

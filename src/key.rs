use std::fmt;

use rand_core::{CryptoRng, RngCore};

use crate::des;
use crate::error::KeyError;
use crate::serpent;

/// The block cipher a piece of key material belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Three-key Triple-DES in encrypt-decrypt-encrypt order.
    TripleDes,
    /// Serpent with any supported key length.
    Serpent,
}

impl Algorithm {
    /// The conventional algorithm name, e.g. `"DESede"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::TripleDes => "DESede",
            Algorithm::Serpent => "Serpent",
        }
    }

    /// Block size in bytes.
    pub fn block_size(self) -> usize {
        match self {
            Algorithm::TripleDes => des::BLOCK_SIZE,
            Algorithm::Serpent => serpent::BLOCK_SIZE,
        }
    }

    fn check_key_len(self, len: usize) -> Result<(), KeyError> {
        match self {
            Algorithm::TripleDes => des::check_key_len(len),
            Algorithm::Serpent => serpent::check_key_len(len),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw key bytes tagged with the algorithm they are meant for.
///
/// The length is validated on construction, so a `SecretKey` handed to the
/// matching engine always yields a schedule.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    algorithm: Algorithm,
    bytes: Vec<u8>,
}

impl SecretKey {
    pub fn new(algorithm: Algorithm, bytes: &[u8]) -> Result<SecretKey, KeyError> {
        algorithm.check_key_len(bytes.len())?;
        Ok(SecretKey {
            algorithm,
            bytes: bytes.to_vec(),
        })
    }

    /// Generates a three-key Triple-DES key.
    ///
    /// Every byte carries odd parity, no third is a weak or semi-weak DES key
    /// and the three thirds are pairwise distinct, so the result always has
    /// 112 bits of effective strength.
    pub fn generate_tdes<R: RngCore + CryptoRng>(rng: &mut R) -> SecretKey {
        let mut bytes = [0u8; des::KEY_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            des::adjust_parity(&mut bytes);
            let usable = bytes
                .chunks_exact(8)
                .all(|third| !des::is_weak_key(third) && !des::is_semi_weak_key(third))
                && bytes[..8] != bytes[8..16]
                && bytes[8..16] != bytes[16..]
                && bytes[..8] != bytes[16..];
            if usable {
                break;
            }
            tracing::debug!("discarding generated DESede key candidate");
        }
        SecretKey {
            algorithm: Algorithm::TripleDes,
            bytes: bytes.to_vec(),
        }
    }

    /// Generates a Serpent key of `len` bytes.
    pub fn generate_serpent<R: RngCore + CryptoRng>(
        rng: &mut R,
        len: usize,
    ) -> Result<SecretKey, KeyError> {
        serpent::check_key_len(len)?;
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        Ok(SecretKey {
            algorithm: Algorithm::Serpent,
            bytes,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("algorithm", &self.algorithm)
            .field("len", &self.bytes.len())
            .finish()
    }
}

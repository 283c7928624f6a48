use crate::key::Algorithm;
use block_cipher_trait::InvalidKeyLength;
use thiserror::Error;

/// Reasons a key can be refused when a schedule is derived.
///
/// Block transforms themselves never fail, so this is the only error type
/// the crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key does not have the exact length the cipher requires.
    #[error("wrong key length: expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A Serpent key must be 1..=32 bytes long and a multiple of four bytes.
    #[error("invalid Serpent key size of {0} bytes")]
    InvalidSize(usize),

    /// The key was declared for a different algorithm.
    #[error("unsupported key type: expected a {expected} key, got a {actual} key")]
    UnsupportedType {
        expected: Algorithm,
        actual: Algorithm,
    },
}

impl From<KeyError> for InvalidKeyLength {
    fn from(_: KeyError) -> Self {
        InvalidKeyLength
    }
}

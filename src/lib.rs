//! # blockcrypt
//!
//! `blockcrypt` provides two keyed block-transform engines:
//!
//! * [Triple-DES](https://csrc.nist.gov/pubs/sp/800/67/r2/final) in its
//!   three-key encrypt-decrypt-encrypt form ("DESede"), built on S-box
//!   tables merged with the P permutation;
//! * [Serpent](https://www.cl.cam.ac.uk/~rja14/serpent.html), one of the
//!   leading AES candidates, in its bitsliced form with Boolean-circuit
//!   S-boxes.
//!
//! Both follow the same shape: a key is expanded once into an immutable
//! schedule, and blocks are then encrypted or decrypted by pure functions of
//! `(schedule, block)`. Schedules are `Send + Sync` and can be shared freely.
//!
//! ```
//! use blockcrypt::{BlockTransform, Direction, Serpent};
//!
//! let schedule = Serpent::make_schedule(&[0u8; 16], Direction::Encrypt).unwrap();
//! let ct = Serpent::encrypt_block(&schedule, &[0u8; 16]);
//! assert_eq!(Serpent::decrypt_block(&schedule, &ct), [0u8; 16]);
//! ```
//!
//! Modes of operation and padding are not provided here. For easy
//! interoperation with Rust crypto every cipher type also implements the
//! `BlockCipher` trait from the `block-cipher-trait` crate, which is what
//! the mode crates consume.

pub mod des;
mod error;
mod key;
pub mod serpent;

pub use block_cipher_trait;
pub use block_cipher_trait::generic_array;
pub use generic_array::typenum;

pub use des::TdesEde3;
pub use error::KeyError;
pub use key::{Algorithm, SecretKey};
pub use serpent::{Serpent, Serpent128, Serpent192, Serpent256};

/// The direction a schedule is requested for.
///
/// Neither engine derives different schedules per direction; the value only
/// documents the caller's intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A block cipher expressed as a key schedule plus two pure block functions.
pub trait BlockTransform {
    /// The algorithm a [`SecretKey`] must be tagged with.
    const ALGORITHM: Algorithm;
    /// Block size in bytes.
    const BLOCK_SIZE: usize;

    /// A single block, `[u8; BLOCK_SIZE]`.
    type Block: Copy + AsRef<[u8]> + AsMut<[u8]>;
    /// Round keys derived from one key, usable in both directions.
    type Schedule: Clone + Send + Sync;

    /// Validates `key` and expands it into a schedule.
    fn make_schedule(key: &[u8], direction: Direction) -> Result<Self::Schedule, KeyError>;

    /// Like [`make_schedule`](Self::make_schedule), but also refuses keys
    /// declared for another algorithm.
    fn make_schedule_from(
        key: &SecretKey,
        direction: Direction,
    ) -> Result<Self::Schedule, KeyError> {
        if key.algorithm() != Self::ALGORITHM {
            tracing::debug!(
                expected = %Self::ALGORITHM,
                actual = %key.algorithm(),
                "rejecting key of foreign type"
            );
            return Err(KeyError::UnsupportedType {
                expected: Self::ALGORITHM,
                actual: key.algorithm(),
            });
        }
        Self::make_schedule(key.as_bytes(), direction)
    }

    fn encrypt_block(schedule: &Self::Schedule, input: &Self::Block) -> Self::Block;

    /// Exact inverse of [`encrypt_block`](Self::encrypt_block) under the
    /// same schedule.
    fn decrypt_block(schedule: &Self::Schedule, input: &Self::Block) -> Self::Block;

    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}

//! # Serpent
//!
//! The [Serpent cipher](https://www.cl.cam.ac.uk/~rja14/serpent.html) in its
//! bitsliced form: the block is held as four little-endian 32-bit words, the
//! S-boxes are Boolean circuits over those words and no initial or final
//! permutation is needed. Byte order follows the NESSIE test vectors.
//!
//! [`Serpent`] accepts any key of 4 to 32 bytes in steps of four bytes, while
//! [`Serpent128`], [`Serpent192`] and [`Serpent256`] pin the key length.

mod keys;
#[cfg(test)]
mod tables;
mod transforms;

use std::fmt;

use block_cipher_trait::generic_array::typenum::{U1, U16, U24, U32};
use block_cipher_trait::generic_array::GenericArray;
use block_cipher_trait::{BlockCipher, InvalidKeyLength};
use byteorder::{ByteOrder, LE};

use crate::error::KeyError;
use crate::key::{Algorithm, SecretKey};
use crate::{BlockTransform, Direction};

use transforms::{linear_transform, linear_transform_inv, Words, SBOX, SBOX_INV};

pub(crate) use keys::check_key_len;

const PHI: u32 = 0x9e37_79b9;
const ROUNDS: usize = 32;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;
/// Longest accepted key in bytes.
pub const MAX_KEY_SIZE: usize = 32;

/// The 33 round keys of four words each, the last one used for the final
/// whitening XOR.
#[derive(Clone, PartialEq, Eq)]
pub struct SerpentSchedule {
    words: keys::Subkeys,
}

impl SerpentSchedule {
    /// Expands a key whose length has already been validated.
    fn expand(key: &[u8]) -> SerpentSchedule {
        SerpentSchedule {
            words: keys::derive_subkeys(&keys::expand_key(key)),
        }
    }

    /// All 132 round-key words in round order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

impl fmt::Debug for SerpentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpentSchedule").finish_non_exhaustive()
    }
}

fn make_schedule(key: &[u8], direction: Direction) -> Result<SerpentSchedule, KeyError> {
    if let Err(err) = check_key_len(key.len()) {
        tracing::debug!(len = key.len(), "rejecting Serpent key: {}", err);
        return Err(err);
    }
    let schedule = SerpentSchedule::expand(key);
    tracing::debug!(?direction, key_bits = key.len() * 8, "derived Serpent key schedule");
    Ok(schedule)
}

#[inline(always)]
fn xor_subkey(x: Words, k: &keys::Subkeys, i: usize) -> Words {
    [
        x[0] ^ k[4 * i],
        x[1] ^ k[4 * i + 1],
        x[2] ^ k[4 * i + 2],
        x[3] ^ k[4 * i + 3],
    ]
}

#[inline(always)]
fn do_round(i: usize, x: Words, k: &keys::Subkeys) -> Words {
    let s = SBOX[i % 8](xor_subkey(x, k, i));
    if i <= ROUNDS - 2 {
        linear_transform(s)
    } else {
        xor_subkey(s, k, ROUNDS)
    }
}

#[inline(always)]
fn do_round_inv(i: usize, x: Words, k: &keys::Subkeys) -> Words {
    let s = if i <= ROUNDS - 2 {
        linear_transform_inv(x)
    } else {
        xor_subkey(x, k, ROUNDS)
    };
    xor_subkey(SBOX_INV[i % 8](s), k, i)
}

fn encrypt(schedule: &SerpentSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut x = [0u32; 4];
    LE::read_u32_into(input, &mut x);
    for i in 0..ROUNDS {
        x = do_round(i, x, &schedule.words);
    }
    let mut output = [0u8; BLOCK_SIZE];
    LE::write_u32_into(&x, &mut output);
    output
}

fn decrypt(schedule: &SerpentSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut x = [0u32; 4];
    LE::read_u32_into(input, &mut x);
    for i in (0..ROUNDS).rev() {
        x = do_round_inv(i, x, &schedule.words);
    }
    let mut output = [0u8; BLOCK_SIZE];
    LE::write_u32_into(&x, &mut output);
    output
}

fn copy_block(block: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    out.copy_from_slice(block);
    out
}

/// The Serpent cipher instance for any supported key length
///
/// Implements [`BlockTransform`] as well as the common Rust crypto
/// `block_cipher_trait::BlockCipher` trait. For the latter, 256-bit keys are
/// the fixed key length and `new_varkey` takes every other valid length.
#[derive(Clone, Debug)]
pub struct Serpent {
    schedule: SerpentSchedule,
}

impl Serpent {
    /// Constructs an instance from a little-endian binary key of 4 to 32
    /// bytes, in multiples of four bytes.
    pub fn with_key(key: &[u8]) -> Result<Serpent, KeyError> {
        Ok(Serpent {
            schedule: make_schedule(key, Direction::Encrypt)?,
        })
    }

    pub fn from_secret_key(key: &SecretKey) -> Result<Serpent, KeyError> {
        Ok(Serpent {
            schedule: <Serpent as BlockTransform>::make_schedule_from(key, Direction::Encrypt)?,
        })
    }

    pub fn schedule(&self) -> &SerpentSchedule {
        &self.schedule
    }

    pub fn encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        encrypt(&self.schedule, block)
    }

    pub fn decrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        decrypt(&self.schedule, block)
    }
}

impl BlockTransform for Serpent {
    const ALGORITHM: Algorithm = Algorithm::Serpent;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    type Block = [u8; BLOCK_SIZE];
    type Schedule = SerpentSchedule;

    fn make_schedule(key: &[u8], direction: Direction) -> Result<SerpentSchedule, KeyError> {
        make_schedule(key, direction)
    }

    fn encrypt_block(schedule: &SerpentSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        encrypt(schedule, input)
    }

    fn decrypt_block(schedule: &SerpentSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        decrypt(schedule, input)
    }
}

impl BlockCipher for Serpent {
    type KeySize = U32;
    type BlockSize = U16;
    type ParBlocks = U1;

    fn new(key: &GenericArray<u8, U32>) -> Self {
        Serpent {
            schedule: SerpentSchedule::expand(key.as_slice()),
        }
    }

    fn new_varkey(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        Ok(Serpent::with_key(key)?)
    }

    fn encrypt_block(&self, block: &mut GenericArray<u8, U16>) {
        let output = encrypt(&self.schedule, &copy_block(block.as_slice()));
        block.copy_from_slice(&output);
    }

    fn decrypt_block(&self, block: &mut GenericArray<u8, U16>) {
        let output = decrypt(&self.schedule, &copy_block(block.as_slice()));
        block.copy_from_slice(&output);
    }
}

macro_rules! fixed_serpent {
    ($name:ident, $key_size:ty, $len:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $name {
            schedule: SerpentSchedule,
        }

        impl $name {
            /// The only key length this variant accepts, in bytes.
            pub const KEY_SIZE: usize = $len;

            pub fn with_key(key: &[u8]) -> Result<$name, KeyError> {
                Ok($name {
                    schedule: <$name as BlockTransform>::make_schedule(key, Direction::Encrypt)?,
                })
            }

            pub fn from_secret_key(key: &SecretKey) -> Result<$name, KeyError> {
                Ok($name {
                    schedule: <$name as BlockTransform>::make_schedule_from(
                        key,
                        Direction::Encrypt,
                    )?,
                })
            }

            pub fn schedule(&self) -> &SerpentSchedule {
                &self.schedule
            }

            pub fn encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
                encrypt(&self.schedule, block)
            }

            pub fn decrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
                decrypt(&self.schedule, block)
            }
        }

        impl BlockTransform for $name {
            const ALGORITHM: Algorithm = Algorithm::Serpent;
            const BLOCK_SIZE: usize = BLOCK_SIZE;

            type Block = [u8; BLOCK_SIZE];
            type Schedule = SerpentSchedule;

            fn make_schedule(
                key: &[u8],
                direction: Direction,
            ) -> Result<SerpentSchedule, KeyError> {
                if key.len() != $len {
                    tracing::debug!(
                        len = key.len(),
                        variant = stringify!($name),
                        "rejecting key of wrong length"
                    );
                    return Err(KeyError::WrongLength {
                        expected: $len,
                        actual: key.len(),
                    });
                }
                make_schedule(key, direction)
            }

            fn encrypt_block(
                schedule: &SerpentSchedule,
                input: &[u8; BLOCK_SIZE],
            ) -> [u8; BLOCK_SIZE] {
                encrypt(schedule, input)
            }

            fn decrypt_block(
                schedule: &SerpentSchedule,
                input: &[u8; BLOCK_SIZE],
            ) -> [u8; BLOCK_SIZE] {
                decrypt(schedule, input)
            }
        }

        impl BlockCipher for $name {
            type KeySize = $key_size;
            type BlockSize = U16;
            type ParBlocks = U1;

            fn new(key: &GenericArray<u8, $key_size>) -> Self {
                $name {
                    schedule: SerpentSchedule::expand(key.as_slice()),
                }
            }

            fn encrypt_block(&self, block: &mut GenericArray<u8, U16>) {
                let output = encrypt(&self.schedule, &copy_block(block.as_slice()));
                block.copy_from_slice(&output);
            }

            fn decrypt_block(&self, block: &mut GenericArray<u8, U16>) {
                let output = decrypt(&self.schedule, &copy_block(block.as_slice()));
                block.copy_from_slice(&output);
            }
        }
    };
}

fixed_serpent!(Serpent128, U16, 16, "Serpent restricted to 128-bit keys");
fixed_serpent!(Serpent192, U24, 24, "Serpent restricted to 192-bit keys");
fixed_serpent!(Serpent256, U32, 32, "Serpent restricted to 256-bit keys");

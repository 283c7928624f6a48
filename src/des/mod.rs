//! Three-key Triple-DES (DESede) in encrypt-decrypt-encrypt order.
//!
//! The round function uses the classic merged S-box/P tables, so each round
//! costs one expansion, two XORs and eight table lookups. IP and FP are
//! applied once per block rather than once per DES pass, since FP followed
//! by IP is the identity.

mod keys;
mod tables;
mod transforms;

use std::fmt;

use block_cipher_trait::generic_array::typenum::{U1, U24, U8};
use block_cipher_trait::generic_array::GenericArray;
use block_cipher_trait::BlockCipher;
use byteorder::{ByteOrder, BE};

use crate::error::KeyError;
use crate::key::{Algorithm, SecretKey};
use crate::{BlockTransform, Direction};

pub use keys::{adjust_parity, is_parity_adjusted, is_semi_weak_key, is_weak_key};

use transforms::{des_rounds, final_permutation, initial_permutation};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;
/// Key size in bytes: three concatenated single-DES keys.
pub const KEY_SIZE: usize = 24;

pub(crate) fn check_key_len(len: usize) -> Result<(), KeyError> {
    if len == KEY_SIZE {
        Ok(())
    } else {
        Err(KeyError::WrongLength {
            expected: KEY_SIZE,
            actual: len,
        })
    }
}

/// Effective key strength in bits: 56 when all three thirds are equal, so
/// that EDE collapses to single DES, otherwise 112.
///
/// This only reports; such keys are still accepted by the cipher.
pub fn effective_strength(key: &[u8; KEY_SIZE]) -> u32 {
    let (k1, rest) = key.split_at(8);
    let (k2, k3) = rest.split_at(8);
    if k1 == k2 && k2 == k3 {
        56
    } else {
        112
    }
}

/// Round keys for all three DES passes, 16 rounds of two 24-bit halves each.
#[derive(Clone, PartialEq, Eq)]
pub struct DesEdeSchedule {
    keys: [keys::Subkeys; 3],
}

impl DesEdeSchedule {
    fn expand(key: &[u8]) -> DesEdeSchedule {
        DesEdeSchedule {
            keys: [
                keys::derive_subkeys(&key[..8]),
                keys::derive_subkeys(&key[8..16]),
                keys::derive_subkeys(&key[16..24]),
            ],
        }
    }

    /// The schedule as 96 words: pass, then round, then half.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.keys.iter().flat_map(|pass| pass.iter().copied())
    }
}

impl fmt::Debug for DesEdeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesEdeSchedule").finish_non_exhaustive()
    }
}

fn encrypt(schedule: &DesEdeSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let (l, r) = initial_permutation(BE::read_u64(input));
    let (l, r) = des_rounds(l, r, &schedule.keys[0], Direction::Encrypt);
    let (l, r) = des_rounds(l, r, &schedule.keys[1], Direction::Decrypt);
    let (l, r) = des_rounds(l, r, &schedule.keys[2], Direction::Encrypt);
    let mut output = [0u8; BLOCK_SIZE];
    BE::write_u64(&mut output, final_permutation(l, r));
    output
}

fn decrypt(schedule: &DesEdeSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let (l, r) = initial_permutation(BE::read_u64(input));
    let (l, r) = des_rounds(l, r, &schedule.keys[2], Direction::Decrypt);
    let (l, r) = des_rounds(l, r, &schedule.keys[1], Direction::Encrypt);
    let (l, r) = des_rounds(l, r, &schedule.keys[0], Direction::Decrypt);
    let mut output = [0u8; BLOCK_SIZE];
    BE::write_u64(&mut output, final_permutation(l, r));
    output
}

/// The Triple-DES cipher instance
///
/// Implements [`BlockTransform`] for schedule-oriented use as well as the
/// common Rust crypto `block_cipher_trait::BlockCipher` trait.
#[derive(Clone, Debug)]
pub struct TdesEde3 {
    schedule: DesEdeSchedule,
}

impl TdesEde3 {
    /// Constructs an instance from a 24-byte key.
    pub fn with_key(key: &[u8]) -> Result<TdesEde3, KeyError> {
        let schedule = <TdesEde3 as BlockTransform>::make_schedule(key, Direction::Encrypt)?;
        Ok(TdesEde3 { schedule })
    }

    /// Constructs an instance from a key declared for DESede.
    pub fn from_secret_key(key: &SecretKey) -> Result<TdesEde3, KeyError> {
        let schedule = <TdesEde3 as BlockTransform>::make_schedule_from(key, Direction::Encrypt)?;
        Ok(TdesEde3 { schedule })
    }

    pub fn schedule(&self) -> &DesEdeSchedule {
        &self.schedule
    }

    pub fn encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        encrypt(&self.schedule, block)
    }

    pub fn decrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        decrypt(&self.schedule, block)
    }
}

impl BlockTransform for TdesEde3 {
    const ALGORITHM: Algorithm = Algorithm::TripleDes;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    type Block = [u8; BLOCK_SIZE];
    type Schedule = DesEdeSchedule;

    fn make_schedule(key: &[u8], direction: Direction) -> Result<DesEdeSchedule, KeyError> {
        if let Err(err) = check_key_len(key.len()) {
            tracing::debug!(len = key.len(), "rejecting DESede key: {}", err);
            return Err(err);
        }
        if key.chunks_exact(8).any(|k| is_weak_key(k) || is_semi_weak_key(k)) {
            tracing::warn!("DESede key contains a weak or semi-weak DES key");
        }
        let schedule = DesEdeSchedule::expand(key);
        tracing::debug!(
            ?direction,
            strength = key_strength(key),
            "derived DESede key schedule"
        );
        Ok(schedule)
    }

    fn encrypt_block(schedule: &DesEdeSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        encrypt(schedule, input)
    }

    fn decrypt_block(schedule: &DesEdeSchedule, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        decrypt(schedule, input)
    }
}

fn key_strength(key: &[u8]) -> u32 {
    let mut raw = [0u8; KEY_SIZE];
    raw.copy_from_slice(key);
    effective_strength(&raw)
}

impl BlockCipher for TdesEde3 {
    type KeySize = U24;
    type BlockSize = U8;
    type ParBlocks = U1;

    fn new(key: &GenericArray<u8, U24>) -> Self {
        TdesEde3 {
            schedule: DesEdeSchedule::expand(key.as_slice()),
        }
    }

    fn encrypt_block(&self, block: &mut GenericArray<u8, Self::BlockSize>) {
        let mut input = [0u8; BLOCK_SIZE];
        input.copy_from_slice(block.as_slice());
        block.copy_from_slice(&encrypt(&self.schedule, &input));
    }

    fn decrypt_block(&self, block: &mut GenericArray<u8, Self::BlockSize>) {
        let mut input = [0u8; BLOCK_SIZE];
        input.copy_from_slice(block.as_slice());
        block.copy_from_slice(&decrypt(&self.schedule, &input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 24] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, //
        0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, //
        0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, //
    ];

    #[test]
    fn sp800_67_example() {
        let cipher = TdesEde3::with_key(&KEY).unwrap();
        let ct = cipher.encrypt(b"The qufc");
        assert_eq!(ct, [0xa8, 0x26, 0xfd, 0x8c, 0xe5, 0x3b, 0x85, 0x5f]);
        assert_eq!(&cipher.decrypt(&ct), b"The qufc");
    }

    #[test]
    fn zero_block() {
        let schedule = TdesEde3::make_schedule(&KEY, Direction::Encrypt).unwrap();
        let ct = <TdesEde3 as BlockTransform>::encrypt_block(&schedule, &[0u8; 8]);
        assert_eq!(ct, [0x4e, 0xba, 0x73, 0x9c, 0x99, 0x8b, 0xcb, 0x60]);
        assert_eq!(
            <TdesEde3 as BlockTransform>::decrypt_block(&schedule, &ct),
            [0u8; 8]
        );
    }

    #[test]
    fn degenerate_key_is_single_des() {
        // FIPS 81 example: single DES, K = 0123456789ABCDEF
        let mut key = [0u8; 24];
        for third in key.chunks_exact_mut(8) {
            third.copy_from_slice(&KEY[..8]);
        }
        assert_eq!(effective_strength(&key), 56);
        let cipher = TdesEde3::with_key(&key).unwrap();
        assert_eq!(
            cipher.encrypt(b"Now is t"),
            [0x3f, 0xa4, 0x0e, 0x8a, 0x98, 0x4d, 0x48, 0x15]
        );
    }

    #[test]
    fn strength() {
        assert_eq!(effective_strength(&KEY), 112);
        let mut key = [0x11u8; 24];
        assert_eq!(effective_strength(&key), 56);
        key[23] ^= 0x02;
        assert_eq!(effective_strength(&key), 112);
        key[23] ^= 0x02;
        key[0] ^= 0x02;
        assert_eq!(effective_strength(&key), 112);
    }

    #[test]
    fn rejects_wrong_length() {
        for &len in &[0usize, 8, 16, 23, 25, 32] {
            let key = vec![0x5a; len];
            assert_eq!(
                TdesEde3::make_schedule(&key, Direction::Decrypt),
                Err(KeyError::WrongLength {
                    expected: 24,
                    actual: len
                })
            );
        }
    }

    #[test]
    fn schedule_is_direction_agnostic() {
        let enc = TdesEde3::make_schedule(&KEY, Direction::Encrypt).unwrap();
        let dec = TdesEde3::make_schedule(&KEY, Direction::Decrypt).unwrap();
        assert_eq!(enc, dec);
        assert_eq!(enc.words().count(), 96);
    }

    #[test]
    fn debug_hides_round_keys() {
        let schedule = TdesEde3::make_schedule(&KEY, Direction::Encrypt).unwrap();
        assert_eq!(format!("{:?}", schedule), "DesEdeSchedule { .. }");
    }

    #[test]
    fn block_cipher_trait_matches_block_transform() {
        let cipher = <TdesEde3 as BlockCipher>::new(GenericArray::from_slice(&KEY));
        let mut block = GenericArray::clone_from_slice(b"The qufc");
        BlockCipher::encrypt_block(&cipher, &mut block);
        assert_eq!(block.as_slice(), &[0xa8, 0x26, 0xfd, 0x8c, 0xe5, 0x3b, 0x85, 0x5f]);
        BlockCipher::decrypt_block(&cipher, &mut block);
        assert_eq!(block.as_slice(), b"The qufc");
        assert!(<TdesEde3 as BlockCipher>::new_varkey(&KEY[..16]).is_err());
    }

    #[test]
    fn foreign_secret_key_is_unsupported() {
        let key = SecretKey::new(Algorithm::Serpent, &KEY).unwrap();
        assert_eq!(
            TdesEde3::from_secret_key(&key).unwrap_err(),
            KeyError::UnsupportedType {
                expected: Algorithm::TripleDes,
                actual: Algorithm::Serpent
            }
        );
        let key = SecretKey::new(Algorithm::TripleDes, &KEY).unwrap();
        assert!(TdesEde3::from_secret_key(&key).is_ok());
    }
}

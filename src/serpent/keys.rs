use byteorder::{ByteOrder, LE};

use super::transforms::SBOX;
use super::{MAX_KEY_SIZE, PHI, ROUNDS};
use crate::error::KeyError;

/// A user key padded to 256 bits, as eight little-endian words.
pub(crate) type Key = [u32; 8];
pub(crate) type Subkeys = [u32; 4 * (ROUNDS + 1)];

pub(crate) fn check_key_len(len: usize) -> Result<(), KeyError> {
    if len == 0 || len > MAX_KEY_SIZE || len % 4 != 0 {
        return Err(KeyError::InvalidSize(len));
    }
    Ok(())
}

/// Pads a validated key to 256 bits: the key words, then a single one bit,
/// then zeros. A full 256-bit key is used as is.
pub(crate) fn expand_key(source: &[u8]) -> Key {
    let words = source.len() / 4;
    let mut key = [0u32; 8];
    LE::read_u32_into(source, &mut key[..words]);
    if words < key.len() {
        key[words] = 1;
    }
    key
}

/// Runs the prekey recurrence and passes each group of four prekey words
/// through S-box `(3 - i) mod 8`.
pub(crate) fn derive_subkeys(key: &Key) -> Subkeys {
    let mut w = [0u32; 140];
    w[..8].copy_from_slice(key);

    for i in 0..132 {
        let slot = i + 8;
        w[slot] = (w[slot - 8] ^ w[slot - 5] ^ w[slot - 3] ^ w[slot - 1] ^ PHI ^ i as u32)
            .rotate_left(11);
    }

    let w = &w[8..];
    let mut k = [0u32; 4 * (ROUNDS + 1)];
    for i in 0..=ROUNDS {
        let s_idx = (ROUNDS + 3 - i) % 8;
        let group = [w[4 * i], w[4 * i + 1], w[4 * i + 2], w[4 * i + 3]];
        k[4 * i..4 * i + 4].copy_from_slice(&SBOX[s_idx](group));
    }
    k
}

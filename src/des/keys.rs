use byteorder::{ByteOrder, BE};

use super::tables::{PC2, ROTATIONS, SEMI_WEAK_KEYS, WEAK_KEYS};

/// Sixteen round keys of one single-DES key, each as two 24-bit halves.
pub(crate) type Subkeys = [u32; 32];

/// Gathers bit `bit` (1 = most significant) of every key byte, last byte
/// first, into one byte.
#[inline]
fn column(key: u64, bit: u32) -> u32 {
    let bits = (key >> (8 - bit)) & 0x0101_0101_0101_0101;
    (bits.wrapping_mul(0x8040_2010_0804_0201) >> 56) as u32
}

/// PC1 as a column gather: `C0` reads bit columns 1, 2, 3 and the upper half
/// of column 4, `D0` reads columns 7, 6, 5 and the lower half of column 4.
/// The parity column 8 is dropped.
pub(crate) fn permuted_choice_1(key: u64) -> (u32, u32) {
    let c = column(key, 1) << 20 | column(key, 2) << 12 | column(key, 3) << 4 | column(key, 4) >> 4;
    let d = column(key, 7) << 20 | column(key, 6) << 12 | column(key, 5) << 4 | column(key, 4) & 0xf;
    (c, d)
}

fn permuted_choice_2(c: u32, d: u32) -> (u32, u32) {
    let cd = u64::from(c) << 28 | u64::from(d);
    let k = PC2
        .iter()
        .fold(0u64, |k, &src| (k << 1) | ((cd >> (56 - u32::from(src))) & 1));
    ((k >> 24) as u32, (k & 0x00ff_ffff) as u32)
}

#[inline]
fn rotate_28(x: u32, n: u32) -> u32 {
    ((x << n) | (x >> (28 - n))) & 0x0fff_ffff
}

/// Expands one eight-byte DES key into its sixteen round keys.
pub(crate) fn derive_subkeys(key: &[u8]) -> Subkeys {
    let (mut c, mut d) = permuted_choice_1(BE::read_u64(key));
    let mut subkeys = [0u32; 32];
    for (round, &shift) in ROTATIONS.iter().enumerate() {
        c = rotate_28(c, shift);
        d = rotate_28(d, shift);
        let (left, right) = permuted_choice_2(c, d);
        subkeys[2 * round] = left;
        subkeys[2 * round + 1] = right;
    }
    subkeys
}

/// Sets odd parity on every byte, leaving the seven key bits untouched.
pub fn adjust_parity(key: &mut [u8]) {
    for byte in key.iter_mut() {
        let high = *byte & 0xfe;
        *byte = high | ((high.count_ones() + 1) & 1) as u8;
    }
}

/// Whether every byte of `key` has odd parity.
pub fn is_parity_adjusted(key: &[u8]) -> bool {
    key.iter().all(|b| b.count_ones() & 1 == 1)
}

fn matches_any(key: &[u8], table: &[[u8; 8]]) -> bool {
    if key.len() != 8 {
        return false;
    }
    let mut normalized = [0u8; 8];
    normalized.copy_from_slice(key);
    adjust_parity(&mut normalized);
    table.iter().any(|candidate| *candidate == normalized)
}

/// Whether the eight-byte DES key is one of the four weak keys. Parity bits
/// are ignored. Keys of any other length are never weak.
pub fn is_weak_key(key: &[u8]) -> bool {
    matches_any(key, &WEAK_KEYS)
}

/// Whether the eight-byte DES key is one of the twelve semi-weak keys.
/// Parity bits are ignored.
pub fn is_semi_weak_key(key: &[u8]) -> bool {
    matches_any(key, &SEMI_WEAK_KEYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PC1: [u8; 56] = [
        57, 49, 41, 33, 25, 17, 9, 1, 58, 50, 42, 34, 26, 18, //
        10, 2, 59, 51, 43, 35, 27, 19, 11, 3, 60, 52, 44, 36, //
        63, 55, 47, 39, 31, 23, 15, 7, 62, 54, 46, 38, 30, 22, //
        14, 6, 61, 53, 45, 37, 29, 21, 13, 5, 28, 20, 12, 4, //
    ];

    #[test]
    fn pc1_gather_matches_table() {
        let mut x = 0x9e37_79b9_7f4a_7c15u64;
        for _ in 0..128 {
            x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let expected = PC1
                .iter()
                .fold(0u64, |out, &src| (out << 1) | ((x >> (64 - u32::from(src))) & 1));
            let (c, d) = permuted_choice_1(x);
            assert_eq!(u64::from(c) << 28 | u64::from(d), expected);
        }
    }

    #[test]
    fn fips_worked_example_subkeys() {
        // K = 133457799BBCDFF1: K1 = 000110 110000 001011 101111 111111 000111 000001 110010
        let subkeys = derive_subkeys(&[0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1]);
        assert_eq!(subkeys[0], 0b000110_110000_001011_101111);
        assert_eq!(subkeys[1], 0b111111_000111_000001_110010);
        // K16 = 110010 110011 110110 001011 000011 100001 011111 110101
        assert_eq!(subkeys[30], 0b110010_110011_110110_001011);
        assert_eq!(subkeys[31], 0b000011_100001_011111_110101);
    }

    #[test]
    fn parity() {
        let mut key = [0x00, 0x01, 0xfe, 0xff, 0x12, 0x13, 0x80, 0x7f];
        assert!(!is_parity_adjusted(&key));
        adjust_parity(&mut key);
        assert_eq!(key, [0x01, 0x01, 0xfe, 0xfe, 0x13, 0x13, 0x80, 0x7f]);
        assert!(is_parity_adjusted(&key));
    }

    #[test]
    fn weak_keys_ignore_parity() {
        assert!(is_weak_key(&[0x01; 8]));
        assert!(is_weak_key(&[0x00; 8]));
        assert!(is_weak_key(&[0xff; 8]));
        assert!(is_weak_key(&[0x1f, 0x1f, 0x1f, 0x1f, 0x0e, 0x0e, 0x0e, 0x0e]));
        assert!(!is_weak_key(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]));
        assert!(!is_weak_key(&[0x01; 7]));
    }

    #[test]
    fn semi_weak_keys() {
        assert!(is_semi_weak_key(&[0x01, 0xfe, 0x01, 0xfe, 0x01, 0xfe, 0x01, 0xfe]));
        assert!(is_semi_weak_key(&[0xe0, 0x1f, 0xe0, 0x1f, 0xf1, 0x0e, 0xf1, 0x0e]));
        assert!(!is_semi_weak_key(&[0x01; 8]));
    }

    #[test]
    fn weak_keys_have_identical_round_keys() {
        for key in WEAK_KEYS.iter() {
            let subkeys = derive_subkeys(key);
            for round in 1..16 {
                assert_eq!(subkeys[2 * round], subkeys[0]);
                assert_eq!(subkeys[2 * round + 1], subkeys[1]);
            }
        }
    }
}

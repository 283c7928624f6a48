use super::tables::SP;
use crate::Direction;

/// Exchanges the bits of `a` selected by `mask << shift` with the bits of
/// `b` selected by `mask`.
#[inline(always)]
fn delta_swap(a: &mut u32, b: &mut u32, shift: u32, mask: u32) {
    let t = ((*a >> shift) ^ *b) & mask;
    *b ^= t;
    *a ^= t << shift;
}

/// IP, returning the permuted block as its `(L, R)` halves.
#[inline]
pub(crate) fn initial_permutation(block: u64) -> (u32, u32) {
    let mut left = (block >> 32) as u32;
    let mut right = block as u32;
    delta_swap(&mut left, &mut right, 4, 0x0f0f_0f0f);
    delta_swap(&mut left, &mut right, 16, 0x0000_ffff);
    delta_swap(&mut right, &mut left, 2, 0x3333_3333);
    delta_swap(&mut right, &mut left, 8, 0x00ff_00ff);
    delta_swap(&mut left, &mut right, 1, 0x5555_5555);
    (left, right)
}

/// FP, the inverse of [`initial_permutation`].
#[inline]
pub(crate) fn final_permutation(mut left: u32, mut right: u32) -> u64 {
    delta_swap(&mut left, &mut right, 1, 0x5555_5555);
    delta_swap(&mut right, &mut left, 8, 0x00ff_00ff);
    delta_swap(&mut right, &mut left, 2, 0x3333_3333);
    delta_swap(&mut left, &mut right, 16, 0x0000_ffff);
    delta_swap(&mut left, &mut right, 4, 0x0f0f_0f0f);
    u64::from(left) << 32 | u64::from(right)
}

/// The E expansion of `r`, split into the 24 bits feeding S1..S4 and the
/// 24 bits feeding S5..S8.
#[inline(always)]
pub(crate) fn expand(r: u32) -> (u32, u32) {
    // bit 32 of R ends up in front of bit 1
    let t = r.rotate_right(1);
    let left = (t >> 26) << 18 | ((t >> 22) & 0x3f) << 12 | ((t >> 18) & 0x3f) << 6 | ((t >> 14) & 0x3f);
    let right = ((t >> 10) & 0x3f) << 18
        | ((t >> 6) & 0x3f) << 12
        | ((t >> 2) & 0x3f) << 6
        | ((r << 1) & 0x3e)
        | (r >> 31);
    (left, right)
}

/// The round function `f(R, K)` for a round key stored as two 24-bit halves.
#[inline(always)]
pub(crate) fn feistel(r: u32, k_left: u32, k_right: u32) -> u32 {
    let (left, right) = expand(r);
    let left = left ^ k_left;
    let right = right ^ k_right;
    SP[0][(left >> 18) as usize]
        | SP[1][((left >> 12) & 0x3f) as usize]
        | SP[2][((left >> 6) & 0x3f) as usize]
        | SP[3][(left & 0x3f) as usize]
        | SP[4][(right >> 18) as usize]
        | SP[5][((right >> 12) & 0x3f) as usize]
        | SP[6][((right >> 6) & 0x3f) as usize]
        | SP[7][(right & 0x3f) as usize]
}

/// Sixteen single-DES rounds over an already permuted block.
///
/// Encryption walks the round keys upwards, decryption downwards. The halves
/// come back exchanged, i.e. as `(R16, L16)`, ready for FP or the next pass.
#[inline]
pub(crate) fn des_rounds(
    mut left: u32,
    mut right: u32,
    subkeys: &[u32; 32],
    direction: Direction,
) -> (u32, u32) {
    for round in 0..16 {
        let j = match direction {
            Direction::Encrypt => round,
            Direction::Decrypt => 15 - round,
        };
        let f = feistel(right, subkeys[2 * j], subkeys[2 * j + 1]);
        let next = left ^ f;
        left = right;
        right = next;
    }
    (right, left)
}

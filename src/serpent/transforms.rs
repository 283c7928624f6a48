//! Bitsliced Serpent S-boxes and the linear transform.
//!
//! Each S-box is a Boolean circuit over four 32-bit words: bit `j` of words
//! `x[0]..x[3]` forms the 4-bit S-box input for column `j`, least significant
//! bit in `x[0]`. The circuits follow Gladman's formulations; the inverse
//! circuits are independent formulas, not derived from the forward ones.

pub(crate) type Words = [u32; 4];
pub(crate) type SBox = fn(Words) -> Words;

/// Forward S-boxes S0..S7.
pub(crate) static SBOX: [SBox; 8] = [sb0, sb1, sb2, sb3, sb4, sb5, sb6, sb7];

/// Inverse S-boxes, `SBOX_INV[i]` undoes `SBOX[i]`.
pub(crate) static SBOX_INV: [SBox; 8] = [ib0, ib1, ib2, ib3, ib4, ib5, ib6, ib7];

pub(crate) fn sb0([a, b, c, d]: Words) -> Words {
    let t1 = a ^ d;
    let t3 = c ^ t1;
    let t4 = b ^ t3;
    let x3 = (a & d) ^ t4;
    let t7 = a ^ (b & t1);
    let x2 = t4 ^ (c | t7);
    let t12 = x3 & (t3 ^ t7);
    let x1 = !t3 ^ t12;
    let x0 = t12 ^ !t7;
    [x0, x1, x2, x3]
}

pub(crate) fn ib0([a, b, c, d]: Words) -> Words {
    let t1 = !a;
    let t2 = a ^ b;
    let t4 = d ^ (t1 | t2);
    let t5 = c ^ t4;
    let x2 = t2 ^ t5;
    let t8 = t1 ^ (d & t2);
    let x1 = t4 ^ (x2 & t8);
    let x3 = (a & t4) ^ (t5 | x1);
    let x0 = x3 ^ (t5 ^ t8);
    [x0, x1, x2, x3]
}

pub(crate) fn sb1([a, b, c, d]: Words) -> Words {
    let t2 = b ^ !a;
    let t5 = c ^ (a | t2);
    let x2 = d ^ t5;
    let t7 = b ^ (d | t2);
    let t8 = t2 ^ x2;
    let x3 = t8 ^ (t5 & t7);
    let t11 = t5 ^ t7;
    let x1 = x3 ^ t11;
    let x0 = t5 ^ (t8 & t11);
    [x0, x1, x2, x3]
}

pub(crate) fn ib1([a, b, c, d]: Words) -> Words {
    let t1 = b ^ d;
    let t3 = a ^ (b & t1);
    let t4 = t1 ^ t3;
    let x3 = c ^ t4;
    let t7 = b ^ (t1 & t3);
    let t8 = x3 | t7;
    let x1 = t3 ^ t8;
    let t10 = !x1;
    let t11 = x3 ^ t7;
    let x0 = t10 ^ t11;
    let x2 = t4 ^ (t10 | t11);
    [x0, x1, x2, x3]
}

pub(crate) fn sb2([a, b, c, d]: Words) -> Words {
    let t1 = !a;
    let t2 = b ^ d;
    let t3 = c & t1;
    let x0 = t2 ^ t3;
    let t5 = c ^ t1;
    let t6 = c ^ x0;
    let t7 = b & t6;
    let x3 = t5 ^ t7;
    let x2 = a ^ ((d | t7) & (x0 | t5));
    let x1 = (t2 ^ x3) ^ (x2 ^ (d | t1));
    [x0, x1, x2, x3]
}

pub(crate) fn ib2([a, b, c, d]: Words) -> Words {
    let t1 = b ^ d;
    let t2 = !t1;
    let t3 = a ^ c;
    let t4 = c ^ t1;
    let t5 = b & t4;
    let x0 = t3 ^ t5;
    let t7 = a | t2;
    let t8 = d ^ t7;
    let t9 = t3 | t8;
    let x3 = t1 ^ t9;
    let t11 = !t4;
    let t12 = x0 | x3;
    let x1 = t11 ^ t12;
    let x2 = (d & t11) ^ (t3 ^ t12);
    [x0, x1, x2, x3]
}

pub(crate) fn sb3([a, b, c, d]: Words) -> Words {
    let t1 = a ^ b;
    let t2 = a & c;
    let t3 = a | d;
    let t4 = c ^ d;
    let t5 = t1 & t3;
    let t6 = t2 | t5;
    let x2 = t4 ^ t6;
    let t8 = b ^ t3;
    let t9 = t6 ^ t8;
    let t10 = t4 & t9;
    let x0 = t1 ^ t10;
    let t12 = x2 & x0;
    let x1 = t9 ^ t12;
    let x3 = (b | d) ^ (t4 ^ t12);
    [x0, x1, x2, x3]
}

pub(crate) fn ib3([a, b, c, d]: Words) -> Words {
    let t1 = a | b;
    let t2 = b ^ c;
    let t3 = b & t2;
    let t4 = a ^ t3;
    let t5 = c ^ t4;
    let t6 = d | t4;
    let x0 = t2 ^ t6;
    let t8 = t2 | t6;
    let t9 = d ^ t8;
    let x2 = t5 ^ t9;
    let t11 = t1 ^ t9;
    let t12 = x0 & t11;
    let x3 = t4 ^ t12;
    let x1 = x3 ^ (x0 ^ t11);
    [x0, x1, x2, x3]
}

pub(crate) fn sb4([a, b, c, d]: Words) -> Words {
    let t1 = a ^ d;
    let t2 = d & t1;
    let t3 = c ^ t2;
    let t4 = b | t3;
    let x3 = t1 ^ t4;
    let t6 = !b;
    let t7 = t1 | t6;
    let x0 = t3 ^ t7;
    let t9 = a & x0;
    let t10 = t1 ^ t6;
    let t11 = t4 & t10;
    let x2 = t9 ^ t11;
    let x1 = (a ^ t3) ^ (t10 & x2);
    [x0, x1, x2, x3]
}

pub(crate) fn ib4([a, b, c, d]: Words) -> Words {
    let t1 = c | d;
    let t2 = a & t1;
    let t3 = b ^ t2;
    let t4 = a & t3;
    let t5 = c ^ t4;
    let x1 = d ^ t5;
    let t7 = !a;
    let t8 = t5 & x1;
    let x3 = t3 ^ t8;
    let t10 = x1 | t7;
    let t11 = d ^ t10;
    let x0 = x3 ^ t11;
    let x2 = (t3 & t11) ^ (x1 ^ t7);
    [x0, x1, x2, x3]
}

pub(crate) fn sb5([a, b, c, d]: Words) -> Words {
    let t1 = !a;
    let t2 = a ^ b;
    let t3 = a ^ d;
    let t4 = c ^ t1;
    let t5 = t2 | t3;
    let x0 = t4 ^ t5;
    let t7 = d & x0;
    let t8 = t2 ^ x0;
    let x1 = t7 ^ t8;
    let t10 = t1 | x0;
    let t11 = t2 | t7;
    let t12 = t3 ^ t10;
    let x2 = t11 ^ t12;
    let x3 = (b ^ t7) ^ (x1 & t12);
    [x0, x1, x2, x3]
}

pub(crate) fn ib5([a, b, c, d]: Words) -> Words {
    let t1 = !c;
    let t2 = b & t1;
    let t3 = d ^ t2;
    let t4 = a & t3;
    let t5 = b ^ t1;
    let x3 = t4 ^ t5;
    let t7 = b | x3;
    let t8 = a & t7;
    let x1 = t3 ^ t8;
    let t10 = a | d;
    let t11 = t1 ^ t7;
    let x0 = t10 ^ t11;
    let x2 = (b & t10) ^ (t4 | (a ^ c));
    [x0, x1, x2, x3]
}

pub(crate) fn sb6([a, b, c, d]: Words) -> Words {
    let t1 = !a;
    let t2 = a ^ d;
    let t3 = b ^ t2;
    let t4 = t1 | t2;
    let t5 = c ^ t4;
    let x1 = b ^ t5;
    let t7 = t2 | x1;
    let t8 = d ^ t7;
    let t9 = t5 & t8;
    let x2 = t3 ^ t9;
    let t11 = t5 ^ t8;
    let x0 = x2 ^ t11;
    let x3 = !t5 ^ (t3 & t11);
    [x0, x1, x2, x3]
}

pub(crate) fn ib6([a, b, c, d]: Words) -> Words {
    let t1 = !a;
    let t2 = a ^ b;
    let t3 = c ^ t2;
    let t4 = c | t1;
    let t5 = d ^ t4;
    let x1 = t3 ^ t5;
    let t7 = t3 & t5;
    let t8 = t2 ^ t7;
    let t9 = b | t8;
    let x3 = t5 ^ t9;
    let t11 = b | x3;
    let x0 = t8 ^ t11;
    let x2 = (d & t1) ^ (t3 ^ t11);
    [x0, x1, x2, x3]
}

pub(crate) fn sb7([a, b, c, d]: Words) -> Words {
    let t1 = b ^ c;
    let t2 = c & t1;
    let t3 = d ^ t2;
    let t4 = a ^ t3;
    let t5 = d | t1;
    let t6 = t4 & t5;
    let x1 = b ^ t6;
    let t8 = t3 | x1;
    let t9 = a & t4;
    let x3 = t1 ^ t9;
    let t11 = t4 ^ t8;
    let t12 = x3 & t11;
    let x2 = t3 ^ t12;
    let x0 = !t11 ^ (x3 & x2);
    [x0, x1, x2, x3]
}

pub(crate) fn ib7([a, b, c, d]: Words) -> Words {
    let t3 = c | (a & b);
    let t4 = d & (a | b);
    let x3 = t3 ^ t4;
    let t6 = !d;
    let t7 = b ^ t4;
    let t9 = t7 | (x3 ^ t6);
    let x1 = a ^ t9;
    let x0 = (c ^ t7) ^ (d | x1);
    let x2 = (t3 ^ x1) ^ (x0 ^ (a & x3));
    [x0, x1, x2, x3]
}

#[inline]
pub(crate) fn linear_transform([x0, x1, x2, x3]: Words) -> Words {
    let x0 = x0.rotate_left(13);
    let x2 = x2.rotate_left(3);
    let x1 = x1 ^ x0 ^ x2;
    let x3 = x3 ^ x2 ^ (x0 << 3);
    let x1 = x1.rotate_left(1);
    let x3 = x3.rotate_left(7);
    let x0 = x0 ^ x1 ^ x3;
    let x2 = x2 ^ x3 ^ (x1 << 7);
    let x0 = x0.rotate_left(5);
    let x2 = x2.rotate_left(22);
    [x0, x1, x2, x3]
}

#[inline]
pub(crate) fn linear_transform_inv([x0, x1, x2, x3]: Words) -> Words {
    let x2 = x2.rotate_right(22);
    let x0 = x0.rotate_right(5);
    let x2 = x2 ^ x3 ^ (x1 << 7);
    let x0 = x0 ^ x1 ^ x3;
    let x3 = x3.rotate_right(7);
    let x1 = x1.rotate_right(1);
    let x3 = x3 ^ x2 ^ (x0 << 3);
    let x1 = x1 ^ x0 ^ x2;
    let x2 = x2.rotate_right(3);
    let x0 = x0.rotate_right(13);
    [x0, x1, x2, x3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serpent::tables;

    fn gather_nibble(words: &Words, bit_idx: usize) -> u8 {
        let mut output = 0u8;
        for (i, word) in words.iter().enumerate() {
            let bit = ((word >> bit_idx) & 1) as u8;
            output |= bit << i;
        }
        output
    }

    fn scatter_nibble(nibble: u8, words: &mut Words, out_bit_idx: usize) {
        for (i, word) in words.iter_mut().enumerate() {
            let bit = u32::from((nibble >> i) & 1);
            *word |= bit << out_bit_idx;
        }
    }

    /// Applies a 16-entry truth table to each of the 32 bit columns.
    fn apply_table(table: &[u8; 16], words: Words) -> Words {
        let mut output = [0u32; 4];
        for j in 0..32 {
            let nibble = gather_nibble(&words, j);
            scatter_nibble(table[nibble as usize], &mut output, j);
        }
        output
    }

    /// Every nibble value appears in some column of these words.
    fn all_nibbles() -> Words {
        let mut words = [0u32; 4];
        for j in 0..32 {
            scatter_nibble((j % 16) as u8, &mut words, j);
        }
        words
    }

    fn pseudo_random_words() -> impl Iterator<Item = Words> {
        let mut s = 0x2545_f491u32;
        (0..64).map(move |_| {
            let mut next = || {
                s ^= s << 13;
                s ^= s >> 17;
                s ^= s << 5;
                s
            };
            [next(), next(), next(), next()]
        })
    }

    #[test]
    fn forward_circuits_match_truth_tables() {
        for (i, (sbox, table)) in SBOX.iter().zip(tables::SBOX.iter()).enumerate() {
            assert_eq!(sbox(all_nibbles()), apply_table(table, all_nibbles()), "S{}", i);
            for words in pseudo_random_words() {
                assert_eq!(sbox(words), apply_table(table, words), "S{}", i);
            }
        }
    }

    #[test]
    fn inverse_circuits_match_truth_tables() {
        for (i, (sbox, table)) in SBOX_INV.iter().zip(tables::SBOX_INV.iter()).enumerate() {
            assert_eq!(sbox(all_nibbles()), apply_table(table, all_nibbles()), "S{}^-1", i);
            for words in pseudo_random_words() {
                assert_eq!(sbox(words), apply_table(table, words), "S{}^-1", i);
            }
        }
    }

    #[test]
    fn inverse_tables_invert_forward_tables() {
        for (forward, inverse) in tables::SBOX.iter().zip(tables::SBOX_INV.iter()) {
            for x in 0..16 {
                assert_eq!(inverse[forward[x] as usize] as usize, x);
            }
        }
    }

    #[test]
    fn linear_transform_round_trip() {
        for words in pseudo_random_words() {
            assert_eq!(linear_transform_inv(linear_transform(words)), words);
            assert_eq!(linear_transform(linear_transform_inv(words)), words);
        }
    }
}

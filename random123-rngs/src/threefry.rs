use bitgen_core::{BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{RngCore, SeedableRng};

use crate::common::random123_generator;

const ROUNDS: usize = 20;

// Threefish key-schedule parity constants
const PARITY64: u64 = 0x1bd1_1bda_a9fc_1a22;
const PARITY32: u32 = 0x1bd1_1bda;

const R4X64: [[u32; 2]; 8] =
    [[14, 16], [52, 57], [23, 40], [5, 37], [25, 33], [46, 12], [58, 22], [32, 32]];
const R4X32: [[u32; 2]; 8] =
    [[10, 26], [11, 21], [13, 27], [23, 5], [6, 20], [17, 11], [25, 10], [18, 20]];
const R2X64: [u32; 8] = [16, 42, 12, 31, 16, 32, 24, 21];
const R2X32: [u32; 8] = [13, 15, 26, 6, 17, 29, 16, 24];

macro_rules! threefry4_block {
    ($name:ident, $word:ty, $rot:ident, $parity:ident) => {
        pub(crate) fn $name(ctr: &[$word; 4], key: &[$word; 4]) -> [$word; 4] {
            let mut ks: [$word; 5] = [key[0], key[1], key[2], key[3], $parity];
            for &k in key {
                ks[4] ^= k;
            }
            let mut x = [
                ctr[0].wrapping_add(ks[0]),
                ctr[1].wrapping_add(ks[1]),
                ctr[2].wrapping_add(ks[2]),
                ctr[3].wrapping_add(ks[3]),
            ];
            for round in 0..ROUNDS {
                let r = $rot[round % 8];
                if round % 2 == 0 {
                    x[0] = x[0].wrapping_add(x[1]);
                    x[1] = x[1].rotate_left(r[0]) ^ x[0];
                    x[2] = x[2].wrapping_add(x[3]);
                    x[3] = x[3].rotate_left(r[1]) ^ x[2];
                } else {
                    x[0] = x[0].wrapping_add(x[3]);
                    x[3] = x[3].rotate_left(r[0]) ^ x[0];
                    x[2] = x[2].wrapping_add(x[1]);
                    x[1] = x[1].rotate_left(r[1]) ^ x[2];
                }
                if (round + 1) % 4 == 0 {
                    let inject = (round + 1) / 4;
                    for i in 0..4 {
                        x[i] = x[i].wrapping_add(ks[(inject + i) % 5]);
                    }
                    x[3] = x[3].wrapping_add(inject as $word);
                }
            }
            x
        }
    };
}

macro_rules! threefry2_block {
    ($name:ident, $word:ty, $rot:ident, $parity:ident) => {
        pub(crate) fn $name(ctr: &[$word; 2], key: &[$word; 2]) -> [$word; 2] {
            let ks: [$word; 3] = [key[0], key[1], $parity ^ key[0] ^ key[1]];
            let mut x = [ctr[0].wrapping_add(ks[0]), ctr[1].wrapping_add(ks[1])];
            for round in 0..ROUNDS {
                x[0] = x[0].wrapping_add(x[1]);
                x[1] = x[1].rotate_left($rot[round % 8]) ^ x[0];
                if (round + 1) % 4 == 0 {
                    let inject = (round + 1) / 4;
                    x[0] = x[0].wrapping_add(ks[inject % 3]);
                    x[1] = x[1]
                        .wrapping_add(ks[(inject + 1) % 3])
                        .wrapping_add(inject as $word);
                }
            }
            x
        }
    };
}

threefry4_block!(threefry4x64_block, u64, R4X64, PARITY64);
threefry4_block!(threefry4x32_block, u32, R4X32, PARITY32);
threefry2_block!(threefry2x64_block, u64, R2X64, PARITY64);
threefry2_block!(threefry2x32_block, u32, R2X32, PARITY32);

random123_generator!(
    ThreeFry4x64,
    ThreeFry4x64State,
    "ThreeFry4x64",
    u64,
    64,
    4,
    4,
    threefry4x64_block,
    generate_u64,
    "ThreeFry 4x64 with 20 add/rotate/xor rounds per 256-bit block."
);

random123_generator!(
    ThreeFry4x32,
    ThreeFry4x32State,
    "ThreeFry4x32",
    u32,
    32,
    4,
    4,
    threefry4x32_block,
    generate_u32,
    "ThreeFry 4x32 with 20 add/rotate/xor rounds per 128-bit block."
);

random123_generator!(
    ThreeFry2x64,
    ThreeFry2x64State,
    "ThreeFry2x64",
    u64,
    64,
    2,
    2,
    threefry2x64_block,
    generate_u64,
    "ThreeFry 2x64 with 20 add/rotate/xor rounds per 128-bit block."
);

random123_generator!(
    ThreeFry2x32,
    ThreeFry2x32State,
    "ThreeFry2x32",
    u32,
    32,
    2,
    2,
    threefry2x32_block,
    generate_u32,
    "ThreeFry 2x32 with 20 add/rotate/xor rounds per 64-bit block."
);

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    // Random123 known-answer vector for all-zero counter and key
    #[test]
    fn threefry4x64_zero_vector() {
        assert_eq!(
            threefry4x64_block(&[0; 4], &[0; 4]),
            [
                0x09218ebde6c85537,
                0x55941f5266d86105,
                0x4bd25e16282434dc,
                0xee29ec846bd2e40b,
            ]
        );
    }

    #[test]
    fn counter_only_advance_carries() {
        let mut gen = ThreeFry4x64::seeded(0);
        gen.advance(&[1], true);
        assert_eq!(gen.state().state.counter, [1, 0, 0, 0]);
        gen.advance(&[1], true);
        assert_eq!(gen.state().state.counter, [2, 0, 0, 0]);
        gen.advance(&[0, 1], true);
        assert_eq!(gen.state().state.counter, [2, 1, 0, 0]);
        let mut gen = ThreeFry4x64::seeded(0);
        gen.advance(&[0, 0, 1], true);
        assert_eq!(gen.state().state.counter, [0, 0, 1, 0]);
    }

    #[test]
    fn word_advance_equals_stepping() {
        for (warmup, step) in [(0usize, 0u64), (0, 1), (3, 4), (21, 9)] {
            let mut walker = ThreeFry4x64::seeded(2);
            let mut jumper = ThreeFry4x64::seeded(2);
            walker.discard_raw(warmup);
            jumper.discard_raw(warmup);
            walker.discard_raw(step as usize);
            jumper.advance(&[step], false);
            assert_eq!(walker.next_raw(), jumper.next_raw(), "step {step}");
        }
    }

    #[test]
    fn keyed_construction_reproduces_the_stream() {
        let mut gen = ThreeFry2x32::seeded(6);
        let expect = gen.random_raw(6);
        let record = gen.state();
        let mut keyed = ThreeFry2x32::with_key_counter(record.state.key, [0; 2]);
        assert_eq!(keyed.random_raw(6), expect);
    }

    #[test]
    fn variants_disagree() {
        let mut a = ThreeFry4x64::seeded(1);
        let mut b = ThreeFry4x32::seeded(1);
        assert_ne!(a.next_raw(), b.next_raw());
    }
}

use bitgen_core::{BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{RngCore, SeedableRng};

use crate::common::{mulhilo_u32, mulhilo_u64, random123_generator};

const ROUNDS: usize = 10;

// round multipliers and Weyl key increments, per the Random123 reference
const M4X64: [u64; 2] = [0xd2e7_470e_e14c_6c93, 0xca5a_8263_9512_1157];
const W4X64: [u64; 2] = [0x9e37_79b9_7f4a_7c15, 0xbb67_ae85_84ca_a73b];
const M2X64: u64 = 0xd2b7_4407_b1ce_6e93;
const M4X32: [u32; 2] = [0xd251_1f53, 0xcd9e_8d57];
const W4X32: [u32; 2] = [0x9e37_79b9, 0xbb67_ae85];
const M2X32: u32 = 0xd256_d193;

macro_rules! philox4_block {
    ($name:ident, $word:ty, $mulhilo:ident, $m:ident, $w:ident) => {
        pub(crate) fn $name(ctr: &[$word; 4], key: &[$word; 2]) -> [$word; 4] {
            let mut x = *ctr;
            let mut k = *key;
            for round in 0..ROUNDS {
                if round > 0 {
                    k[0] = k[0].wrapping_add($w[0]);
                    k[1] = k[1].wrapping_add($w[1]);
                }
                let (hi0, lo0) = $mulhilo($m[0], x[0]);
                let (hi1, lo1) = $mulhilo($m[1], x[2]);
                x = [hi1 ^ x[1] ^ k[0], lo1, hi0 ^ x[3] ^ k[1], lo0];
            }
            x
        }
    };
}

macro_rules! philox2_block {
    ($name:ident, $word:ty, $mulhilo:ident, $m:ident, $w:expr) => {
        pub(crate) fn $name(ctr: &[$word; 2], key: &[$word; 1]) -> [$word; 2] {
            let mut x = *ctr;
            let mut k = key[0];
            for round in 0..ROUNDS {
                if round > 0 {
                    k = k.wrapping_add($w);
                }
                let (hi, lo) = $mulhilo($m, x[0]);
                x = [hi ^ k ^ x[1], lo];
            }
            x
        }
    };
}

philox4_block!(philox4x64_block, u64, mulhilo_u64, M4X64, W4X64);
philox4_block!(philox4x32_block, u32, mulhilo_u32, M4X32, W4X32);
philox2_block!(philox2x64_block, u64, mulhilo_u64, M2X64, W4X64[0]);
philox2_block!(philox2x32_block, u32, mulhilo_u32, M2X32, W4X32[0]);

random123_generator!(
    Philox4x64,
    Philox4x64State,
    "Philox4x64",
    u64,
    64,
    4,
    2,
    philox4x64_block,
    generate_u64,
    "Philox 4x64 with 10 multiply/xor rounds per 256-bit block."
);

random123_generator!(
    Philox4x32,
    Philox4x32State,
    "Philox4x32",
    u32,
    32,
    4,
    2,
    philox4x32_block,
    generate_u32,
    "Philox 4x32 with 10 multiply/xor rounds per 128-bit block."
);

random123_generator!(
    Philox2x64,
    Philox2x64State,
    "Philox2x64",
    u64,
    64,
    2,
    1,
    philox2x64_block,
    generate_u64,
    "Philox 2x64 with 10 multiply/xor rounds per 128-bit block."
);

random123_generator!(
    Philox2x32,
    Philox2x32State,
    "Philox2x32",
    u32,
    32,
    2,
    1,
    philox2x32_block,
    generate_u32,
    "Philox 2x32 with 10 multiply/xor rounds per 64-bit block."
);

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    // Random123 known-answer vectors for all-zero counter and key
    #[test]
    fn philox4x32_zero_vector() {
        assert_eq!(
            philox4x32_block(&[0; 4], &[0; 2]),
            [0x6627e8d5, 0xe169c58d, 0xbc57ac4c, 0x9b00dbd8]
        );
    }

    #[test]
    fn philox4x64_zero_vector() {
        assert_eq!(
            philox4x64_block(&[0; 4], &[0; 2]),
            [
                0x16554d9eca36314c,
                0xdb20fe9d672d0fdc,
                0xd7e772cee186176b,
                0x7e68b68aec7ba23b,
            ]
        );
    }

    #[test]
    fn counter_increments_before_encryption() {
        let mut gen = Philox4x64::with_key_counter([0; 2], [0; 4]);
        let first = gen.next_raw();
        assert_eq!(first, philox4x64_block(&[1, 0, 0, 0], &[0; 2])[0]);
    }

    #[test]
    fn counter_only_advance_is_plain_addition() {
        let mut gen = Philox4x64::seeded(0);
        gen.advance(&[0, 1], true); // 2^64
        assert_eq!(gen.state().state.counter, [0, 1, 0, 0]);
        let mut gen = Philox4x64::seeded(0);
        gen.advance(&[u64::MAX], true);
        assert_eq!(gen.state().state.counter, [u64::MAX, 0, 0, 0]);
        let mut gen = Philox4x64::seeded(0);
        gen.advance(&[0, 0, 1], true); // 2^128
        assert_eq!(gen.state().state.counter, [0, 0, 1, 0]);
    }

    #[test]
    fn word_advance_equals_stepping() {
        for (warmup, step) in [(0usize, 0u64), (0, 1), (5, 7), (13, 34159)] {
            let mut walker = Philox4x64::seeded(5);
            let mut jumper = Philox4x64::seeded(5);
            walker.discard_raw(warmup);
            jumper.discard_raw(warmup);
            walker.discard_raw(step as usize);
            jumper.advance(&[step], false);
            assert_eq!(walker.next_raw(), jumper.next_raw(), "step {step}");
        }
    }

    #[test]
    fn word_advance_equals_stepping_4x32() {
        for (warmup, step) in [(0usize, 0u64), (2, 3), (9, 8), (34, 159)] {
            let mut walker = Philox4x32::seeded(5);
            let mut jumper = Philox4x32::seeded(5);
            walker.discard_raw(warmup);
            jumper.discard_raw(warmup);
            walker.discard_raw(step as usize);
            jumper.advance(&[step], false);
            assert_eq!(walker.next_raw(), jumper.next_raw(), "step {step}");
        }
    }

    #[test]
    fn keyed_construction_matches_seeded_state() {
        let mut gen = Philox4x64::seeded(3);
        gen.discard_raw(7);
        let record = gen.state();
        let mut keyed =
            Philox4x64::with_key_counter(record.state.key, record.state.counter);
        keyed.try_set_state(&record).unwrap();
        assert_eq!(keyed.random_raw(12), gen.random_raw(12));
    }

    #[test]
    fn jumped_mid_block_keeps_the_offset() {
        let mut gen = Philox2x64::seeded(4);
        gen.discard_raw(3);
        let hop = gen.jumped(1);
        // same intra-block offset, counter moved by 2^64 (half the space)
        assert_eq!(hop.state().state.buffer_pos, gen.state().state.buffer_pos);
        let mut expect = gen.state().state.counter;
        expect[1] = expect[1].wrapping_add(1);
        assert_eq!(hop.state().state.counter, expect);
    }
}

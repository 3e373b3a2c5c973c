use bitgen_core::{BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{RngCore, SeedableRng};

use crate::common::impl_xoshiro_generator;

/// xoroshiro128+: 128-bit state, sum output.
///
/// The weakest low bits of any small generator here; fine for
/// floating-point draws, which only consume the top 53 bits.
#[derive(Clone, Debug)]
pub struct Xoroshiro128 {
    s: [u64; 2],
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

impl Xoroshiro128 {
    const JUMP: [u64; 2] = [0xdf90_0294_d8f5_54a5, 0x1708_65df_4b32_01fc];

    #[inline]
    fn next_word(&mut self) -> u64 {
        let [s0, mut s1] = self.s;
        let out = s0.wrapping_add(s1);
        s1 ^= s0;
        self.s[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s[1] = s1.rotate_left(37);
        out
    }

    fn jump_once(&mut self) {
        let mut acc = [0u64; 2];
        for mask in Self::JUMP {
            for bit in 0..64 {
                if mask & (1 << bit) != 0 {
                    acc[0] ^= self.s[0];
                    acc[1] ^= self.s[1];
                }
                self.next_word();
            }
        }
        self.s = acc;
    }
}

impl_xoshiro_generator!(
    Xoroshiro128,
    Xoroshiro128State,
    "Xoroshiro128",
    2,
    "Each iteration leaps 2^64 draws."
);

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    #[test]
    fn update_from_known_state() {
        let mut gen = Xoroshiro128 {
            s: [1, 2],
            carry: Uint32Carry::empty(),
            seed_seq: None,
        };
        // output precedes the update
        assert_eq!(gen.next_word(), 3);
        // s1' = (2 ^ 1).rotl(37); s0' = 1.rotl(24) ^ 3 ^ (3 << 16)
        assert_eq!(gen.s[1], 3u64.rotate_left(37));
        assert_eq!(gen.s[0], (1u64 << 24) ^ 3 ^ (3 << 16));
    }

    #[test]
    fn jump_diverges_then_is_deterministic() {
        let gen = Xoroshiro128::seeded(3);
        let mut a = gen.jumped(1);
        let mut b = gen.jumped(1);
        let mut near = gen.clone();
        assert_eq!(a.random_raw(8), b.random_raw(8));
        assert_ne!(a.random_raw(8), near.random_raw(8));
    }

    #[test]
    fn state_round_trip() {
        let mut gen = Xoroshiro128::seeded(5);
        gen.next_u32();
        let saved = gen.state();
        let expect = gen.random_raw(4);
        let mut other = Xoroshiro128::seeded(0);
        other.try_set_state(&saved).unwrap();
        assert_eq!(other.random_raw(4), expect);
    }
}

use bitgen_core::{BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// xorshift1024*: sixteen words stepped through a rotating pointer, with a
/// multiplicative output scramble.
#[derive(Clone, Debug)]
pub struct Xorshift1024 {
    s: [u64; 16],
    p: usize,
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

/// Serializable xorshift1024* state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Xorshift1024State {
    /// The sixteen state words.
    pub s: [u64; 16],
    /// The word pointer, in `[0, 16)`.
    pub p: u32,
}

impl Xorshift1024 {
    const JUMP: [u64; 16] = [
        0x8424_2f96_eca9_c41d,
        0xa3c6_5b87_76f9_6855,
        0x5b34_a39f_070b_5837,
        0x4489_affc_e4f3_1a1e,
        0x2ffe_eb0a_4831_6f40,
        0xdc2d_9891_fe68_c022,
        0x3659_132b_b12f_ea70,
        0xaac1_7d8e_fa43_cab8,
        0xc4cb_8155_9098_9b13,
        0x5ee9_7528_3d71_c93b,
        0x6915_48c8_6c1b_d540,
        0x7910_c41d_10a1_e6a5,
        0x0b5f_c645_63b3_e2a8,
        0x047f_7684_e9fc_949d,
        0xb991_81f2_d8f6_85ca,
        0x2846_00e3_f30e_38c3,
    ];

    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut s = [0u64; 16];
        seed_seq.fill_u64(&mut s);
        if s.iter().all(|&w| w == 0) {
            s[0] = crate::common::splitmix64(0).0;
        }
        Self { s, p: 0, carry: Uint32Carry::empty(), seed_seq: Some(seed_seq.clone()) }
    }

    /// Expand a single word into the full state with SplitMix64.
    pub fn from_u64(seed: u64) -> Self {
        let mut sm = seed;
        let mut s = [0u64; 16];
        for slot in s.iter_mut() {
            let (word, next) = crate::common::splitmix64(sm);
            *slot = word;
            sm = next;
        }
        Self { s, p: 0, carry: Uint32Carry::empty(), seed_seq: None }
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 31;
        self.s[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.s[self.p].wrapping_mul(1_181_783_497_276_652_981)
    }

    fn jump_once(&mut self) {
        let mut acc = [0u64; 16];
        for mask in Self::JUMP {
            for bit in 0..64 {
                if mask & (1 << bit) != 0 {
                    for (k, a) in acc.iter_mut().enumerate() {
                        *a ^= self.s[(k + self.p) & 15];
                    }
                }
                self.next_word();
            }
        }
        for (k, a) in acc.iter().enumerate() {
            self.s[(k + self.p) & 15] = *a;
        }
    }
}

impl RngCore for Xorshift1024 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut carry = self.carry;
        let word = carry.next_u32(|| self.next_word());
        self.carry = carry;
        word
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift1024 {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; 8];
        for (w, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::from_seed_seq(&SeedSequence::from_entropy_words(&words))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

impl BitGenerator for Xorshift1024 {
    const TAG: &'static str = "Xorshift1024";
    const NATIVE_BITS: u32 = 64;
    type State = Xorshift1024State;

    fn next_raw(&mut self) -> u64 {
        self.next_word()
    }

    fn next_double(&mut self) -> f64 {
        bitgen_core::conv::double_from_u64(self.next_word())
    }

    fn state(&self) -> StateRecord<Xorshift1024State> {
        StateRecord::new(
            Self::TAG,
            Xorshift1024State { s: self.s, p: self.p as u32 },
            self.carry,
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<Xorshift1024State>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        if record.state.p >= 16 {
            return Err(Error::InvalidState("Xorshift1024 pointer exceeds the state"));
        }
        self.s = record.state.s;
        self.p = record.state.p as usize;
        self.carry = record.carry();
        Ok(())
    }
}

impl Jumpable for Xorshift1024 {
    /// Each iteration leaps 2^512 draws.
    fn jumped(&self, iter: u64) -> Self {
        let mut out = self.clone();
        out.carry = Uint32Carry::empty();
        for _ in 0..iter {
            out.jump_once();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    #[test]
    fn pointer_wraps_every_sixteen_draws() {
        let mut gen = Xorshift1024::seeded(1);
        gen.discard_raw(16);
        assert_eq!(gen.state().state.p, 0);
        gen.discard_raw(5);
        assert_eq!(gen.state().state.p, 5);
    }

    #[test]
    fn state_round_trip_mid_cycle() {
        let mut gen = Xorshift1024::seeded(2);
        gen.discard_raw(11);
        let saved = gen.state();
        let expect = gen.random_raw(8);
        let mut other = Xorshift1024::seeded(9);
        other.try_set_state(&saved).unwrap();
        assert_eq!(other.random_raw(8), expect);
    }

    #[test]
    fn bad_pointer_rejected() {
        let mut gen = Xorshift1024::seeded(2);
        let mut record = gen.state();
        record.state.p = 16;
        assert!(matches!(gen.try_set_state(&record), Err(Error::InvalidState(_))));
    }

    #[test]
    fn jump_determinism() {
        let gen = Xorshift1024::seeded(14);
        let mut a = gen.jumped(1);
        let mut b = gen.jumped(1);
        assert_eq!(a.random_raw(20), b.random_raw(20));
    }
}

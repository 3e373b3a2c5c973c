use bitgen_core::{conv, BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::lcg_skip_u128;

const MULT: u128 = 0x2360_ed05_1fc6_5da4_4385_df64_9fcc_f645;
/// Golden-gamma spacing between [`Jumpable::jumped`] streams.
const JUMP_DISTANCE: u128 = 0x9e37_79b9_7f4a_7c15 << 64;

/// PCG64 (XSL-RR): 128-bit LCG state folded to 64-bit outputs.
///
/// The output rotates the XOR of the state halves by the top state bits;
/// unlike PCG32 the permutation reads the post-step state.
#[derive(Clone, Debug)]
pub struct Pcg64 {
    state: u128,
    inc: u128,
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

/// Serializable PCG64 state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg64State {
    /// LCG state.
    pub state: u128,
    /// Stream increment (odd).
    pub inc: u128,
}

impl Pcg64 {
    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut words = [0u64; 4];
        seed_seq.fill_u64(&mut words);
        let state = u128::from(words[0]) | (u128::from(words[1]) << 64);
        let seq = u128::from(words[2]) | (u128::from(words[3]) << 64);
        let mut gen = Self::srandom(state, seq);
        gen.seed_seq = Some(seed_seq.clone());
        gen
    }

    /// The reference seeding: `initstate` positions the stream selected by
    /// `initseq`.
    pub fn srandom(initstate: u128, initseq: u128) -> Self {
        let mut gen = Self {
            state: 0,
            inc: (initseq << 1) | 1,
            carry: Uint32Carry::empty(),
            seed_seq: None,
        };
        gen.step();
        gen.state = gen.state.wrapping_add(initstate);
        gen.step();
        gen
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    /// Reposition by `delta` output words; the distance wraps at the
    /// period 2^128, so `delta.wrapping_neg()` steps backwards.  The
    /// parked 32-bit carry is dropped.
    pub fn advance(&mut self, delta: u128) {
        let (mult, plus) = lcg_skip_u128(MULT, self.inc, delta);
        self.state = mult.wrapping_mul(self.state).wrapping_add(plus);
        self.carry.clear();
    }

    #[inline]
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULT).wrapping_add(self.inc);
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.step();
        let rot = (self.state >> 122) as u32;
        let xored = ((self.state >> 64) as u64) ^ (self.state as u64);
        xored.rotate_right(rot)
    }
}

impl RngCore for Pcg64 {
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
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg64 {
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

impl BitGenerator for Pcg64 {
    const TAG: &'static str = "PCG64";
    const NATIVE_BITS: u32 = 64;
    type State = Pcg64State;

    fn next_raw(&mut self) -> u64 {
        self.next_word()
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_word())
    }

    fn state(&self) -> StateRecord<Pcg64State> {
        StateRecord::new(
            Self::TAG,
            Pcg64State { state: self.state, inc: self.inc },
            self.carry,
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<Pcg64State>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        if record.state.inc & 1 == 0 {
            return Err(Error::InvalidState("PCG64 increment must be odd"));
        }
        self.state = record.state.state;
        self.inc = record.state.inc;
        self.carry = record.carry();
        Ok(())
    }
}

impl Jumpable for Pcg64 {
    /// Each iteration leaps `0x9e3779b97f4a7c15 * 2^64` draws.
    fn jumped(&self, iter: u64) -> Self {
        let mut out = self.clone();
        out.advance(u128::from(iter).wrapping_mul(JUMP_DISTANCE));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    #[test]
    fn advance_equals_stepping() {
        for (warmup, step) in [(0usize, 0u128), (0, 1), (7, 9), (100, 34159)] {
            let mut walker = Pcg64::seeded(3);
            let mut jumper = Pcg64::seeded(3);
            walker.discard_raw(warmup);
            jumper.discard_raw(warmup);
            walker.discard_raw(step as usize);
            jumper.advance(step);
            assert_eq!(walker.next_u64(), jumper.next_u64());
        }
    }

    #[test]
    fn advance_symmetry_around_the_period() {
        // stepping back by phi * 2^64 equals wrapping forward by 2^128 - phi * 2^64
        let step: u128 = 0x9e37_79b9_7f4a_7c15 << 64;
        let mut back = Pcg64::seeded(11);
        let mut wrapped = Pcg64::seeded(11);
        back.advance(step.wrapping_neg());
        wrapped.advance(u128::MAX - step + 1);
        assert_eq!(back.next_u64(), wrapped.next_u64());
    }

    #[test]
    fn advance_is_invertible() {
        let mut gen = Pcg64::seeded(5);
        let expect = gen.clone().next_u64();
        gen.advance(123_456_789_012_345);
        gen.advance(123_456_789_012_345u128.wrapping_neg());
        assert_eq!(gen.next_u64(), expect);
    }

    #[test]
    fn advance_clears_carry() {
        let mut gen = Pcg64::seeded(2);
        gen.next_u32();
        assert!(gen.state().has_uint32);
        gen.advance(1);
        assert!(!gen.state().has_uint32);
    }

    #[test]
    fn carry_round_trip_through_state() {
        let mut gen = Pcg64::seeded(6);
        gen.next_u32();
        let saved = gen.state();
        let expect = gen.next_u32();
        let mut other = Pcg64::seeded(0);
        other.try_set_state(&saved).unwrap();
        assert_eq!(other.next_u32(), expect);
    }
}

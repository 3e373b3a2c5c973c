use bitgen_core::{conv, BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::lcg_skip_u64;

const MULT: u64 = 6_364_136_223_846_793_005;
/// Golden-gamma spacing between [`Jumpable::jumped`] streams.
const JUMP_DISTANCE: u64 = 0x9e37_79b9_7f4a_7c16;

/// PCG32 (XSH-RR): 64-bit LCG state permuted down to 32-bit outputs.
///
/// The increment selects the stream and is always odd.
#[derive(Clone, Debug)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
    seed_seq: Option<SeedSequence>,
}

/// Serializable PCG32 state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Pcg32State {
    /// LCG state.
    pub state: u64,
    /// Stream increment (odd).
    pub inc: u64,
}

impl Pcg32 {
    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut words = [0u64; 2];
        seed_seq.fill_u64(&mut words);
        let mut gen = Self::srandom(words[0], words[1]);
        gen.seed_seq = Some(seed_seq.clone());
        gen
    }

    /// The reference seeding: `initstate` positions the stream selected by
    /// `initseq`.
    pub fn srandom(initstate: u64, initseq: u64) -> Self {
        let mut gen = Self { state: 0, inc: (initseq << 1) | 1, seed_seq: None };
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
    /// period 2^64, so `delta.wrapping_neg()` steps backwards.
    pub fn advance(&mut self, delta: u64) {
        let (mult, plus) = lcg_skip_u64(MULT, self.inc, delta);
        self.state = mult.wrapping_mul(self.state).wrapping_add(plus);
    }

    #[inline]
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULT).wrapping_add(self.inc);
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let high = self.next_word();
        let low = self.next_word();
        (u64::from(high) << 32) | u64::from(low)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; 4];
        for (w, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::from_seed_seq(&SeedSequence::from_entropy_words(&words))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

impl BitGenerator for Pcg32 {
    const TAG: &'static str = "PCG32";
    const NATIVE_BITS: u32 = 32;
    type State = Pcg32State;

    fn next_raw(&mut self) -> u64 {
        u64::from(self.next_word())
    }

    fn next_double(&mut self) -> f64 {
        let a = self.next_word();
        let b = self.next_word();
        conv::double_from_u32_pair(a, b)
    }

    fn state(&self) -> StateRecord<Pcg32State> {
        StateRecord::new(
            Self::TAG,
            Pcg32State { state: self.state, inc: self.inc },
            Uint32Carry::empty(),
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<Pcg32State>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        if record.state.inc & 1 == 0 {
            return Err(Error::InvalidState("PCG32 increment must be odd"));
        }
        self.state = record.state.state;
        self.inc = record.state.inc;
        Ok(())
    }
}

impl Jumpable for Pcg32 {
    /// Each iteration leaps `0x9e3779b97f4a7c16` draws.
    fn jumped(&self, iter: u64) -> Self {
        let mut out = self.clone();
        out.advance(iter.wrapping_mul(JUMP_DISTANCE));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    // pcg32-demo reference output for srandom(42, 54)
    #[test]
    fn demo_reference() {
        let mut gen = Pcg32::srandom(42, 54);
        assert_eq!(
            gen.random_raw(6),
            [0xa15c02b7, 0x7b47f409, 0xba1d3330, 0x83d2f293, 0xbfa4784b, 0xcbed606e]
        );
    }

    #[test]
    fn advance_equals_stepping() {
        for (warmup, step) in [(0usize, 0u64), (0, 1), (3, 5), (19, 34159)] {
            let mut walker = Pcg32::seeded(1);
            let mut jumper = Pcg32::seeded(1);
            walker.discard_raw(warmup);
            jumper.discard_raw(warmup);
            walker.discard_raw(step as usize);
            jumper.advance(step);
            assert_eq!(walker.next_u32(), jumper.next_u32());
        }
    }

    #[test]
    fn advance_symmetry_around_the_period() {
        let step = 0x9e37_79b9_7f4a_7c16u64;
        let mut back = Pcg32::seeded(7);
        let mut wrapped = Pcg32::seeded(7);
        back.advance(step.wrapping_neg());
        wrapped.advance(u64::MAX - step + 1);
        assert_eq!(back.next_u32(), wrapped.next_u32());
    }

    #[test]
    fn even_increment_rejected() {
        let mut gen = Pcg32::seeded(1);
        let mut record = gen.state();
        record.state.inc &= !1;
        assert!(matches!(gen.try_set_state(&record), Err(Error::InvalidState(_))));
    }
}

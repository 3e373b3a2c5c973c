//! The ChaCha keystream as a bit generator.
//!
//! The 16-word state loads the `"expand 32-byte k"` constants, a 256-bit
//! key, a 64-bit block counter and a 64-bit stream id; each block applies
//! an even number of quarter-round double rounds (20 by default).  The
//! generator navigates with a 128-bit *word-position* counter: `advance`
//! is a wrapping add, so a whole-period step is the identity.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

use core::fmt;

use bitgen_core::{conv, counter, Error, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// State initialization constant ("expand 32-byte k").
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Number of 32-bit words per block.
const BLOCK_WORDS: u128 = 16;

const DEFAULT_ROUNDS: u32 = 20;

/// ChaCha bit generator.
#[derive(Clone)]
pub struct ChaCha {
    key: [u32; 8],
    stream: u64,
    rounds: u32,
    /// Word position within the 2^128-word period.
    ctr: u128,
    block: [u32; 16],
    seed_seq: Option<SeedSequence>,
}

/// Serializable ChaCha state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct ChaChaState {
    /// 256-bit key as eight little-endian words.
    pub key: [u32; 8],
    /// Current output block.
    pub block: [u32; 16],
    /// 128-bit word-position counter.
    pub ctr: u128,
    /// 64-bit stream id.
    pub stream: u64,
    /// Double-round count (even, positive).
    pub rounds: u32,
}

impl ChaCha {
    /// Seed through a [`SeedSequence`] built from `seed`, 20 rounds.
    pub fn seeded(seed: u64) -> Self {
        // 20 rounds always validate
        match Self::from_seed_seq(&SeedSequence::new(u128::from(seed)), DEFAULT_ROUNDS) {
            Ok(gen) => gen,
            Err(_) => unreachable!(),
        }
    }

    /// Seed from an existing [`SeedSequence`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] when `rounds` is zero or odd.
    pub fn from_seed_seq(seed_seq: &SeedSequence, rounds: u32) -> Result<Self, Error> {
        let mut key = [0u32; 8];
        seed_seq.fill_u32(&mut key);
        let mut gen = Self::with_key_counter(key, 0, 0, rounds)?;
        gen.seed_seq = Some(seed_seq.clone());
        Ok(gen)
    }

    /// Construct from explicit key material.  `counter` positions the
    /// stream in 32-bit words; `stream` selects one of 2^64 streams.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] when `rounds` is zero or odd.
    pub fn with_key_counter(
        key: [u32; 8],
        counter: u128,
        stream: u64,
        rounds: u32,
    ) -> Result<Self, Error> {
        if rounds == 0 || rounds % 2 != 0 {
            return Err(Error::InvalidValue("rounds must be even and positive"));
        }
        Ok(Self {
            key,
            stream,
            rounds,
            ctr: counter,
            block: [0; 16],
            seed_seq: None,
        })
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    /// Reposition by `delta` 32-bit draws (little-endian limbs), wrapping
    /// at the 2^128-word period.
    pub fn advance(&mut self, delta: &[u64]) {
        self.ctr = self.ctr.wrapping_add(counter::low_u128(delta));
        if self.ctr % BLOCK_WORDS != 0 {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let block_ctr = (self.ctr / BLOCK_WORDS) as u64;
        let mut x = [0u32; 16];
        x[..4].copy_from_slice(&CONSTANTS);
        x[4..12].copy_from_slice(&self.key);
        x[12] = block_ctr as u32;
        x[13] = (block_ctr >> 32) as u32;
        x[14] = self.stream as u32;
        x[15] = (self.stream >> 32) as u32;
        let initial = x;
        for _ in 0..self.rounds / 2 {
            // column rounds
            quarter_round(0, 4, 8, 12, &mut x);
            quarter_round(1, 5, 9, 13, &mut x);
            quarter_round(2, 6, 10, 14, &mut x);
            quarter_round(3, 7, 11, 15, &mut x);
            // diagonal rounds
            quarter_round(0, 5, 10, 15, &mut x);
            quarter_round(1, 6, 11, 12, &mut x);
            quarter_round(2, 7, 8, 13, &mut x);
            quarter_round(3, 4, 9, 14, &mut x);
        }
        for (word, init) in x.iter_mut().zip(initial.iter()) {
            *word = word.wrapping_add(*init);
        }
        self.block = x;
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        let idx = (self.ctr % BLOCK_WORDS) as usize;
        if idx == 0 {
            self.refresh();
        }
        self.ctr = self.ctr.wrapping_add(1);
        self.block[idx]
    }
}

#[inline(always)]
fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut [u32; 16]) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);
    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

impl RngCore for ChaCha {
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

impl SeedableRng for ChaCha {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut key = [0u32; 8];
        for (w, chunk) in key.iter_mut().zip(seed.chunks_exact(4)) {
            *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        match Self::with_key_counter(key, 0, 0, DEFAULT_ROUNDS) {
            Ok(gen) => gen,
            Err(_) => unreachable!(),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

impl BitGenerator for ChaCha {
    const TAG: &'static str = "ChaCha";
    const NATIVE_BITS: u32 = 64;
    type State = ChaChaState;

    fn next_raw(&mut self) -> u64 {
        let high = self.next_word();
        let low = self.next_word();
        (u64::from(high) << 32) | u64::from(low)
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_raw())
    }

    fn state(&self) -> StateRecord<ChaChaState> {
        StateRecord::new(
            Self::TAG,
            ChaChaState {
                key: self.key,
                block: self.block,
                ctr: self.ctr,
                stream: self.stream,
                rounds: self.rounds,
            },
            Uint32Carry::empty(),
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<ChaChaState>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        let s = &record.state;
        if s.rounds == 0 || s.rounds % 2 != 0 {
            return Err(Error::InvalidState("rounds must be even and positive"));
        }
        self.key = s.key;
        self.block = s.block;
        self.ctr = s.ctr;
        self.stream = s.stream;
        self.rounds = s.rounds;
        Ok(())
    }
}

impl Jumpable for ChaCha {
    /// Each iteration leaps 2^64 32-bit draws.
    fn jumped(&self, iter: u64) -> Self {
        let mut out = self.clone();
        out.advance(&[0, iter]);
        out
    }
}

#[cfg(feature = "zeroize")]
impl Drop for ChaCha {
    fn drop(&mut self) {
        self.key.zeroize();
        self.block.zeroize();
    }
}

impl fmt::Debug for ChaCha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha")
            .field("rounds", &self.rounds)
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    // Test vectors 1-2 from draft-nir-cfrg-chacha20-poly1305-04
    #[test]
    fn rfc_keystream_zero_key() {
        let mut gen = ChaCha::with_key_counter([0; 8], 0, 0, 20).unwrap();
        let mut words = [0u32; 16];
        for w in words.iter_mut() {
            *w = gen.next_u32();
        }
        assert_eq!(
            words,
            [
                0xade0b876, 0x903df1a0, 0xe56a5d40, 0x28bd8653, 0xb819d2bd, 0x1aed8da0,
                0xccef36a8, 0xc70d778b, 0x7c5941da, 0x8d485751, 0x3fe02477, 0x374ad8b8,
                0xf4b8436a, 0x1ca11815, 0x69b687c3, 0x8665eeb2,
            ]
        );
        for w in words.iter_mut() {
            *w = gen.next_u32();
        }
        assert_eq!(
            words,
            [
                0xbee7079f, 0x7a385155, 0x7c97ba98, 0x0d082d73, 0xa0290fcb, 0x6965e348,
                0x3e53c612, 0xed7aee32, 0x7621b729, 0x434ee69c, 0xb03371d5, 0xd539d874,
                0x281fed31, 0x45fb0a51, 0x1f0ae1ac, 0x6f4d794b,
            ]
        );
    }

    #[test]
    fn invalid_rounds_rejected() {
        assert!(matches!(
            ChaCha::with_key_counter([0; 8], 0, 0, 3),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            ChaCha::with_key_counter([0; 8], 0, 0, 0),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn advance_equals_stepping() {
        for step in [0u64, 1, 2, 5, 16, 33, 1000] {
            let mut walker = ChaCha::seeded(7);
            let mut jumper = ChaCha::seeded(7);
            for _ in 0..step {
                walker.next_u32();
            }
            jumper.advance(&[step]);
            assert_eq!(walker.next_u32(), jumper.next_u32(), "step {step}");
        }
    }

    #[test]
    fn advance_counts_32_bit_draws() {
        let mut words = ChaCha::seeded(9);
        let mut raws = ChaCha::seeded(9);
        let expect = [words.next_u32(), words.next_u32()];
        raws.advance(&[0]);
        let raw = raws.next_raw();
        assert_eq!(raw, (u64::from(expect[0]) << 32) | u64::from(expect[1]));
    }

    #[test]
    fn counter_wraps_to_identity() {
        let gen = ChaCha::seeded(3);
        let before = gen.state();
        let mut wrapped = gen.clone();
        wrapped.advance(&[0, 0, 1]); // 2^128 draws
        assert_eq!(wrapped.state(), before);
        let mut forward = gen.clone();
        forward.advance(&[0, 1]); // 2^64 draws
        assert_eq!(forward.state().state.ctr, 1u128 << 64);
    }

    #[test]
    fn eight_reduced_rounds_differ() {
        let mut full = ChaCha::with_key_counter([1; 8], 0, 0, 20).unwrap();
        let mut reduced = ChaCha::with_key_counter([1; 8], 0, 0, 8).unwrap();
        assert_ne!(full.next_u32(), reduced.next_u32());
    }

    #[test]
    fn streams_are_disjoint() {
        let mut a = ChaCha::with_key_counter([2; 8], 0, 0, 20).unwrap();
        let mut b = ChaCha::with_key_counter([2; 8], 0, 1, 20).unwrap();
        assert_ne!(a.random_raw(8), b.random_raw(8));
    }

    #[test]
    fn jumped_matches_manual_advance() {
        let gen = ChaCha::seeded(4);
        let mut jumped = gen.jumped(3);
        let mut advanced = gen.clone();
        advanced.advance(&[0, 3]);
        assert_eq!(jumped.next_u32(), advanced.next_u32());
    }
}

use alloc::vec::Vec;
use core::fmt;

use bitgen_core::{BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::jump::{horner, JumpWindow};
use crate::jump_data::DSFMT_JUMP_2P128;

const N: usize = 191;
const POS1: usize = 117;
const SL1: u32 = 19;
const SR: u32 = 12;
const MSK1: u64 = 0x000f_faff_ffff_fb3f;
const MSK2: u64 = 0x000f_fdff_fc90_fffd;
const FIX1: u64 = 0x9001_4964_b32f_4329;
const FIX2: u64 = 0x3b8d_12ac_548a_7c7a;
const PCV1: u64 = 0x3d84_e1ac_0dc8_2880;
const PCV2: u64 = 0x0000_0000_0000_0001;
const LOW_MASK: u64 = 0x000f_ffff_ffff_ffff;
const HIGH_CONST: u64 = 0x3ff0_0000_0000_0000;
/// Doubles produced per refill.
const BUFFER: usize = 2 * N;

/// The double-precision SIMD Mersenne twister (dSFMT-19937).
///
/// State words always carry the IEEE-754 exponent `0x3ff`, so every raw
/// word reinterprets as a double in `[1, 2)`; [`BitGenerator::next_double`]
/// subtracts 1.  A refill produces 382 doubles at a time and the buffer
/// location sits at its sentinel (382) right after seeding.
#[derive(Clone)]
pub struct Dsfmt {
    state: [u64; 2 * (N + 1)], // N 128-bit words plus the lung
    buffer: [u64; BUFFER],
    buffer_loc: usize,
    seed_seq: Option<SeedSequence>,
}

/// Serializable dSFMT state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct DsfmtState {
    /// The recurrence state: 382 words of `[1, 2)` doubles plus the lung.
    pub state: Vec<u64>,
    /// The buffered doubles of the current block.
    pub buffer: Vec<u64>,
    /// Next buffer position, in `[0, 382]`.
    pub buffer_loc: u32,
}

impl Dsfmt {
    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut state = [0u64; 2 * (N + 1)];
        seed_seq.fill_u64(&mut state);
        let mut gen = Self {
            state,
            buffer: [0; BUFFER],
            buffer_loc: BUFFER,
            seed_seq: Some(seed_seq.clone()),
        };
        gen.mask_and_certify();
        gen
    }

    /// The reference Knuth-style seeding from a single 32-bit value.
    pub fn from_u32(seed: u32) -> Self {
        let mut lanes = [0u32; 4 * (N + 1)];
        lanes[0] = seed;
        for i in 1..lanes.len() {
            lanes[i] = 1_812_433_253u32
                .wrapping_mul(lanes[i - 1] ^ (lanes[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        let mut state = [0u64; 2 * (N + 1)];
        for (i, slot) in state.iter_mut().enumerate() {
            *slot = u64::from(lanes[2 * i]) | (u64::from(lanes[2 * i + 1]) << 32);
        }
        let mut gen = Self { state, buffer: [0; BUFFER], buffer_loc: BUFFER, seed_seq: None };
        gen.mask_and_certify();
        gen
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    fn mask_and_certify(&mut self) {
        for word in self.state.iter_mut().take(2 * N) {
            *word = (*word & LOW_MASK) | HIGH_CONST;
        }
        let mut inner = (self.state[2 * N] ^ FIX1) & PCV1;
        inner ^= (self.state[2 * N + 1] ^ FIX2) & PCV2;
        for shift in [32u32, 16, 8, 4, 2, 1] {
            inner ^= inner >> shift;
        }
        if inner & 1 == 0 {
            // PCV2 has bit 0 set, so one flip restores the full period
            self.state[2 * N + 1] ^= 1;
        }
        self.buffer_loc = BUFFER;
    }

    fn refill(&mut self) {
        let mut lung0 = self.state[2 * N];
        let mut lung1 = self.state[2 * N + 1];
        for i in 0..N {
            let (t0, t1) = (self.state[2 * i], self.state[2 * i + 1]);
            let b = (i + POS1) % N;
            let (b0, b1) = (self.state[2 * b], self.state[2 * b + 1]);
            let new_lung0 = (t0 << SL1) ^ (lung1 >> 32) ^ (lung1 << 32) ^ b0;
            let new_lung1 = (t1 << SL1) ^ (lung0 >> 32) ^ (lung0 << 32) ^ b1;
            lung0 = new_lung0;
            lung1 = new_lung1;
            let r0 = (lung0 >> SR) ^ (lung0 & MSK1) ^ t0;
            let r1 = (lung1 >> SR) ^ (lung1 & MSK2) ^ t1;
            self.state[2 * i] = r0;
            self.state[2 * i + 1] = r1;
            self.buffer[2 * i] = r0;
            self.buffer[2 * i + 1] = r1;
        }
        self.state[2 * N] = lung0;
        self.state[2 * N + 1] = lung1;
        self.buffer_loc = 0;
    }

    fn next_word(&mut self) -> u64 {
        if self.buffer_loc >= BUFFER {
            self.refill();
        }
        let v = self.buffer[self.buffer_loc];
        self.buffer_loc += 1;
        v
    }
}

impl RngCore for Dsfmt {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // bits 16..48: the middle of the 52-bit mantissa
        (self.next_word() >> 16) as u32
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

impl SeedableRng for Dsfmt {
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

impl BitGenerator for Dsfmt {
    const TAG: &'static str = "DSFMT";
    const NATIVE_BITS: u32 = 53;
    type State = DsfmtState;

    fn next_raw(&mut self) -> u64 {
        self.next_word()
    }

    fn next_double(&mut self) -> f64 {
        f64::from_bits(self.next_word()) - 1.0
    }

    fn state(&self) -> StateRecord<DsfmtState> {
        StateRecord::new(
            Self::TAG,
            DsfmtState {
                state: self.state.to_vec(),
                buffer: self.buffer.to_vec(),
                buffer_loc: self.buffer_loc as u32,
            },
            Uint32Carry::empty(),
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<DsfmtState>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        if record.state.state.len() != 2 * (N + 1) {
            return Err(Error::InvalidState("DSFMT state must hold 384 words"));
        }
        if record.state.buffer.len() != BUFFER {
            return Err(Error::InvalidState("DSFMT buffer must hold 382 words"));
        }
        if record.state.buffer_loc > BUFFER as u32 {
            return Err(Error::InvalidState("DSFMT buffer location exceeds the buffer"));
        }
        self.state.copy_from_slice(&record.state.state);
        self.buffer.copy_from_slice(&record.state.buffer);
        self.buffer_loc = record.state.buffer_loc as usize;
        Ok(())
    }
}

#[derive(Clone)]
struct Window {
    w: [u64; 2 * N],
    lung0: u64,
    lung1: u64,
    idx: usize, // 128-bit word index
}

impl JumpWindow for Window {
    fn zeroed(&self) -> Self {
        Window { w: [0; 2 * N], lung0: 0, lung1: 0, idx: 0 }
    }

    fn step(&mut self) {
        let i = self.idx;
        let (t0, t1) = (self.w[2 * i], self.w[2 * i + 1]);
        let b = (i + POS1) % N;
        let (b0, b1) = (self.w[2 * b], self.w[2 * b + 1]);
        let lung0 = (t0 << SL1) ^ (self.lung1 >> 32) ^ (self.lung1 << 32) ^ b0;
        let lung1 = (t1 << SL1) ^ (self.lung0 >> 32) ^ (self.lung0 << 32) ^ b1;
        self.lung0 = lung0;
        self.lung1 = lung1;
        self.w[2 * i] = (lung0 >> SR) ^ (lung0 & MSK1) ^ t0;
        self.w[2 * i + 1] = (lung1 >> SR) ^ (lung1 & MSK2) ^ t1;
        self.idx = (i + 1) % N;
    }

    fn xor_from(&mut self, other: &Self) {
        for k in 0..N {
            let dst = (self.idx + k) % N;
            let src = (other.idx + k) % N;
            self.w[2 * dst] ^= other.w[2 * src];
            self.w[2 * dst + 1] ^= other.w[2 * src + 1];
        }
        self.lung0 ^= other.lung0;
        self.lung1 ^= other.lung1;
    }
}

impl Jumpable for Dsfmt {
    fn jumped(&self, iter: u64) -> Self {
        let mut window = Window {
            w: {
                let mut w = [0u64; 2 * N];
                w.copy_from_slice(&self.state[..2 * N]);
                w
            },
            lung0: self.state[2 * N],
            lung1: self.state[2 * N + 1],
            idx: 0,
        };
        for _ in 0..self.buffer_loc / 2 {
            window.step();
        }
        for _ in 0..iter {
            window = horner(&window, &DSFMT_JUMP_2P128);
        }
        let mut state = [0u64; 2 * (N + 1)];
        let mut buffer = [0u64; BUFFER];
        for k in 0..N {
            let src = (window.idx + k) % N;
            state[2 * k] = window.w[2 * src];
            state[2 * k + 1] = window.w[2 * src + 1];
            buffer[2 * k] = window.w[2 * src];
            buffer[2 * k + 1] = window.w[2 * src + 1];
        }
        state[2 * N] = window.lung0;
        state[2 * N + 1] = window.lung1;
        Self { state, buffer, buffer_loc: self.buffer_loc % 2, seed_seq: self.seed_seq.clone() }
    }
}

impl fmt::Debug for Dsfmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dsfmt").field("buffer_loc", &self.buffer_loc).finish_non_exhaustive()
    }
}

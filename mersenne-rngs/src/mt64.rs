use alloc::vec::Vec;
use core::fmt;

use bitgen_core::{conv, BitGenerator, Error, Jumpable, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::jump::{horner, JumpWindow};
use crate::jump_data::MT64_JUMP_2P128;

const N: usize = 312;
const M: usize = 156;
const MATRIX_A: u64 = 0xb502_6f5a_a966_19e9;
const UPPER_MASK: u64 = 0xffff_ffff_8000_0000;
const LOWER_MASK: u64 = 0x7fff_ffff;

/// The 64-bit Mersenne twister (MT19937-64).
#[derive(Clone)]
pub struct Mt64 {
    key: [u64; N],
    pos: usize,
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

/// Serializable MT64 state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Mt64State {
    /// The 312-word key buffer.
    pub key: Vec<u64>,
    /// Next read position, in `[0, 312]`.
    pub pos: u32,
}

impl Mt64 {
    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut key = [0u64; N];
        seed_seq.fill_u64(&mut key);
        if key.iter().all(|&w| w == 0) {
            key[0] = 1 << 63;
        }
        Self { key, pos: N, carry: Uint32Carry::empty(), seed_seq: Some(seed_seq.clone()) }
    }

    /// Knuth multiplicative seeding from a single 64-bit value.
    pub fn from_u64(seed: u64) -> Self {
        let mut key = [0u64; N];
        key[0] = seed;
        for i in 1..N {
            key[i] = 6_364_136_223_846_793_005u64
                .wrapping_mul(key[i - 1] ^ (key[i - 1] >> 62))
                .wrapping_add(i as u64);
        }
        Self { key, pos: N, carry: Uint32Carry::empty(), seed_seq: None }
    }

    /// The reference 64-bit key-array initialization schedule.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] when `init_key` is empty.
    pub fn from_key(init_key: &[u64]) -> Result<Self, Error> {
        if init_key.is_empty() {
            return Err(Error::InvalidValue("seed array must be non-empty"));
        }
        let mut gen = Self::from_u64(19_650_218);
        let mt = &mut gen.key;
        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(init_key.len()) {
            mt[i] = (mt[i]
                ^ (mt[i - 1] ^ (mt[i - 1] >> 62)).wrapping_mul(3_935_559_000_370_003_845))
            .wrapping_add(init_key[j])
            .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= init_key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            mt[i] = (mt[i]
                ^ (mt[i - 1] ^ (mt[i - 1] >> 62)).wrapping_mul(2_862_933_555_777_941_757))
            .wrapping_sub(i as u64);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }
        mt[0] = 1 << 63;
        Ok(gen)
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.key[i] & UPPER_MASK) | (self.key[(i + 1) % N] & LOWER_MASK);
            let mut v = y >> 1;
            if y & 1 == 1 {
                v ^= MATRIX_A;
            }
            self.key[i] = self.key[(i + M) % N] ^ v;
        }
        self.pos = 0;
    }

    fn next_word(&mut self) -> u64 {
        if self.pos >= N {
            self.twist();
        }
        let mut x = self.key[self.pos];
        self.pos += 1;
        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71d6_7fff_eda6_0000;
        x ^= (x << 37) & 0xfff7_eee0_0000_0000;
        x ^ (x >> 43)
    }
}

impl RngCore for Mt64 {
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

impl SeedableRng for Mt64 {
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

impl BitGenerator for Mt64 {
    const TAG: &'static str = "MT64";
    const NATIVE_BITS: u32 = 64;
    type State = Mt64State;

    fn next_raw(&mut self) -> u64 {
        self.next_word()
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_word())
    }

    fn state(&self) -> StateRecord<Mt64State> {
        StateRecord::new(
            Self::TAG,
            Mt64State { key: self.key.to_vec(), pos: self.pos as u32 },
            self.carry,
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<Mt64State>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        if record.state.key.len() != N {
            return Err(Error::InvalidState("MT64 key must hold 312 words"));
        }
        if record.state.pos > N as u32 {
            return Err(Error::InvalidState("MT64 position exceeds the buffer"));
        }
        self.key.copy_from_slice(&record.state.key);
        self.pos = record.state.pos as usize;
        self.carry = record.carry();
        Ok(())
    }
}

#[derive(Clone)]
struct Window {
    w: [u64; N],
    idx: usize,
}

impl JumpWindow for Window {
    fn zeroed(&self) -> Self {
        Window { w: [0; N], idx: 0 }
    }

    fn step(&mut self) {
        let i = self.idx;
        let y = (self.w[i] & UPPER_MASK) | (self.w[(i + 1) % N] & LOWER_MASK);
        let mut v = y >> 1;
        if y & 1 == 1 {
            v ^= MATRIX_A;
        }
        self.w[i] = self.w[(i + M) % N] ^ v;
        self.idx = (i + 1) % N;
    }

    fn xor_from(&mut self, other: &Self) {
        for k in 0..N {
            self.w[(self.idx + k) % N] ^= other.w[(other.idx + k) % N];
        }
    }
}

impl Jumpable for Mt64 {
    fn jumped(&self, iter: u64) -> Self {
        let mut window = Window { w: self.key, idx: 0 };
        for _ in 0..self.pos {
            window.step();
        }
        for _ in 0..iter {
            window = horner(&window, &MT64_JUMP_2P128);
        }
        let mut key = [0u64; N];
        for (k, slot) in key.iter_mut().enumerate() {
            *slot = window.w[(window.idx + k) % N];
        }
        Self { key, pos: 0, carry: Uint32Carry::empty(), seed_seq: self.seed_seq.clone() }
    }
}

impl fmt::Debug for Mt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt64").field("pos", &self.pos).finish_non_exhaustive()
    }
}

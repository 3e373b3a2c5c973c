//! SPECK-128/256 counter-mode bit generator.
//!
//! A 34-round ARX block cipher over 128-bit blocks with a 256-bit key;
//! the stream encrypts consecutive counter values, six blocks per refill.
//! The single software round function is used everywhere — the
//! [`use_sse41`] flag mirrors the CPU probe without switching output.
//!
//! [`use_sse41`]: Speck128::use_sse41

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

use core::fmt;

use bitgen_core::counter::U129;
use bitgen_core::{conv, Error, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
cpufeatures::new!(cpuid_sse41, "sse4.1");

fn detect_sse41() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(any(target_arch = "x86_64", target_arch = "x86"))] {
            cpuid_sse41::get()
        } else {
            false
        }
    }
}

const ROUNDS: usize = 34;
/// Counter blocks encrypted per refill.
const BLOCKS: usize = 6;
/// 64-bit words per refill.
const BUFFER_WORDS: usize = 2 * BLOCKS;

/// SPECK-128/256 counter-mode bit generator.
#[derive(Clone)]
pub struct Speck128 {
    key: [u64; 4],
    round_keys: [u64; ROUNDS],
    blocks: [u128; BLOCKS],
    buffer: [u64; BUFFER_WORDS],
    offset: usize,
    use_sse41: bool,
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

/// Serializable SPECK state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Speck128State {
    /// The 256-bit key as little-endian words.
    pub key: [u64; 4],
    /// The six counter blocks as little-endian word pairs.
    pub counter: [u64; 12],
    /// Buffered output words.
    pub buffer: [u64; BUFFER_WORDS],
    /// Consumed buffer prefix, in `[0, 12]`.
    pub offset: u32,
}

fn expand_key(key: &[u64; 4]) -> [u64; ROUNDS] {
    let mut k = [0u64; ROUNDS];
    let mut l = [key[1], key[2], key[3]];
    k[0] = key[0];
    for i in 0..ROUNDS - 1 {
        let next_l = k[i].wrapping_add(l[i % 3].rotate_right(8)) ^ i as u64;
        k[i + 1] = k[i].rotate_left(3) ^ next_l;
        l[i % 3] = next_l;
    }
    k
}

#[inline]
fn encrypt(round_keys: &[u64; ROUNDS], block: u128) -> u128 {
    let mut y = block as u64;
    let mut x = (block >> 64) as u64;
    for &k in round_keys {
        x = x.rotate_right(8).wrapping_add(y) ^ k;
        y = y.rotate_left(3) ^ x;
    }
    u128::from(y) | (u128::from(x) << 64)
}

impl Speck128 {
    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut key = [0u64; 4];
        seed_seq.fill_u64(&mut key);
        let mut gen = Self::with_key(key);
        gen.seed_seq = Some(seed_seq.clone());
        gen
    }

    /// Construct from an explicit 256-bit key with the counter at zero.
    pub fn with_key(key: [u64; 4]) -> Self {
        let mut blocks = [0u128; BLOCKS];
        for (i, block) in blocks.iter_mut().enumerate() {
            *block = i as u128;
        }
        Self {
            round_keys: expand_key(&key),
            key,
            blocks,
            buffer: [0; BUFFER_WORDS],
            offset: BUFFER_WORDS,
            use_sse41: detect_sse41(),
            carry: Uint32Carry::empty(),
            seed_seq: None,
        }
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    /// Whether the CPU offers the SSE4.1 path.
    pub fn use_sse41(&self) -> bool {
        self.use_sse41
    }

    /// Flip the capability flag; output never depends on it.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] when `enabled` and the CPU lacks SSE4.1.
    pub fn set_use_sse41(&mut self, enabled: bool) -> Result<(), Error> {
        if enabled && !detect_sse41() {
            return Err(Error::Unavailable("CPU does not support SSE4.1"));
        }
        self.use_sse41 = enabled;
        Ok(())
    }

    /// Reposition by `delta` 64-bit words (little-endian limbs), reduced
    /// modulo the 2^129-word period; a whole-period step is the identity.
    /// The parked 32-bit carry is dropped.
    pub fn advance(&mut self, delta: &[u64]) {
        let delta = U129::from_words(delta);
        if delta.is_zero() {
            self.carry.clear();
            return;
        }
        let total = self.position().wrapping_add(delta);
        let mid = total.half();
        for (i, block) in self.blocks.iter_mut().enumerate() {
            *block = mid.wrapping_add(i as u128);
        }
        self.refill();
        self.offset = total.bit0() as usize;
        self.carry.clear();
    }

    fn position(&self) -> U129 {
        let base = self.blocks[0].wrapping_sub(BLOCKS as u128);
        let doubled = U129 { lo: base << 1, hi: base >> 127 == 1 };
        doubled.wrapping_add(U129 { lo: self.offset as u128, hi: false })
    }

    fn refill(&mut self) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            let encrypted = encrypt(&self.round_keys, *block);
            self.buffer[2 * i] = encrypted as u64;
            self.buffer[2 * i + 1] = (encrypted >> 64) as u64;
            *block = block.wrapping_add(BLOCKS as u128);
        }
    }

    #[inline]
    fn next_word(&mut self) -> u64 {
        if self.offset >= BUFFER_WORDS {
            self.refill();
            self.offset = 0;
        }
        let word = self.buffer[self.offset];
        self.offset += 1;
        word
    }
}

impl RngCore for Speck128 {
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

impl SeedableRng for Speck128 {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut key = [0u64; 4];
        for (w, chunk) in key.iter_mut().zip(seed.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *w = u64::from_le_bytes(bytes);
        }
        Self::with_key(key)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

impl BitGenerator for Speck128 {
    const TAG: &'static str = "SPECK128";
    const NATIVE_BITS: u32 = 64;
    type State = Speck128State;

    fn next_raw(&mut self) -> u64 {
        self.next_word()
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_word())
    }

    fn state(&self) -> StateRecord<Speck128State> {
        let mut counter = [0u64; 12];
        for (i, block) in self.blocks.iter().enumerate() {
            counter[2 * i] = *block as u64;
            counter[2 * i + 1] = (*block >> 64) as u64;
        }
        StateRecord::new(
            Self::TAG,
            Speck128State {
                key: self.key,
                counter,
                buffer: self.buffer,
                offset: self.offset as u32,
            },
            self.carry,
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<Speck128State>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        let s = &record.state;
        if s.offset > BUFFER_WORDS as u32 {
            return Err(Error::InvalidState("offset exceeds the buffer"));
        }
        self.key = s.key;
        self.round_keys = expand_key(&s.key);
        for (i, block) in self.blocks.iter_mut().enumerate() {
            *block = u128::from(s.counter[2 * i]) | (u128::from(s.counter[2 * i + 1]) << 64);
        }
        self.buffer = s.buffer;
        self.offset = s.offset as usize;
        self.carry = record.carry();
        Ok(())
    }
}

impl Jumpable for Speck128 {
    /// Each iteration leaps 2^65 words (2^64 counter blocks).
    fn jumped(&self, iter: u64) -> Self {
        let mut out = self.clone();
        out.advance(&[0, iter << 1, iter >> 63]);
        out
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Speck128 {
    fn drop(&mut self) {
        self.key.zeroize();
        self.round_keys.zeroize();
        self.buffer.zeroize();
    }
}

impl fmt::Debug for Speck128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speck128")
            .field("offset", &self.offset)
            .field("use_sse41", &self.use_sse41)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    // SPECK-128/256 vector from the Simon and Speck specification
    #[test]
    fn reference_block() {
        let rk = expand_key(&[
            0x0706050403020100,
            0x0f0e0d0c0b0a0908,
            0x1716151413121110,
            0x1f1e1d1c1b1a1918,
        ]);
        let plaintext =
            (0x65736f6874206e49u128 << 64) | 0x202e72656e6f6f70;
        let ciphertext =
            (0x4109010405c0f53eu128 << 64) | 0x4eeeb48d9c188f43;
        assert_eq!(encrypt(&rk, plaintext), ciphertext);
    }

    fn counter_words(gen: &Speck128) -> [u64; 12] {
        gen.state().state.counter
    }

    #[test]
    fn advance_large_counter_values() {
        let mut gen = Speck128::with_key([0; 4]);
        gen.advance(&[0, 2]); // 2^65
        assert_eq!(counter_words(&gen), [6, 1, 7, 1, 8, 1, 9, 1, 10, 1, 11, 1]);

        let mut gen = Speck128::with_key([0; 4]);
        gen.advance(&[u64::MAX - 10, 1]); // 2^65 - 11
        assert_eq!(counter_words(&gen), [0, 1, 1, 1, 2, 1, 3, 1, 4, 1, 5, 1]);

        let mut gen = Speck128::with_key([0; 4]);
        gen.advance(&[u64::MAX - 23, u64::MAX, 1]); // 2^129 - 24
        let m = u64::MAX;
        assert_eq!(
            counter_words(&gen),
            [m - 5, m, m - 4, m, m - 3, m, m - 2, m, m - 1, m, m, m]
        );
        gen.discard_raw(13);
        assert_eq!(counter_words(&gen), [0, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0]);
    }

    #[test]
    fn whole_period_advance_is_identity() {
        let gen = Speck128::with_key([0; 4]);
        let before = gen.state();
        let mut wrapped = gen.clone();
        wrapped.advance(&[0, 0, 2]); // 2^129
        assert_eq!(wrapped.state(), before);
    }

    #[test]
    fn advance_equals_stepping() {
        let mut reference = Speck128::seeded(3);
        let stream = reference.random_raw(64);
        for step in [0usize, 1, 2, 3, 5, 7, 8, 9, 11, 12, 13, 33] {
            let mut gen = Speck128::seeded(3);
            gen.advance(&[step as u64]);
            assert_eq!(gen.next_raw(), stream[step], "step {step}");
        }
    }

    #[test]
    fn sse41_flag_probes_the_cpu() {
        let mut gen = Speck128::seeded(0);
        assert!(gen.set_use_sse41(false).is_ok());
        if detect_sse41() {
            assert!(gen.set_use_sse41(true).is_ok());
        } else {
            assert!(matches!(gen.set_use_sse41(true), Err(Error::Unavailable(_))));
        }
    }
}

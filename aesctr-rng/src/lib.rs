//! AES-128 counter-mode bit generator.
//!
//! The stream is `AES-128_key(0), AES-128_key(1), ...` flattened to
//! little-endian 64-bit words; four consecutive counter blocks are
//! encrypted per refill.  Block encryption delegates to the [`aes`]
//! crate, whose runtime AES-NI path and software fallback are
//! bit-identical, so the [`use_aesni`] flag is a capability probe rather
//! than a behavior switch.
//!
//! [`use_aesni`]: AesCounter::use_aesni

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

use core::fmt;

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;

use bitgen_core::counter::U129;
use bitgen_core::{conv, Error, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
cpufeatures::new!(cpuid_aes, "aes");

fn detect_aesni() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(any(target_arch = "x86_64", target_arch = "x86"))] {
            cpuid_aes::get()
        } else {
            false
        }
    }
}

/// Counter blocks encrypted per refill.
const BLOCKS: usize = 4;
/// 64-bit words per refill.
const BUFFER_WORDS: usize = 2 * BLOCKS;

/// AES-128 counter-mode bit generator.
#[derive(Clone)]
pub struct AesCounter {
    cipher: Aes128,
    key: u128,
    blocks: [u128; BLOCKS],
    buffer: [u64; BUFFER_WORDS],
    offset: usize,
    use_aesni: bool,
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

/// Serializable AES counter state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct AesCounterState {
    /// The 128-bit cipher key.
    pub key: u128,
    /// The four counter blocks as little-endian word pairs.
    pub counter: [u64; 8],
    /// Buffered output words.
    pub buffer: [u64; BUFFER_WORDS],
    /// Consumed buffer prefix, in `[0, 8]`.
    pub offset: u32,
}

impl AesCounter {
    /// Seed through a [`SeedSequence`] built from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut words = [0u64; 2];
        seed_seq.fill_u64(&mut words);
        let mut gen = Self::with_key(u128::from(words[0]) | (u128::from(words[1]) << 64));
        gen.seed_seq = Some(seed_seq.clone());
        gen
    }

    /// Construct from an explicit 128-bit key with the counter at zero.
    pub fn with_key(key: u128) -> Self {
        let cipher = Aes128::new(&GenericArray::from(key.to_le_bytes()));
        Self {
            cipher,
            key,
            blocks: [0, 1, 2, 3],
            buffer: [0; BUFFER_WORDS],
            offset: BUFFER_WORDS,
            use_aesni: detect_aesni(),
            carry: Uint32Carry::empty(),
            seed_seq: None,
        }
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    /// Whether the CPU's AES instructions back the cipher.
    pub fn use_aesni(&self) -> bool {
        self.use_aesni
    }

    /// Flip the capability flag.  Output never depends on it; requesting
    /// hardware AES on a CPU without it is the one rejected case.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] when `enabled` and the CPU lacks AES-NI.
    pub fn set_use_aesni(&mut self, enabled: bool) -> Result<(), Error> {
        if enabled && !detect_aesni() {
            return Err(Error::Unavailable("CPU does not support AES-NI"));
        }
        self.use_aesni = enabled;
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

    // current word position in the 2^129-word output space
    fn position(&self) -> U129 {
        let base = self.blocks[0].wrapping_sub(BLOCKS as u128);
        let doubled = U129 { lo: base << 1, hi: base >> 127 == 1 };
        doubled.wrapping_add(U129 { lo: self.offset as u128, hi: false })
    }

    fn refill(&mut self) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            let mut bytes = GenericArray::from(block.to_le_bytes());
            self.cipher.encrypt_block(&mut bytes);
            let encrypted = u128::from_le_bytes(bytes.into());
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

impl RngCore for AesCounter {
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

impl SeedableRng for AesCounter {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_key(u128::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

impl BitGenerator for AesCounter {
    const TAG: &'static str = "AESCounter";
    const NATIVE_BITS: u32 = 64;
    type State = AesCounterState;

    fn next_raw(&mut self) -> u64 {
        self.next_word()
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_word())
    }

    fn state(&self) -> StateRecord<AesCounterState> {
        let mut counter = [0u64; 8];
        for (i, block) in self.blocks.iter().enumerate() {
            counter[2 * i] = *block as u64;
            counter[2 * i + 1] = (*block >> 64) as u64;
        }
        StateRecord::new(
            Self::TAG,
            AesCounterState {
                key: self.key,
                counter,
                buffer: self.buffer,
                offset: self.offset as u32,
            },
            self.carry,
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<AesCounterState>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        let s = &record.state;
        if s.offset > BUFFER_WORDS as u32 {
            return Err(Error::InvalidState("offset exceeds the buffer"));
        }
        self.cipher = Aes128::new(&GenericArray::from(s.key.to_le_bytes()));
        self.key = s.key;
        for (i, block) in self.blocks.iter_mut().enumerate() {
            *block = u128::from(s.counter[2 * i]) | (u128::from(s.counter[2 * i + 1]) << 64);
        }
        self.buffer = s.buffer;
        self.offset = s.offset as usize;
        self.carry = record.carry();
        Ok(())
    }
}

impl Jumpable for AesCounter {
    /// Each iteration leaps 2^65 words (2^64 counter blocks).
    fn jumped(&self, iter: u64) -> Self {
        let mut out = self.clone();
        out.advance(&[0, iter << 1, iter >> 63]);
        out
    }
}

#[cfg(feature = "zeroize")]
impl Drop for AesCounter {
    fn drop(&mut self) {
        self.key.zeroize();
        self.buffer.zeroize();
    }
}

impl fmt::Debug for AesCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCounter")
            .field("offset", &self.offset)
            .field("use_aesni", &self.use_aesni)
            .finish_non_exhaustive()
    }
}

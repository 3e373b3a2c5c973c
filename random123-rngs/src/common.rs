//! Counter plumbing and the shared generator shell.

use alloc::vec::Vec;

use bitgen_core::counter;

/// Counter words packable into little-endian `u64` limbs.
pub(crate) trait CtrWord: Copy + Default {
    const BITS: usize;
    fn pack(words: &[Self], limbs: &mut [u64]);
    fn unpack(limbs: &[u64], words: &mut [Self]);
}

impl CtrWord for u64 {
    const BITS: usize = 64;
    fn pack(words: &[Self], limbs: &mut [u64]) {
        limbs.copy_from_slice(words);
    }
    fn unpack(limbs: &[u64], words: &mut [Self]) {
        words.copy_from_slice(limbs);
    }
}

impl CtrWord for u32 {
    const BITS: usize = 32;
    fn pack(words: &[Self], limbs: &mut [u64]) {
        for (i, limb) in limbs.iter_mut().enumerate() {
            let hi = words.get(2 * i + 1).copied().unwrap_or(0);
            *limb = u64::from(words[2 * i]) | (u64::from(hi) << 32);
        }
    }
    fn unpack(limbs: &[u64], words: &mut [Self]) {
        for (i, word) in words.iter_mut().enumerate() {
            *word = (limbs[i / 2] >> (32 * (i % 2))) as u32;
        }
    }
}

/// Add `delta` limbs into a counter of `W` words, wrapping at its width.
pub(crate) fn add_to_counter<W: CtrWord>(ctr: &mut [W], delta: &[u64]) {
    let mut limbs = alloc::vec![0u64; (ctr.len() * W::BITS).div_ceil(64)];
    W::pack(ctr, &mut limbs);
    counter::add(&mut limbs, delta);
    counter::mask_top(&mut limbs, ctr.len() * W::BITS);
    W::unpack(&limbs, ctr);
}

/// Reposition a block generator by `delta` output words.
///
/// `ctr` names the last generated block (generation pre-increments), and
/// `buffer_pos` the consumed prefix of its `block_words` outputs.  On
/// return `ctr` names the block containing the target word and the new
/// buffer position inside it is returned; the caller regenerates the
/// block buffer.
pub(crate) fn reposition<W: CtrWord>(
    ctr: &mut [W],
    delta: &[u64],
    block_words: usize,
    buffer_pos: usize,
) -> usize {
    let log2n = block_words.trailing_zeros();
    let ctr_bits = ctr.len() * W::BITS;
    let limb_count = ctr_bits.div_ceil(64);
    let mut pos: Vec<u64> = alloc::vec![0u64; limb_count + 1];
    W::pack(ctr, &mut pos[..limb_count]);
    counter::shl_bits(&mut pos, log2n);
    counter::sub_word(&mut pos, (block_words - buffer_pos) as u64);
    counter::add(&mut pos, delta);
    counter::mask_top(&mut pos, ctr_bits + log2n as usize);
    let rem = (pos[0] & (block_words as u64 - 1)) as usize;
    counter::shr_bits(&mut pos, log2n);
    counter::add_word(&mut pos, 1);
    counter::mask_top(&mut pos, ctr_bits);
    W::unpack(&pos[..limb_count], ctr);
    rem
}

/// `iter` shifted up to the counter's halfway bit, as delta limbs.
pub(crate) fn half_space_delta(iter: u64, ctr_bits: usize) -> Vec<u64> {
    let bit = ctr_bits / 2;
    let (limb, rem) = (bit / 64, (bit % 64) as u32);
    let mut delta = alloc::vec![0u64; limb + 2];
    delta[limb] = iter << rem;
    if rem > 0 {
        delta[limb + 1] = iter >> (64 - rem);
    }
    delta
}

/// Full-width product halves at 64 bits.
#[inline]
pub(crate) fn mulhilo_u64(a: u64, b: u64) -> (u64, u64) {
    let wide = u128::from(a) * u128::from(b);
    ((wide >> 64) as u64, wide as u64)
}

/// Full-width product halves at 32 bits.
#[inline]
pub(crate) fn mulhilo_u32(a: u32, b: u32) -> (u32, u32) {
    let wide = u64::from(a) * u64::from(b);
    ((wide >> 32) as u32, wide as u32)
}

/// The whole generator shell for one Philox/ThreeFry variant: counter,
/// key, one-block output buffer and every shared trait impl.  Only the
/// block function differs between variants.
macro_rules! random123_generator {
    ($Gen:ident, $State:ident, $tag:literal, $word:ty, $bits:expr, $n:expr, $kn:expr,
     $block:path, $gen_words:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $Gen {
            key: [$word; $kn],
            ctr: [$word; $n],
            buffer: [$word; $n],
            buffer_pos: usize,
            carry: Uint32Carry,
            seed_seq: Option<SeedSequence>,
        }

        /// Serializable state payload.
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
        pub struct $State {
            /// Cipher key.
            pub key: [$word; $kn],
            /// Little-endian block counter (the last generated block).
            pub counter: [$word; $n],
            /// Output words of the last generated block.
            pub buffer: [$word; $n],
            /// Consumed buffer prefix, in `[0, N]`.
            pub buffer_pos: u32,
        }

        impl $Gen {
            /// Seed through a [`SeedSequence`] built from `seed`.
            pub fn seeded(seed: u64) -> Self {
                Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
            }

            /// Seed from an existing [`SeedSequence`].
            pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
                let mut key = [0 as $word; $kn];
                for (slot, w) in key.iter_mut().zip(seed_seq.$gen_words($kn)) {
                    *slot = w;
                }
                let mut gen = Self::with_key_counter(key, [0; $n]);
                gen.seed_seq = Some(seed_seq.clone());
                gen
            }

            /// Construct directly from a key and a counter; the counter
            /// may be written freely, the stream is `E_key(counter)`.
            pub fn with_key_counter(key: [$word; $kn], counter: [$word; $n]) -> Self {
                Self {
                    key,
                    ctr: counter,
                    buffer: [0; $n],
                    buffer_pos: $n,
                    carry: Uint32Carry::empty(),
                    seed_seq: None,
                }
            }

            /// The seed sequence this generator was built from, if any.
            pub fn seed_seq(&self) -> Option<&SeedSequence> {
                self.seed_seq.as_ref()
            }

            /// Reposition the stream.
            ///
            /// With `counter_only` the little-endian `delta` limbs are
            /// added straight to the block counter; otherwise `delta`
            /// counts output words and the block buffer is realigned to
            /// the target word.  Arbitrarily large deltas wrap at the
            /// output period.  The parked 32-bit carry is dropped.
            pub fn advance(&mut self, delta: &[u64], counter_only: bool) {
                if counter_only {
                    crate::common::add_to_counter(&mut self.ctr, delta);
                } else {
                    let rem =
                        crate::common::reposition(&mut self.ctr, delta, $n, self.buffer_pos);
                    self.buffer = $block(&self.ctr, &self.key);
                    self.buffer_pos = rem;
                }
                self.carry.clear();
            }

            #[inline]
            fn next_word(&mut self) -> $word {
                if self.buffer_pos < $n {
                    let word = self.buffer[self.buffer_pos];
                    self.buffer_pos += 1;
                    return word;
                }
                // the counter increments before each block encryption
                crate::common::add_to_counter(&mut self.ctr, &[1]);
                self.buffer = $block(&self.ctr, &self.key);
                self.buffer_pos = 1;
                self.buffer[0]
            }
        }

        impl RngCore for $Gen {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                if $bits == 64 {
                    let mut carry = self.carry;
                    let word = carry.next_u32(|| self.next_word() as u64);
                    self.carry = carry;
                    word
                } else {
                    self.next_word() as u32
                }
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                if $bits == 64 {
                    self.next_word() as u64
                } else {
                    let high = self.next_word() as u64;
                    let low = self.next_word() as u64;
                    (high << 32) | low
                }
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl SeedableRng for $Gen {
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

        impl BitGenerator for $Gen {
            const TAG: &'static str = $tag;
            const NATIVE_BITS: u32 = $bits;
            type State = $State;

            fn next_raw(&mut self) -> u64 {
                self.next_word() as u64
            }

            fn next_double(&mut self) -> f64 {
                if $bits == 64 {
                    bitgen_core::conv::double_from_u64(self.next_raw())
                } else {
                    let a = self.next_word() as u32;
                    let b = self.next_word() as u32;
                    bitgen_core::conv::double_from_u32_pair(a, b)
                }
            }

            fn state(&self) -> StateRecord<$State> {
                StateRecord::new(
                    Self::TAG,
                    $State {
                        key: self.key,
                        counter: self.ctr,
                        buffer: self.buffer,
                        buffer_pos: self.buffer_pos as u32,
                    },
                    self.carry,
                )
            }

            fn try_set_state(&mut self, record: &StateRecord<$State>) -> Result<(), Error> {
                record.expect_tag(Self::TAG)?;
                if record.state.buffer_pos > $n {
                    return Err(Error::InvalidState("buffer position exceeds the block"));
                }
                self.key = record.state.key;
                self.ctr = record.state.counter;
                self.buffer = record.state.buffer;
                self.buffer_pos = record.state.buffer_pos as usize;
                self.carry = record.carry();
                Ok(())
            }
        }

        impl Jumpable for $Gen {
            /// Each iteration adds 2^(half the counter width) blocks.
            fn jumped(&self, iter: u64) -> Self {
                let mut out = self.clone();
                let delta = crate::common::half_space_delta(iter, $n * $bits);
                crate::common::add_to_counter(&mut out.ctr, &delta);
                if out.buffer_pos < $n {
                    out.buffer = $block(&out.ctr, &out.key);
                }
                out.carry = Uint32Carry::empty();
                out
            }
        }
    };
}

pub(crate) use random123_generator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_reposition_is_absolute() {
        // counter 0 with an empty buffer is position zero
        let mut ctr = [0u64; 4];
        let rem = reposition(&mut ctr, &[9], 4, 4);
        // word 9 lives in block 2 (blocks count from 1), offset 1
        assert_eq!(ctr, [3, 0, 0, 0]);
        assert_eq!(rem, 1);
    }

    #[test]
    fn reposition_carries_into_high_words() {
        let mut ctr = [0u64; 4];
        let rem = reposition(&mut ctr, &[0, 4], 4, 4); // 2^66 words
        assert_eq!(ctr, [1, 1, 0, 0]);
        assert_eq!(rem, 0);
    }

    #[test]
    fn u32_counters_pack_little_endian() {
        let mut ctr = [0u32; 4];
        add_to_counter(&mut ctr, &[u64::from(u32::MAX) + 1]);
        assert_eq!(ctr, [0, 1, 0, 0]);
        add_to_counter(&mut ctr, &[u64::MAX, u64::MAX]); // -1 mod 2^128
        assert_eq!(ctr, [u32::MAX, 0, 0, 0]);
    }
}

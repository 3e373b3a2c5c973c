//! The HC-128 stream cipher as a bit generator.
//!
//! Two 512-word tables stepped by data-dependent rotations and table
//! lookups on a 1024-word cycle.  Key and IV are 128 bits each; seeding
//! folds eight entropy words into the pair.  There is no closed form for
//! distant states, so the family supports neither `jumped` nor `advance`.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub use bitgen_core::BitGenerator;

use alloc::vec::Vec;
use core::fmt;

use bitgen_core::{conv, Error, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const TABLE_SIZE: usize = 512;
const INIT_SIZE: usize = 1280;

/// HC-128 bit generator.
#[derive(Clone)]
pub struct Hc128 {
    p: [u32; TABLE_SIZE],
    q: [u32; TABLE_SIZE],
    ct: u32,
    carry: Uint32Carry,
    seed_seq: Option<SeedSequence>,
}

/// Serializable HC-128 state payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Hc128State {
    /// The P table.
    pub p: Vec<u32>,
    /// The Q table.
    pub q: Vec<u32>,
    /// Step counter over the 1024-word cycle.
    pub counter: u32,
}

impl Hc128 {
    /// Seed through a [`SeedSequence`] built from `seed`: the first four
    /// words become the key, the next four the IV.
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
    }

    /// Seed from an existing [`SeedSequence`].
    pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
        let mut words = [0u32; 8];
        seed_seq.fill_u32(&mut words);
        let key = fold_u128(&words[..4]);
        let iv = fold_u128(&words[4..]);
        let mut gen = Self::with_key_iv(key, iv);
        gen.seed_seq = Some(seed_seq.clone());
        gen
    }

    /// Construct from an explicit 128-bit key and IV.
    pub fn with_key_iv(key: u128, iv: u128) -> Self {
        let mut w = [0u32; INIT_SIZE];
        for i in 0..4 {
            w[i] = (key >> (32 * i)) as u32;
            w[i + 4] = w[i];
            w[i + 8] = (iv >> (32 * i)) as u32;
            w[i + 12] = w[i + 8];
        }
        for i in 16..INIT_SIZE {
            w[i] = f2(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(f1(w[i - 15]))
                .wrapping_add(w[i - 16])
                .wrapping_add(i as u32);
        }
        let mut gen = Self {
            p: [0; TABLE_SIZE],
            q: [0; TABLE_SIZE],
            ct: 0,
            carry: Uint32Carry::empty(),
            seed_seq: None,
        };
        gen.p.copy_from_slice(&w[256..256 + TABLE_SIZE]);
        gen.q.copy_from_slice(&w[768..768 + TABLE_SIZE]);
        // run one full cycle, replacing table entries with keyed output
        for i in 0..1024 {
            if i < 512 {
                gen.p[i] = gen.step();
            } else {
                gen.q[i - 512] = gen.step();
            }
        }
        gen
    }

    /// The seed sequence this generator was built from, if any.
    pub fn seed_seq(&self) -> Option<&SeedSequence> {
        self.seed_seq.as_ref()
    }

    fn step(&mut self) -> u32 {
        let i = (self.ct & 1023) as usize;
        let j = i & (TABLE_SIZE - 1);
        self.ct = (self.ct + 1) & 1023;
        if i < 512 {
            self.p[j] = self.p[j].wrapping_add(g1(
                self.p[(j.wrapping_sub(3)) & 511],
                self.p[(j.wrapping_sub(10)) & 511],
                self.p[(j.wrapping_sub(511)) & 511],
            ));
            h1(&self.q, self.p[(j.wrapping_sub(12)) & 511]) ^ self.p[j]
        } else {
            self.q[j] = self.q[j].wrapping_add(g2(
                self.q[(j.wrapping_sub(3)) & 511],
                self.q[(j.wrapping_sub(10)) & 511],
                self.q[(j.wrapping_sub(511)) & 511],
            ));
            h2(&self.p, self.q[(j.wrapping_sub(12)) & 511]) ^ self.q[j]
        }
    }
}

fn fold_u128(words: &[u32]) -> u128 {
    words
        .iter()
        .enumerate()
        .fold(0u128, |acc, (i, &w)| acc | (u128::from(w) << (32 * i)))
}

#[inline]
fn f1(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn f2(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline]
fn g1(x: u32, y: u32, z: u32) -> u32 {
    (x.rotate_right(10) ^ z.rotate_right(23)).wrapping_add(y.rotate_right(8))
}

#[inline]
fn g2(x: u32, y: u32, z: u32) -> u32 {
    (x.rotate_left(10) ^ z.rotate_left(23)).wrapping_add(y.rotate_left(8))
}

#[inline]
fn h1(q: &[u32; TABLE_SIZE], x: u32) -> u32 {
    q[(x & 0xff) as usize].wrapping_add(q[(256 + ((x >> 16) & 0xff)) as usize])
}

#[inline]
fn h2(p: &[u32; TABLE_SIZE], x: u32) -> u32 {
    p[(x & 0xff) as usize].wrapping_add(p[(256 + ((x >> 16) & 0xff)) as usize])
}

impl RngCore for Hc128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let high = self.step();
        let low = self.step();
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

impl SeedableRng for Hc128 {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut halves = [0u128; 2];
        for (h, chunk) in halves.iter_mut().zip(seed.chunks_exact(16)) {
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(chunk);
            *h = u128::from_le_bytes(bytes);
        }
        Self::with_key_iv(halves[0], halves[1])
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

impl BitGenerator for Hc128 {
    const TAG: &'static str = "HC128";
    const NATIVE_BITS: u32 = 64;
    type State = Hc128State;

    fn next_raw(&mut self) -> u64 {
        self.next_u64()
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_u64())
    }

    fn state(&self) -> StateRecord<Hc128State> {
        StateRecord::new(
            Self::TAG,
            Hc128State { p: self.p.to_vec(), q: self.q.to_vec(), counter: self.ct },
            self.carry,
        )
    }

    fn try_set_state(&mut self, record: &StateRecord<Hc128State>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        let s = &record.state;
        if s.p.len() != TABLE_SIZE || s.q.len() != TABLE_SIZE {
            return Err(Error::InvalidState("HC128 tables must hold 512 words"));
        }
        if s.counter >= 1024 {
            return Err(Error::InvalidState("HC128 counter exceeds the cycle"));
        }
        self.p.copy_from_slice(&s.p);
        self.q.copy_from_slice(&s.q);
        self.ct = s.counter;
        self.carry = record.carry();
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Hc128 {
    fn drop(&mut self) {
        self.p.zeroize();
        self.q.zeroize();
    }
}

impl fmt::Debug for Hc128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hc128").field("counter", &self.ct).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::BitGeneratorExt;

    // eSTREAM HC-128 test vector, zero key and IV
    #[test]
    fn zero_key_keystream() {
        let mut gen = Hc128::with_key_iv(0, 0);
        assert_eq!(gen.next_u32(), 0x73150082);
        assert_eq!(gen.next_u32(), 0x3bfd03a0);
        assert_eq!(gen.next_u32(), 0xfb2fd77f);
        assert_eq!(gen.next_u32(), 0xaa63af0e);
    }

    #[test]
    fn raw_packs_first_draw_high() {
        let mut words = Hc128::seeded(4);
        let mut raw = Hc128::seeded(4);
        let hi = words.next_u32();
        let lo = words.next_u32();
        assert_eq!(raw.next_raw(), (u64::from(hi) << 32) | u64::from(lo));
    }

    #[test]
    fn state_round_trip_mid_cycle() {
        let mut gen = Hc128::seeded(8);
        gen.discard_raw(700);
        let saved = gen.state();
        let expect = gen.random_raw(8);
        let mut other = Hc128::seeded(0);
        other.try_set_state(&saved).unwrap();
        assert_eq!(other.random_raw(8), expect);
    }

    #[test]
    fn bad_table_shape_rejected() {
        let mut gen = Hc128::seeded(1);
        let mut record = gen.state();
        record.state.q.truncate(100);
        assert!(matches!(gen.try_set_state(&record), Err(Error::InvalidState(_))));
    }
}

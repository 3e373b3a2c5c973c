//! Jenkins' small fast generator (JSF).
//!
//! A four-register chaotic mixer with no linear structure, at 32- or
//! 64-bit width ([`Jsf32`], [`Jsf64`]).  The rotation triple `(p, q, r)`
//! is configurable (`r = 0` drops the third rotation, as in the default
//! 64-bit parameterization), and `seed_size` selects how many seed words
//! initialise the `b`/`c`/`d` registers.  Twenty warm-up rounds are
//! discarded after seeding.  Chaotic generators cannot jump: there is no
//! closed form for the n-th state, so this family deliberately does not
//! implement `Jumpable`.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub use bitgen_core::BitGenerator;

use bitgen_core::{conv, Error, SeedSequence, StateRecord, Uint32Carry};
use rand_core::{impls, RngCore, SeedableRng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

const INIT: u64 = 0xf1ea_5eed;
const WARMUP_ROUNDS: usize = 20;

macro_rules! jsf_generator {
    ($Gen:ident, $State:ident, $tag:literal, $word:ty, $bits:expr, $gen_words:ident, $defaults:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug)]
        pub struct $Gen {
            a: $word,
            b: $word,
            c: $word,
            d: $word,
            p: u32,
            q: u32,
            r: u32,
            carry: Uint32Carry,
            seed_seq: Option<SeedSequence>,
        }

        /// Serializable state payload.
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
        pub struct $State {
            /// Register a.
            pub a: $word,
            /// Register b.
            pub b: $word,
            /// Register c.
            pub c: $word,
            /// Register d.
            pub d: $word,
            /// First rotation.
            pub p: u32,
            /// Second rotation.
            pub q: u32,
            /// Third rotation (0 disables it).
            pub r: u32,
        }

        impl $Gen {
            /// Seed with the default rotations and a single seed word.
            pub fn seeded(seed: u64) -> Self {
                match Self::with_params(seed, 1, $defaults.0, $defaults.1, $defaults.2) {
                    Ok(gen) => gen,
                    // the defaults always validate
                    Err(_) => unreachable!(),
                }
            }

            /// Full constructor: `seed_size` in `{1, 2, 3}` seed words and
            /// an explicit rotation triple.
            ///
            /// # Errors
            ///
            /// [`Error::InvalidValue`] when `seed_size` is outside `{1, 2, 3}`
            /// or any rotation reaches the word width.
            pub fn with_params(seed: u64, seed_size: u32, p: u32, q: u32, r: u32) -> Result<Self, Error> {
                Self::from_seed_seq(&SeedSequence::new(u128::from(seed)), seed_size, p, q, r)
            }

            /// Seed from an existing [`SeedSequence`].
            ///
            /// # Errors
            ///
            /// As for [`Self::with_params`].
            pub fn from_seed_seq(
                seed_seq: &SeedSequence,
                seed_size: u32,
                p: u32,
                q: u32,
                r: u32,
            ) -> Result<Self, Error> {
                if !(1..=3).contains(&seed_size) {
                    return Err(Error::InvalidValue("seed size must be one of 1, 2 or 3"));
                }
                if p >= $bits || q >= $bits || r >= $bits {
                    return Err(Error::InvalidValue("rotations must be below the word width"));
                }
                let mut words: [$word; 3] = [0; 3];
                for (slot, w) in words.iter_mut().zip(seed_seq.$gen_words(seed_size as usize)) {
                    *slot = w;
                }
                let (b, c, d) = match seed_size {
                    1 => (words[0], words[0], words[0]),
                    2 => (words[0], words[1], 1),
                    _ => (words[0], words[1], words[2]),
                };
                let mut gen = Self {
                    a: INIT as $word,
                    b,
                    c,
                    d,
                    p,
                    q,
                    r,
                    carry: Uint32Carry::empty(),
                    seed_seq: Some(seed_seq.clone()),
                };
                for _ in 0..WARMUP_ROUNDS {
                    gen.next_word();
                }
                gen.carry.clear();
                Ok(gen)
            }

            /// The seed sequence this generator was built from, if any.
            pub fn seed_seq(&self) -> Option<&SeedSequence> {
                self.seed_seq.as_ref()
            }

            #[inline]
            fn next_word(&mut self) -> $word {
                let e = self.a.wrapping_sub(self.b.rotate_left(self.p));
                self.a = self.b ^ self.c.rotate_left(self.q);
                self.b = self.c.wrapping_add(if self.r != 0 {
                    self.d.rotate_left(self.r)
                } else {
                    self.d
                });
                self.c = self.d.wrapping_add(e);
                self.d = e.wrapping_add(self.a);
                self.d
            }
        }

        impl SeedableRng for $Gen {
            type Seed = [u8; 32];

            fn from_seed(seed: Self::Seed) -> Self {
                let mut words = [0u32; 8];
                for (w, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
                    *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                let seq = SeedSequence::from_entropy_words(&words);
                match Self::from_seed_seq(&seq, 1, $defaults.0, $defaults.1, $defaults.2) {
                    Ok(gen) => gen,
                    Err(_) => unreachable!(),
                }
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
                u64::from(self.next_word())
            }

            fn next_double(&mut self) -> f64 {
                if $bits == 64 {
                    conv::double_from_u64(self.next_raw())
                } else {
                    let a = self.next_word() as u32;
                    let b = self.next_word() as u32;
                    conv::double_from_u32_pair(a, b)
                }
            }

            fn state(&self) -> StateRecord<$State> {
                StateRecord::new(
                    Self::TAG,
                    $State {
                        a: self.a,
                        b: self.b,
                        c: self.c,
                        d: self.d,
                        p: self.p,
                        q: self.q,
                        r: self.r,
                    },
                    self.carry,
                )
            }

            fn try_set_state(&mut self, record: &StateRecord<$State>) -> Result<(), Error> {
                record.expect_tag(Self::TAG)?;
                let s = &record.state;
                if s.p >= $bits || s.q >= $bits || s.r >= $bits {
                    return Err(Error::InvalidState("rotations must be below the word width"));
                }
                self.a = s.a;
                self.b = s.b;
                self.c = s.c;
                self.d = s.d;
                self.p = s.p;
                self.q = s.q;
                self.r = s.r;
                self.carry = record.carry();
                Ok(())
            }
        }
    };
}

jsf_generator!(
    Jsf64,
    Jsf64State,
    "JSF",
    u64,
    64u32,
    generate_u64,
    (39u32, 11u32, 0u32),
    "JSF at 64-bit width (default rotations `(39, 11, 0)`)."
);

jsf_generator!(
    Jsf32,
    Jsf32State,
    "JSF32",
    u32,
    32u32,
    generate_u32,
    (23u32, 16u32, 11u32),
    "JSF at 32-bit width (default rotations `(23, 16, 11)`)."
);

impl RngCore for Jsf64 {
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

impl RngCore for Jsf32 {
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

//! Seeding helper and the shared impl surface of the four generators.

/// One SplitMix64 draw, returning `(output, next_state)`.
pub(crate) fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (z ^ (z >> 31), state)
}

/// Everything but the update function: constructors, `RngCore`,
/// `SeedableRng`, `BitGenerator`, `Jumpable` and the state payload for a
/// generator whose state is `[u64; $n]`.  The update function `next_word`
/// and the jump mask `JUMP` come from the expanding module.
macro_rules! impl_xoshiro_generator {
    ($Gen:ident, $State:ident, $tag:literal, $n:expr, $jump_doc:expr) => {
        /// Serializable state payload.
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
        pub struct $State {
            /// The state words.
            pub s: [u64; $n],
        }

        impl $Gen {
            /// Seed through a [`SeedSequence`] built from `seed`.
            pub fn seeded(seed: u64) -> Self {
                Self::from_seed_seq(&SeedSequence::new(u128::from(seed)))
            }

            /// Seed from an existing [`SeedSequence`]; an all-zero draw is
            /// repaired through SplitMix64 so the generator never sticks.
            pub fn from_seed_seq(seed_seq: &SeedSequence) -> Self {
                let mut s = [0u64; $n];
                seed_seq.fill_u64(&mut s);
                if s.iter().all(|&w| w == 0) {
                    s[0] = crate::common::splitmix64(0).0;
                }
                Self { s, carry: Uint32Carry::empty(), seed_seq: Some(seed_seq.clone()) }
            }

            /// Expand a single word into the full state with SplitMix64.
            pub fn from_u64(seed: u64) -> Self {
                let mut sm = seed;
                let mut s = [0u64; $n];
                for slot in s.iter_mut() {
                    let (word, next) = crate::common::splitmix64(sm);
                    *slot = word;
                    sm = next;
                }
                Self { s, carry: Uint32Carry::empty(), seed_seq: None }
            }

            /// The seed sequence this generator was built from, if any.
            pub fn seed_seq(&self) -> Option<&SeedSequence> {
                self.seed_seq.as_ref()
            }
        }

        impl RngCore for $Gen {
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
            const NATIVE_BITS: u32 = 64;
            type State = $State;

            fn next_raw(&mut self) -> u64 {
                self.next_word()
            }

            fn next_double(&mut self) -> f64 {
                bitgen_core::conv::double_from_u64(self.next_word())
            }

            fn state(&self) -> StateRecord<$State> {
                StateRecord::new(Self::TAG, $State { s: self.s }, self.carry)
            }

            fn try_set_state(&mut self, record: &StateRecord<$State>) -> Result<(), Error> {
                record.expect_tag(Self::TAG)?;
                self.s = record.state.s;
                self.carry = record.carry();
                Ok(())
            }
        }

        impl Jumpable for $Gen {
            #[doc = $jump_doc]
            fn jumped(&self, iter: u64) -> Self {
                let mut out = self.clone();
                out.carry = Uint32Carry::empty();
                for _ in 0..iter {
                    out.jump_once();
                }
                out
            }
        }
    };
}

pub(crate) use impl_xoshiro_generator;

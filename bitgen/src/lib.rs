//! Pseudo-random bit generators behind one uniform interface.
//!
//! Every family implements [`BitGenerator`] over [`rand_core::RngCore`]:
//! bit-exact streams that can be serialized, repositioned (`jumped`,
//! `advance`) and split into independent substreams through
//! [`SeedSequence`].  The [`draws`] module builds uniform doubles, floats
//! and polar-method normals on top of any generator.
//!
//! ```
//! use bitgen::{BitGenerator, Jumpable, Pcg64, SeedSequence};
//!
//! let seq = SeedSequence::new(2026);
//! let mut rng = Pcg64::from_seed_seq(&seq);
//! let here = rng.next_double();
//! assert!((0.0..1.0).contains(&here));
//!
//! // an independent stream for a second worker
//! let mut far = rng.jumped(1);
//! assert_ne!(far.next_raw(), rng.next_raw());
//! ```

#![warn(missing_docs)]

pub use bitgen_core::{
    conv, counter, ffi, rand_core, BitGenerator, BitGeneratorExt, Error, Jumpable, SeedSequence,
    StateRecord, Uint32Carry,
};

pub use aesctr_rng::{AesCounter, AesCounterState};
pub use chacha_rng::{ChaCha, ChaChaState};
pub use hc128_rng::{Hc128, Hc128State};
pub use jsf_rng::{Jsf32, Jsf32State, Jsf64, Jsf64State};
pub use mersenne_rngs::{
    Dsfmt, DsfmtState, Mt19937, Mt19937State, Mt64, Mt64State, Sfmt, SfmtState,
};
pub use pcg_rngs::{Pcg32, Pcg32State, Pcg64, Pcg64State};
pub use random123_rngs::{
    Philox, Philox2x32, Philox2x32State, Philox2x64, Philox2x64State, Philox4x32,
    Philox4x32State, Philox4x64, Philox4x64State, ThreeFry, ThreeFry2x32, ThreeFry2x32State,
    ThreeFry2x64, ThreeFry2x64State, ThreeFry4x32, ThreeFry4x32State, ThreeFry4x64,
    ThreeFry4x64State,
};
pub use rdrand_rng::{RdRand, RdRandState};
pub use speck_rng::{Speck128, Speck128State};
pub use xoshiro_rngs::{
    Xoroshiro128, Xoroshiro128State, Xorshift1024, Xorshift1024State, Xoshiro256,
    Xoshiro256State, Xoshiro512, Xoshiro512State,
};

#[allow(deprecated)]
pub use xoshiro_rngs::{Xoshiro256StarStar, Xoshiro512StarStar};

pub mod draws;

//! Mersenne-twister bit generators.
//!
//! Four linear-feedback families over GF(2) with enormous periods:
//!
//! - [`Mt19937`]: the classic 32-bit twister (period 2^19937 − 1);
//! - [`Mt64`]: the 64-bit variant with the same period;
//! - [`Sfmt`]: the SIMD-oriented twister, emitting 64-bit words;
//! - [`Dsfmt`]: the double-precision SIMD twister, whose native output is
//!   an IEEE-754 double in `[1, 2)`.
//!
//! All four support [`Jumpable::jumped`]: a compiled-in jump polynomial is
//! evaluated Horner-style over the state, leaping 2^128 recurrence steps
//! per iteration without touching the output stream in between.
//!
//! ```
//! use bitgen_core::{BitGenerator, Jumpable};
//! use mersenne_rngs::Mt19937;
//!
//! let mut rng = Mt19937::seeded(5);
//! let near = rng.next_raw();
//! let mut far = rng.jumped(1);
//! assert_ne!(far.next_raw(), near);
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

mod dsfmt;
mod jump;
mod jump_data;
mod mt19937;
mod mt64;
mod sfmt;

pub use dsfmt::{Dsfmt, DsfmtState};
pub use mt19937::{Mt19937, Mt19937State};
pub use mt64::{Mt64, Mt64State};
pub use sfmt::{Sfmt, SfmtState};

//! Xor/shift/rotate bit generators.
//!
//! Blackman–Vigna generators with tiny state and very fast output:
//!
//! - [`Xoroshiro128`]: 128-bit state, `+` output (jump distance 2^64);
//! - [`Xoshiro256`]: 256-bit state, `**` output (jump distance 2^128);
//! - [`Xoshiro512`]: 512-bit state, `**` output (jump distance 2^256);
//! - [`Xorshift1024`]: 1024-bit state, `*` output (jump distance 2^512).
//!
//! Jumps XOR precomputed word masks into the state while stepping, so a
//! leap costs a fixed number of plain steps regardless of distance.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

pub(crate) mod common;
mod xoroshiro128;
mod xorshift1024;
mod xoshiro256;
mod xoshiro512;

pub use xoroshiro128::{Xoroshiro128, Xoroshiro128State};
pub use xorshift1024::{Xorshift1024, Xorshift1024State};
pub use xoshiro256::{Xoshiro256, Xoshiro256State};
pub use xoshiro512::{Xoshiro512, Xoshiro512State};

/// Former name of [`Xoshiro256`].
#[deprecated(since = "0.2.0", note = "renamed to Xoshiro256")]
pub type Xoshiro256StarStar = Xoshiro256;

/// Former name of [`Xoshiro512`].
#[deprecated(since = "0.2.0", note = "renamed to Xoshiro512")]
pub type Xoshiro512StarStar = Xoshiro512;

//! Counter-based bit generators from the Random123 family.
//!
//! State is a key plus a little-endian block counter; output block `b` is
//! `E_key(b)` for the family's fixed-round mixing function, so any stream
//! position is one block computation away:
//!
//! - [`Philox4x64`] / [`Philox4x32`] / [`Philox2x64`] / [`Philox2x32`]:
//!   10 rounds of wide multiplies and xors;
//! - [`ThreeFry4x64`] / [`ThreeFry4x32`] / [`ThreeFry2x64`] /
//!   [`ThreeFry2x32`]: 20 add/rotate/xor rounds (Threefish without the
//!   tweak).
//!
//! `advance(delta, counter_only)` either adds `delta` straight to the
//! counter (`counter_only`, the natural parallel-stream partitioning) or
//! repositions by `delta` output words, accounting for the buffered
//! block.  [`Philox`] and [`ThreeFry`] alias the canonical 4x64 shapes.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

mod common;
mod philox;
mod threefry;

pub use philox::{
    Philox2x32, Philox2x32State, Philox2x64, Philox2x64State, Philox4x32, Philox4x32State,
    Philox4x64, Philox4x64State,
};
pub use threefry::{
    ThreeFry2x32, ThreeFry2x32State, ThreeFry2x64, ThreeFry2x64State, ThreeFry4x32,
    ThreeFry4x32State, ThreeFry4x64, ThreeFry4x64State,
};

/// The canonical Philox shape.
pub type Philox = Philox4x64;

/// The canonical ThreeFry shape.
pub type ThreeFry = ThreeFry4x64;

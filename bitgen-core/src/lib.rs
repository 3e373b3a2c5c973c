//! Shared seam for the bitgen workspace.
//!
//! Every generator crate in the workspace implements [`BitGenerator`] on top
//! of [`rand_core::RngCore`].  This crate carries the pieces they share:
//!
//! - [`SeedSequence`]: reproducible entropy mixing used to initialise any
//!   family's state, with tree-structured [`SeedSequence::spawn`] for
//!   independent streams;
//! - [`Uint32Carry`]: the cached half word that lets a 64-bit core serve
//!   32-bit draws without discarding bits;
//! - [`StateRecord`]: the name-tagged state container every family round
//!   trips through (`serde` behind the `serde1` feature);
//! - [`counter`]: little-endian multi-word arithmetic for the counter-based
//!   families' `advance`;
//! - [`ffi`]: a stable function-pointer descriptor for foreign callers.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub use rand_core;

mod carry;
pub mod conv;
pub mod counter;
mod errors;
mod seed_seq;
mod state;

pub use carry::Uint32Carry;
pub use errors::Error;
pub use seed_seq::SeedSequence;
pub use state::StateRecord;

use alloc::vec::Vec;
use rand_core::RngCore;

/// The uniform surface every generator family implements.
///
/// `next_u32`/`next_u64`/`fill_bytes` come from [`RngCore`]; this trait adds
/// the native raw word, the canonical double draw and tagged state access.
pub trait BitGenerator: RngCore {
    /// Family tag carried by serialized state records.
    const TAG: &'static str;

    /// Width of one raw word in bits: 32, 64, or 53 for the
    /// double-native dSFMT.
    const NATIVE_BITS: u32;

    /// Family-specific state payload of a [`StateRecord`].
    type State: Clone + PartialEq + core::fmt::Debug;

    /// The next word at the family's native width, zero-extended to `u64`.
    fn next_raw(&mut self) -> u64;

    /// The next double in `[0, 1)`.
    ///
    /// 64-bit cores use the top 53 bits of one word; 32-bit cores combine
    /// two words (see [`conv`]); dSFMT yields its native double.
    fn next_double(&mut self) -> f64;

    /// Snapshot the full generator state, including the carry.
    fn state(&self) -> StateRecord<Self::State>;

    /// Restore a previously captured state.
    ///
    /// # Errors
    ///
    /// [`Error::WrongFamily`] when the record's tag names another family,
    /// [`Error::InvalidState`] when a variable-length field has the wrong
    /// shape.  The generator is left untouched on error.
    fn try_set_state(&mut self, record: &StateRecord<Self::State>) -> Result<(), Error>;
}

/// Fixed-distance stream leap.
pub trait Jumpable: Sized {
    /// A new generator advanced by `iter` times the family's canonical jump
    /// distance.  The receiver is left untouched; the result's carry is
    /// cleared.
    fn jumped(&self, iter: u64) -> Self;
}

/// Bulk helpers shared by every family.
pub trait BitGeneratorExt: BitGenerator {
    /// `n` native raw words.
    fn random_raw(&mut self, n: usize) -> Vec<u64> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.next_raw());
        }
        out
    }

    /// Advance the state by `n` raw draws, discarding the output.
    fn discard_raw(&mut self, n: usize) {
        for _ in 0..n {
            self.next_raw();
        }
    }

    /// Timing hot loop.  `dtype` selects the drawn width: `"uint64"` or
    /// `"double"`; anything else (notably `"int32"`) is rejected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] for an unsupported `dtype`.
    fn benchmark(&mut self, n: usize, dtype: &str) -> Result<(), Error> {
        match dtype {
            "uint64" => {
                for _ in 0..n {
                    self.next_u64();
                }
                Ok(())
            }
            "double" => {
                for _ in 0..n {
                    self.next_double();
                }
                Ok(())
            }
            _ => Err(Error::InvalidValue("benchmark dtype must be uint64 or double")),
        }
    }
}

impl<G: BitGenerator + ?Sized> BitGeneratorExt for G {}

pub mod ffi;

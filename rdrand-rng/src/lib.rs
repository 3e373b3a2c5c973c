//! Hardware entropy through the RDRAND instruction.
//!
//! [`RdRand`] keeps no generator state: every word is read from the
//! CPU's entropy source, retrying a bounded number of times when the
//! instruction reports exhaustion.  Construction fails on processors
//! without the feature, so a constructed generator can always draw.
//! Streams from separate handles are independent by nature, which is all
//! [`Jumpable::jumped`] needs to provide here.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub use bitgen_core::{BitGenerator, Jumpable};

use bitgen_core::{conv, Error, StateRecord, Uint32Carry};
use rand_core::RngCore;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
cpufeatures::new!(cpuid_rdrand, "rdrand");

/// Retries per word before the hardware is declared failed.
const RETRIES: u32 = 10;

/// RDRAND-backed bit generator.
#[derive(Clone, Debug)]
pub struct RdRand {
    carry: Uint32Carry,
}

/// RDRAND has no reproducible state; the payload is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct RdRandState {}

impl RdRand {
    /// Probe the CPU and construct.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] when the processor lacks RDRAND.
    pub fn new() -> Result<Self, Error> {
        if supported() {
            Ok(Self { carry: Uint32Carry::empty() })
        } else {
            Err(Error::Unavailable("CPU does not support RDRAND"))
        }
    }

    /// One hardware word, surfacing exhaustion instead of panicking.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] when the instruction keeps failing past the
    /// retry budget.
    pub fn try_next_u64(&mut self) -> Result<u64, Error> {
        hardware_word()
    }
}

/// Whether the running CPU offers RDRAND.
pub fn supported() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(any(target_arch = "x86_64", target_arch = "x86"))] {
            cpuid_rdrand::get()
        } else {
            false
        }
    }
}

#[cfg(target_arch = "x86_64")]
mod backend {
    #![allow(unsafe_code)]

    use super::RETRIES;

    pub(crate) fn word() -> Option<u64> {
        let mut word = 0u64;
        for _ in 0..RETRIES {
            // SAFETY: callers exist only after the CPUID probe succeeded
            if unsafe { core::arch::x86_64::_rdrand64_step(&mut word) } == 1 {
                return Some(word);
            }
        }
        None
    }
}

#[cfg(target_arch = "x86")]
mod backend {
    #![allow(unsafe_code)]

    use super::RETRIES;

    fn half() -> Option<u32> {
        let mut word = 0u32;
        for _ in 0..RETRIES {
            // SAFETY: callers exist only after the CPUID probe succeeded
            if unsafe { core::arch::x86::_rdrand32_step(&mut word) } == 1 {
                return Some(word);
            }
        }
        None
    }

    pub(crate) fn word() -> Option<u64> {
        let low = half()?;
        let high = half()?;
        Some(u64::from(low) | (u64::from(high) << 32))
    }
}

fn hardware_word() -> Result<u64, Error> {
    cfg_if::cfg_if! {
        if #[cfg(any(target_arch = "x86_64", target_arch = "x86"))] {
            backend::word().ok_or(Error::Unavailable("RDRAND failed to return entropy"))
        } else {
            Err(Error::Unavailable("RDRAND is not available on this architecture"))
        }
    }
}

impl RngCore for RdRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut carry = self.carry;
        let word = carry.next_u32(|| self.next_u64());
        self.carry = carry;
        word
    }

    /// # Panics
    ///
    /// Panics when the hardware keeps failing past the retry budget; use
    /// [`RdRand::try_next_u64`] or [`RngCore::try_fill_bytes`] to handle
    /// that case.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        match hardware_word() {
            Ok(word) => word,
            Err(_) => panic!("RDRAND failed to return entropy"),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        for chunk in dest.chunks_mut(8) {
            let word = self.try_next_u64().map_err(|_| hardware_error())?;
            let bytes = word.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}

fn hardware_error() -> rand_core::Error {
    // nonzero by construction
    match core::num::NonZeroU32::new(rand_core::Error::CUSTOM_START + 1) {
        Some(code) => rand_core::Error::from(code),
        None => unreachable!(),
    }
}

impl BitGenerator for RdRand {
    const TAG: &'static str = "RDRAND";
    const NATIVE_BITS: u32 = 64;
    type State = RdRandState;

    fn next_raw(&mut self) -> u64 {
        self.next_u64()
    }

    fn next_double(&mut self) -> f64 {
        conv::double_from_u64(self.next_u64())
    }

    fn state(&self) -> StateRecord<RdRandState> {
        StateRecord::new(Self::TAG, RdRandState {}, self.carry)
    }

    fn try_set_state(&mut self, record: &StateRecord<RdRandState>) -> Result<(), Error> {
        record.expect_tag(Self::TAG)?;
        self.carry = record.carry();
        Ok(())
    }
}

impl Jumpable for RdRand {
    /// Hardware streams are independent; jumping hands back a fresh
    /// handle with the carry cleared.
    fn jumped(&self, _iter: u64) -> Self {
        Self { carry: Uint32Carry::empty() }
    }
}
